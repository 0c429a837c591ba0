//! Environment probes for integration suites.

use std::path::Path;
use std::process::Command;

/// Set to any non-empty value to skip Docker-backed suites even when a daemon is reachable.
pub const SKIP_DOCKER_ENV: &str = "WIT_SKIP_DOCKER_TESTS";

const DEFAULT_SOCKET: &str = "/var/run/docker.sock";

/// Where the Docker daemon is expected to listen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DockerEndpoint {
    Socket(String),
    Remote,
    Default,
}

impl DockerEndpoint {
    fn from_host(host: Option<&str>) -> Self {
        match host.map(str::trim).filter(|host| !host.is_empty()) {
            Some(host) => host
                .strip_prefix("unix://")
                .map_or(Self::Remote, |path| Self::Socket(path.to_string())),
            None => Self::Default,
        }
    }

    fn reachable(&self) -> bool {
        match self {
            Self::Socket(path) => Path::new(path).exists(),
            Self::Remote => true,
            Self::Default => Path::new(DEFAULT_SOCKET).exists() || docker_info_succeeds(),
        }
    }
}

fn docker_info_succeeds() -> bool {
    Command::new("docker")
        .arg("info")
        .output()
        .is_ok_and(|output| output.status.success())
}

fn skip_requested(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

/// Whether Docker-backed integration tests should run.
///
/// Honors [`SKIP_DOCKER_ENV`] first, then `DOCKER_HOST`, then the default socket.
#[must_use]
pub fn docker_available() -> bool {
    if skip_requested(std::env::var(SKIP_DOCKER_ENV).ok().as_deref()) {
        return false;
    }
    DockerEndpoint::from_host(std::env::var("DOCKER_HOST").ok().as_deref()).reachable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_host_maps_to_socket_path() {
        let endpoint = DockerEndpoint::from_host(Some("unix:///missing/docker.sock"));
        assert_eq!(
            endpoint,
            DockerEndpoint::Socket("/missing/docker.sock".to_string())
        );
        assert!(!endpoint.reachable());
    }

    #[test]
    fn tcp_host_is_trusted() {
        let endpoint = DockerEndpoint::from_host(Some("tcp://127.0.0.1:2375"));
        assert_eq!(endpoint, DockerEndpoint::Remote);
        assert!(endpoint.reachable());
    }

    #[test]
    fn blank_host_falls_back_to_default() {
        assert_eq!(DockerEndpoint::from_host(Some("  ")), DockerEndpoint::Default);
        assert_eq!(DockerEndpoint::from_host(None), DockerEndpoint::Default);
    }

    #[test]
    fn skip_flag_requires_a_value() {
        assert!(skip_requested(Some("1")));
        assert!(!skip_requested(Some(" ")));
        assert!(!skip_requested(None));
    }
}
