//! Application-level span helpers.

use tracing::Span;

use crate::init::build_sha;

/// Build the top-level span for one invocation of a WIT command.
///
/// Attach it with `tracing::Instrument` so the span stays correct across awaits.
#[must_use]
pub fn app_span(command: &str) -> Span {
    tracing::info_span!("wit", command = %command, build_sha = %build_sha())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Instrument;

    #[tokio::test]
    async fn app_span_can_instrument_futures() {
        let value = async { 7 }.instrument(app_span("seed")).await;
        assert_eq!(value, 7);
    }
}
