//! Shared API client context.
//!
//! One client per app boot, pointed at the origin the page names.

use std::rc::Rc;

use gloo::utils::{document, window};

use crate::services::api::ApiClient;
use crate::services::base_url::{API_BASE_META, resolve_api_base};

const FALLBACK_ORIGIN: &str = "http://localhost:8080";

#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Build the context from the `wit-api-base` meta tag, else the page origin.
    pub(crate) fn from_page() -> Self {
        let meta = document()
            .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
            .ok()
            .flatten()
            .and_then(|element| element.get_attribute("content"));
        let origin = window()
            .location()
            .origin()
            .unwrap_or_else(|_| FALLBACK_ORIGIN.to_string());
        Self {
            client: Rc::new(ApiClient::new(resolve_api_base(meta.as_deref(), &origin))),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
