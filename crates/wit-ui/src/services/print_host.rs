//! Browser print host backed by a popup window.

use gloo::console;
use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::features::labels::print::{PrintContext, PrintError, PrintHost};

/// Opens a blank popup per print job.
pub(crate) struct BrowserPrintHost;

pub(crate) struct BrowserPrintContext {
    window: Window,
}

impl PrintHost for BrowserPrintHost {
    type Context = BrowserPrintContext;

    fn open(&self) -> Result<Self::Context, PrintError> {
        let window = web_sys::window().ok_or(PrintError::Unavailable)?;
        match window.open_with_url_and_target("", "_blank") {
            Ok(Some(window)) => Ok(BrowserPrintContext { window }),
            Ok(None) | Err(_) => Err(PrintError::Unavailable),
        }
    }
}

impl BrowserPrintContext {
    fn document(&self) -> Result<Document, PrintError> {
        self.window
            .document()
            .ok_or_else(|| PrintError::Host("print window has no document".to_string()))
    }
}

impl PrintContext for BrowserPrintContext {
    fn write(&mut self, markup: &str) -> Result<(), PrintError> {
        self.document()?
            .write(&Array::of1(&JsValue::from_str(markup)))
            .map_err(host_error)
    }

    fn finish(&mut self) -> Result<(), PrintError> {
        self.document()?.close().map_err(host_error)
    }

    fn print(&mut self) -> Result<(), PrintError> {
        self.window.print().map_err(host_error)
    }

    fn close(&mut self) {
        if let Err(err) = self.window.close() {
            console::error!("print window close failed", err);
        }
    }
}

fn host_error(err: JsValue) -> PrintError {
    PrintError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
