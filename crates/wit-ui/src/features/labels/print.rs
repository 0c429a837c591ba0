//! Print document synthesis and the scoped print session.
//!
//! # Design
//! - The printed document is the live preview markup plus a fixed stylesheet,
//!   so preview and print can never disagree on content.
//! - The host context is released by [`PrintSession`] on drop, including when
//!   writing or printing fails or the user cancels the print dialog.

use std::fmt::{self, Display, Formatter};
use std::future::Future;

use crate::features::labels::logic::{QR_ONLY_SIZE_MM, QR_SIZE_MM, can_print};
use crate::features::labels::state::{Columns, LabelDialogState};

/// Delay between finishing the document and invoking print, letting the
/// isolated context lay out before the print dialog appears.
pub const PRINT_SETTLE_DELAY_MS: u32 = 250;
/// Gap between grid cells in millimetres.
pub const GRID_GAP_MM: u8 = 4;
/// Body class applied in QR-only mode.
pub const QR_ONLY_CLASS: &str = "qr-only";
/// Class of the grid container inside the preview markup.
pub const GRID_CLASS: &str = "label-grid";

/// Failure reported by a print host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintError {
    /// The host refused to open a print context (for example a popup blocker).
    Unavailable,
    /// The host failed while writing, printing or closing.
    Host(String),
}

impl Display for PrintError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => formatter.write_str("print window unavailable"),
            Self::Host(_) => formatter.write_str("print host failed"),
        }
    }
}

impl std::error::Error for PrintError {}

/// Opens isolated documents for printing.
pub trait PrintHost {
    /// Context type produced by [`PrintHost::open`].
    type Context: PrintContext;

    /// Open a new, isolated document context.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Unavailable`] when no context can be opened.
    fn open(&self) -> Result<Self::Context, PrintError>;
}

/// One isolated document opened by a [`PrintHost`].
pub trait PrintContext {
    /// Write markup into the document.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Host`] if the host rejects the write.
    fn write(&mut self, markup: &str) -> Result<(), PrintError>;

    /// Close the document's write stream.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Host`] if the host rejects the call.
    fn finish(&mut self) -> Result<(), PrintError>;

    /// Summon the system print dialog.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Host`] if the host rejects the call.
    fn print(&mut self) -> Result<(), PrintError>;

    /// Close the context. Must be safe to call once after any other call failed.
    fn close(&mut self);
}

/// Open print context that is closed when dropped.
pub struct PrintSession<C: PrintContext> {
    context: C,
}

impl<C: PrintContext> PrintSession<C> {
    /// Open a session on `host`.
    ///
    /// # Errors
    ///
    /// Propagates the host's open failure.
    pub fn open<H>(host: &H) -> Result<Self, PrintError>
    where
        H: PrintHost<Context = C> + ?Sized,
    {
        Ok(Self {
            context: host.open()?,
        })
    }

    /// Write a complete document and close its write stream.
    ///
    /// # Errors
    ///
    /// Propagates host write failures.
    pub fn write_document(&mut self, document: &str) -> Result<(), PrintError> {
        self.context.write(document)?;
        self.context.finish()
    }

    /// Invoke print on the written document.
    ///
    /// # Errors
    ///
    /// Propagates host print failures.
    pub fn print(&mut self) -> Result<(), PrintError> {
        self.context.print()
    }
}

impl<C: PrintContext> Drop for PrintSession<C> {
    fn drop(&mut self) {
        self.context.close();
    }
}

/// Result of a print request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintOutcome {
    /// Nothing to print; no context was opened.
    Skipped,
    /// The document was handed to the print dialog.
    Printed,
}

/// Print the current preview if the dialog allows it.
///
/// `preview_markup` is the rendered preview container's inner HTML, `None`
/// when the container is not mounted. `settle` is awaited between writing the
/// document and invoking print.
///
/// # Errors
///
/// Returns the host failure; the context is closed either way.
pub async fn print_labels<H, F>(
    host: &H,
    state: &LabelDialogState,
    preview_markup: Option<&str>,
    settle: F,
) -> Result<PrintOutcome, PrintError>
where
    H: PrintHost + ?Sized,
    F: Future<Output = ()>,
{
    let Some(markup) = preview_markup.filter(|_| can_print(state, true)) else {
        return Ok(PrintOutcome::Skipped);
    };
    let document = compose_document(markup, state.columns, state.show_qr_only);

    let mut session = PrintSession::open(host)?;
    session.write_document(&document)?;
    settle.await;
    session.print()?;
    Ok(PrintOutcome::Printed)
}

/// Stylesheet shared by every print document.
#[must_use]
pub fn print_stylesheet(columns: Columns) -> String {
    let columns = columns.get();
    format!(
        "\
* {{ box-sizing: border-box; }}
body {{ margin: 0; padding: 8mm; font-family: system-ui, sans-serif; color: #111; }}
.{GRID_CLASS} {{ display: grid; grid-template-columns: repeat({columns}, 1fr); gap: {GRID_GAP_MM}mm; }}
.label-card {{ display: flex; align-items: center; gap: 3mm; padding: 3mm; border: 1px dashed #999; border-radius: 2mm; break-inside: avoid; page-break-inside: avoid; }}
.label-qr {{ flex: none; width: {QR_SIZE_MM}mm; height: {QR_SIZE_MM}mm; }}
.label-info {{ min-width: 0; }}
.label-name {{ font-weight: 600; font-size: 11pt; }}
.label-detail {{ font-size: 9pt; color: #444; }}
.label-barcode {{ font-family: ui-monospace, monospace; font-size: 8pt; }}
.label-expiration {{ font-size: 8pt; font-weight: 600; color: #b91c1c; }}
body.{QR_ONLY_CLASS} .label-info {{ display: none; }}
body.{QR_ONLY_CLASS} .label-card {{ justify-content: center; padding: 1.5mm; }}
body.{QR_ONLY_CLASS} .label-qr {{ width: {QR_ONLY_SIZE_MM}mm; height: {QR_ONLY_SIZE_MM}mm; }}
@media print {{
  body {{ padding: 0; }}
  .label-card {{ border: 1px solid #000; border-radius: 0; }}
}}
"
    )
}

/// Standalone HTML document wrapping the preview markup verbatim.
#[must_use]
pub fn compose_document(preview_markup: &str, columns: Columns, show_qr_only: bool) -> String {
    let body_class = if show_qr_only { QR_ONLY_CLASS } else { "" };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Labels</title>\n<style>\n{}</style>\n</head>\n<body class=\"{body_class}\">\n{preview_markup}\n</body>\n</html>\n",
        print_stylesheet(columns)
    )
}
