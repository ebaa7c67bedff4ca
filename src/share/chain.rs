use crate::{foundation::error::InviteResult, share::payload::SharePayload};

/// Platform share sheet taking the whole payload.
pub trait ShareSheet {
    /// Whether the capability exists at all. Unavailable sheets are skipped without a call.
    fn is_available(&self) -> bool;
    fn share(&mut self, payload: &SharePayload) -> InviteResult<()>;
}

/// Clipboard able to hold the shared link.
pub trait ClipboardWriter {
    fn is_available(&self) -> bool;
    fn write_text(&mut self, text: &str) -> InviteResult<()>;
}

/// Which step of the fallback chain handled the share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet accepted the payload.
    Shared,
    /// The URL was copied to the clipboard.
    LinkCopied,
    /// Neither capability worked; the payload must be shown in the manual dialog.
    Manual(SharePayload),
}

/// Try the native sheet, then the clipboard, then fall through to the manual dialog.
///
/// Each step runs only when the previous one is unavailable or failed. No step is retried.
#[tracing::instrument(skip_all, fields(url = %payload.url))]
pub fn run_share_chain(
    payload: &SharePayload,
    sheet: &mut dyn ShareSheet,
    clipboard: &mut dyn ClipboardWriter,
) -> ShareOutcome {
    if sheet.is_available() {
        match sheet.share(payload) {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => tracing::warn!(error = %e, "native share failed"),
        }
    } else {
        tracing::debug!("native share unavailable");
    }

    if clipboard.is_available() {
        match clipboard.write_text(&payload.url) {
            Ok(()) => return ShareOutcome::LinkCopied,
            Err(e) => tracing::warn!(error = %e, "clipboard copy failed"),
        }
    } else {
        tracing::debug!("clipboard unavailable");
    }

    ShareOutcome::Manual(payload.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/share/chain.rs"]
mod tests;
