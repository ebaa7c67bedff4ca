use std::{
    io::Write as _,
    process::{Command, Stdio},
};

use crate::{
    foundation::error::{InviteError, InviteResult},
    share::{
        chain::{ClipboardWriter, ShareSheet},
        payload::SharePayload,
    },
};

/// Capability that never exists. Stands in for both seams on headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl ShareSheet for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&mut self, _payload: &SharePayload) -> InviteResult<()> {
        Err(InviteError::share("native share is not available"))
    }
}

impl ClipboardWriter for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn write_text(&mut self, _text: &str) -> InviteResult<()> {
        Err(InviteError::share("clipboard is not available"))
    }
}

/// Native share backed by an external program.
///
/// The program receives the payload as a JSON object (`title`, `text`, `url`) on stdin and must
/// exit successfully for the share to count.
#[derive(Clone, Debug, Default)]
pub struct CommandShareSheet {
    argv: Option<Vec<String>>,
}

impl CommandShareSheet {
    pub fn new(argv: Option<Vec<String>>) -> Self {
        Self {
            argv: argv.filter(|a| a.first().is_some_and(|p| !p.trim().is_empty())),
        }
    }
}

impl ShareSheet for CommandShareSheet {
    fn is_available(&self) -> bool {
        self.argv.is_some()
    }

    fn share(&mut self, payload: &SharePayload) -> InviteResult<()> {
        let Some((program, args)) = self.argv.as_ref().and_then(|a| a.split_first()) else {
            return Err(InviteError::share("no share command configured"));
        };

        let body = serde_json::to_vec(payload).map_err(|e| InviteError::serde(e.to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| InviteError::share(format!("failed to spawn '{program}': {e}")))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| InviteError::share("failed to open share command stdin"))?;
        // A command that exits without reading stdin is judged by its exit status alone.
        if let Err(e) = stdin.write_all(&body) {
            tracing::debug!(error = %e, "share command closed stdin early");
        }
        drop(stdin);

        let output = child
            .wait_with_output()
            .map_err(|e| InviteError::share(format!("failed to wait for '{program}': {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InviteError::share(format!(
                "'{program}' exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Desktop clipboard through `arboard`. Unavailable when no clipboard could be opened.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::debug!(error = %e, "system clipboard unavailable");
                None
            }
        };
        Self { inner }
    }
}

#[cfg(feature = "system-clipboard")]
impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardWriter for SystemClipboard {
    fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn write_text(&mut self, text: &str) -> InviteResult<()> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| InviteError::share("clipboard is not available"))?;
        clipboard
            .set_text(text)
            .map_err(|e| InviteError::share(format!("clipboard write failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/share/adapters.rs"]
mod tests;
