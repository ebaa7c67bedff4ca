use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{InviteError, InviteResult};

/// Largest accepted raster scale. 900 logical pixels times this stays under the raster size cap.
pub const MAX_SCALE: u32 = 8;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Fixed event wording printed on the card and used in the share text.
pub struct EventDetails {
    /// Card heading.
    pub title: String,
    /// Latin subtitle under the heading.
    pub subtitle: String,
    /// Line preceding the event name.
    pub invite_line: String,
    /// Short event name, also used in share titles.
    pub event_name: String,
    /// Calendar date line.
    pub date: String,
    /// Lunar calendar date line.
    pub lunar_date: String,
    /// Time of day line.
    pub time: String,
    /// Venue line.
    pub venue: String,
    /// Closing line near the bottom of the card.
    pub closing: String,
    /// Compact date and time used inside the share text.
    pub share_time: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            title: "升学宴邀请函".to_string(),
            subtitle: "Invitation".to_string(),
            invite_line: "诚挚邀请您参加".to_string(),
            event_name: "升学宴".to_string(),
            date: "2025年8月16日 （周六）".to_string(),
            lunar_date: "农历六月廿三".to_string(),
            time: "上午11:30".to_string(),
            venue: "地点:斜桥小虎酒楼一楼大厅".to_string(),
            closing: "期待您的到来".to_string(),
            share_time: "2025年8月16日 11:30".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Runtime configuration, loadable from JSON. Every field is optional.
pub struct InvitationConfig {
    /// Event wording.
    pub event: EventDetails,
    /// Link shared by the share chain.
    pub page_url: String,
    /// Delay between the transition screen and the invitation screen.
    pub transition_delay_ms: u64,
    /// Default lifetime of a notice.
    pub notice_duration_ms: u64,
    /// Raster scale applied to the 600x900 logical card.
    pub scale: u32,
    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` fonts.
    pub font_dir: Option<PathBuf>,
    /// External program (argv) used as the native share capability.
    pub share_command: Option<Vec<String>>,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            event: EventDetails::default(),
            page_url: "http://localhost/index.html".to_string(),
            transition_delay_ms: 2_000,
            notice_duration_ms: 2_000,
            scale: 3,
            font_dir: None,
            share_command: None,
        }
    }
}

impl InvitationConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> InviteResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| InviteError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> InviteResult<()> {
        if self.transition_delay_ms == 0 {
            return Err(InviteError::validation("transition_delay_ms must be > 0"));
        }
        if self.notice_duration_ms == 0 {
            return Err(InviteError::validation("notice_duration_ms must be > 0"));
        }
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(InviteError::validation(format!(
                "scale must be in 1..={MAX_SCALE}"
            )));
        }
        if self.page_url.trim().is_empty() {
            return Err(InviteError::validation("page_url must be non-empty"));
        }
        if let Some(cmd) = &self.share_command
            && cmd.first().is_none_or(|p| p.trim().is_empty())
        {
            return Err(InviteError::validation(
                "share_command must name a program",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
