use crate::{app::notice::NoticeBoard, share::payload::SharePayload};

/// Name shown on the card and in share texts when the guest left the field empty.
pub const GUEST_PLACEHOLDER: &str = "尊贵的亲朋好友";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The three mutually exclusive screens.
pub enum Screen {
    /// Name collection.
    #[default]
    Entry,
    /// Intermediate screen shown while the auto-advance is pending.
    Transition,
    /// Personalized invitation.
    Invitation,
}

impl Screen {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Transition => "transition",
            Self::Invitation => "invitation",
        }
    }
}

/// Whitespace-trimmed guest name. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GuestName(String);

impl GuestName {
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The name, or `fallback` when empty.
    pub fn or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.0.is_empty() { fallback } else { &self.0 }
    }

    pub fn display(&self) -> &str {
        self.or(GUEST_PLACEHOLDER)
    }
}

/// Where a click on the share dialog landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    CloseButton,
    Backdrop,
    /// Anywhere inside the dialog body other than the close button.
    Dialog,
}

/// Manual share dialog: title, text and a read-only URL field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareModal {
    pub payload: SharePayload,
}

/// Complete UI state. Mutated only through [`crate::Controller`]; views read it.
#[derive(Debug, Default, Clone)]
pub struct AppState {
    pub(crate) screen: Screen,
    pub(crate) input: String,
    pub(crate) name: GuestName,
    pub(crate) displayed_name: Option<String>,
    pub(crate) notices: NoticeBoard,
    pub(crate) modal: Option<ShareModal>,
}

impl AppState {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Raw text currently in the name field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn name(&self) -> &GuestName {
        &self.name
    }

    pub fn confirm_enabled(&self) -> bool {
        !self.name.is_empty()
    }

    /// Name printed on the invitation screen, set when that screen is reached.
    pub fn displayed_name(&self) -> Option<&str> {
        self.displayed_name.as_deref()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn modal(&self) -> Option<&ShareModal> {
        self.modal.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
