use std::path::{Path, PathBuf};

use crate::{
    app::{
        notice::NoticeId,
        scheduler::{Scheduler, TaskToken},
        state::{AppState, GuestName, ModalClick, Screen, ShareModal},
    },
    config::model::InvitationConfig,
    export::png::download,
    foundation::{core::Millis, error::InviteResult},
    render::raster::InvitationRenderer,
    share::{
        chain::{ClipboardWriter, ShareOutcome, ShareSheet, run_share_chain},
        payload::SharePayload,
    },
    store::kv::{KeyValueStore, PLAYER_NAME_KEY},
};

pub const MSG_NAME_REQUIRED: &str = "请输入亲朋好友名称";
pub const MSG_SHARED: &str = "分享成功！";
pub const MSG_LINK_COPIED: &str = "链接已复制到剪贴板！";
pub const MSG_GENERATING: &str = "正在生成图片...";
pub const MSG_DOWNLOADED: &str = "邀请函已下载！";
pub const MSG_EXPORT_FAILED: &str = "生成图片失败，请重试";

/// Keys with a global meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Confirms from the name field when the trimmed name is non-empty.
    Enter,
    /// Full reset from any screen.
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    ShowInvitation,
    DismissNotice(NoticeId),
}

/// Drives [`AppState`] from user events and elapsed time.
///
/// Every time-dependent call takes `now`; the controller never reads a clock.
pub struct Controller<S> {
    state: AppState,
    store: S,
    config: InvitationConfig,
    scheduler: Scheduler<Deferred>,
    pending_advance: Option<TaskToken>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Start on the entry screen, pre-filling the name from `store` when one was saved.
    pub fn load(store: S, config: InvitationConfig) -> InviteResult<Self> {
        config.validate()?;

        let mut state = AppState::default();
        if let Some(stored) = store.get(PLAYER_NAME_KEY)?
            && !stored.is_empty()
        {
            tracing::debug!(name = %stored, "restored stored name");
            state.name = GuestName::parse(&stored);
            state.input = stored;
        }

        Ok(Self {
            state,
            store,
            config,
            scheduler: Scheduler::new(),
            pending_advance: None,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &InvitationConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.scheduler.next_due()
    }

    pub fn advance_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Replace the name field's contents. The field only exists on the entry screen; edits
    /// anywhere else are ignored so the confirmed name stays the one that was persisted.
    pub fn set_name(&mut self, text: &str) {
        if self.state.screen != Screen::Entry {
            tracing::debug!(screen = self.state.screen.as_str(), "name edit ignored");
            return;
        }
        self.state.input = text.to_string();
        self.state.name = GuestName::parse(text);
    }

    /// Persist the name and start the timed advance to the invitation screen.
    ///
    /// Returns `Ok(false)` when the name is empty; a notice is raised and nothing else changes.
    pub fn confirm(&mut self, now: Millis) -> InviteResult<bool> {
        if self.state.name.is_empty() {
            self.notify(now, MSG_NAME_REQUIRED);
            return Ok(false);
        }

        self.store.set(PLAYER_NAME_KEY, self.state.name.as_str())?;

        if let Some(previous) = self.pending_advance.take() {
            self.scheduler.cancel(previous);
        }
        self.show(Screen::Transition);
        self.pending_advance = Some(self.scheduler.schedule(
            now,
            self.config.transition_delay_ms,
            Deferred::ShowInvitation,
        ));
        Ok(true)
    }

    /// Clear the stored name and return to the entry screen. Cancels a pending advance.
    pub fn reset(&mut self) -> InviteResult<()> {
        self.store.remove(PLAYER_NAME_KEY)?;

        if let Some(tok) = self.pending_advance.take() {
            self.scheduler.cancel(tok);
        }
        self.state.input.clear();
        self.state.name = GuestName::default();
        self.state.displayed_name = None;
        self.state.modal = None;
        self.show(Screen::Entry);
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key, now: Millis) -> InviteResult<()> {
        match key {
            Key::Enter => {
                if self.state.screen == Screen::Entry && !self.state.name.is_empty() {
                    self.confirm(now)?;
                }
            }
            Key::Escape => self.reset()?,
        }
        Ok(())
    }

    /// Run every timer due at `now`. Returns whether anything changed.
    pub fn tick(&mut self, now: Millis) -> bool {
        let fired = self.scheduler.take_due(now);
        let changed = !fired.is_empty();

        for (tok, task) in fired {
            match task {
                Deferred::ShowInvitation => {
                    if self.pending_advance == Some(tok) {
                        self.pending_advance = None;
                    }
                    self.show(Screen::Invitation);
                    self.state.displayed_name = Some(self.state.name.display().to_string());
                }
                Deferred::DismissNotice(id) => {
                    self.state.notices.dismiss(id);
                }
            }
        }
        changed
    }

    /// Raise a notice with the configured default lifetime.
    pub fn notify(&mut self, now: Millis, message: &str) -> NoticeId {
        self.notify_for(now, message, self.config.notice_duration_ms)
    }

    pub fn notify_for(&mut self, now: Millis, message: &str, duration_ms: u64) -> NoticeId {
        tracing::debug!(text = message, duration_ms, "notice raised");
        let id = self.state.notices.push(now, message, duration_ms);
        self.scheduler
            .schedule(now, duration_ms, Deferred::DismissNotice(id));
        id
    }

    pub fn share_payload(&self) -> SharePayload {
        SharePayload::for_guest(&self.state.name, &self.config.event, &self.config.page_url)
    }

    /// Run the share fallback chain and reflect its outcome in the state.
    pub fn share(
        &mut self,
        now: Millis,
        sheet: &mut dyn ShareSheet,
        clipboard: &mut dyn ClipboardWriter,
    ) -> ShareOutcome {
        let outcome = run_share_chain(&self.share_payload(), sheet, clipboard);
        match &outcome {
            ShareOutcome::Shared => {
                self.notify(now, MSG_SHARED);
            }
            ShareOutcome::LinkCopied => {
                self.notify(now, MSG_LINK_COPIED);
            }
            ShareOutcome::Manual(payload) => {
                self.state.modal = Some(ShareModal {
                    payload: payload.clone(),
                });
            }
        }
        outcome
    }

    /// Apply a click on the share dialog. Returns whether the dialog closed.
    pub fn click_modal(&mut self, click: ModalClick) -> bool {
        if self.state.modal.is_none() {
            return false;
        }
        match click {
            ModalClick::CloseButton | ModalClick::Backdrop => {
                self.state.modal = None;
                true
            }
            ModalClick::Dialog => false,
        }
    }

    /// Render the card for the current name and save it under `dir`.
    ///
    /// Failures are reported as a notice and abandoned; the state stays as it was.
    pub fn download(
        &mut self,
        now: Millis,
        renderer: &InvitationRenderer,
        dir: &Path,
    ) -> Option<PathBuf> {
        self.notify(now, MSG_GENERATING);

        let result = renderer
            .render(&self.state.name, &self.config.event)
            .and_then(|bitmap| download(&bitmap, &self.state.name, dir));

        match result {
            Ok(path) => {
                self.notify(now, MSG_DOWNLOADED);
                Some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "invitation export failed");
                self.notify(now, MSG_EXPORT_FAILED);
                None
            }
        }
    }

    fn show(&mut self, screen: Screen) {
        if self.state.screen != screen {
            tracing::debug!(from = self.state.screen.as_str(), to = screen.as_str(), "screen");
        }
        self.state.screen = screen;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/controller.rs"]
mod tests;
