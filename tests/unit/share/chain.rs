use super::*;
use crate::{
    app::state::GuestName, config::model::EventDetails, foundation::error::InviteError,
    share::adapters::Unavailable,
};

#[derive(Default)]
struct Recorder {
    available: bool,
    fail: bool,
    calls: Vec<String>,
}

impl ShareSheet for Recorder {
    fn is_available(&self) -> bool {
        self.available
    }

    fn share(&mut self, payload: &SharePayload) -> InviteResult<()> {
        self.calls.push(payload.title.clone());
        if self.fail {
            return Err(InviteError::share("AbortError"));
        }
        Ok(())
    }
}

impl ClipboardWriter for Recorder {
    fn is_available(&self) -> bool {
        self.available
    }

    fn write_text(&mut self, text: &str) -> InviteResult<()> {
        self.calls.push(text.to_string());
        if self.fail {
            return Err(InviteError::share("NotAllowedError"));
        }
        Ok(())
    }
}

fn payload() -> SharePayload {
    SharePayload::for_guest(
        &GuestName::parse("张三"),
        &EventDetails::default(),
        "http://localhost/index.html",
    )
}

#[test]
fn payload_wording_uses_name_or_placeholder() {
    let p = payload();
    assert_eq!(p.title, "张三邀请您参加升学宴");
    assert_eq!(p.text, "张三诚挚邀请您参加升学宴，时间：2025年8月16日 11:30");
    assert_eq!(p.url, "http://localhost/index.html");

    let anon = SharePayload::for_guest(&GuestName::parse(""), &EventDetails::default(), "u");
    assert_eq!(anon.title, "尊贵的亲朋好友邀请您参加升学宴");
}

#[test]
fn native_share_wins_and_clipboard_is_untouched() {
    let mut sheet = Recorder {
        available: true,
        ..Default::default()
    };
    let mut clip = Recorder {
        available: true,
        ..Default::default()
    };

    assert_eq!(
        run_share_chain(&payload(), &mut sheet, &mut clip),
        ShareOutcome::Shared
    );
    assert_eq!(sheet.calls, vec!["张三邀请您参加升学宴"]);
    assert!(clip.calls.is_empty());
}

#[test]
fn rejected_native_share_falls_back_to_clipboard() {
    let mut sheet = Recorder {
        available: true,
        fail: true,
        ..Default::default()
    };
    let mut clip = Recorder {
        available: true,
        ..Default::default()
    };

    assert_eq!(
        run_share_chain(&payload(), &mut sheet, &mut clip),
        ShareOutcome::LinkCopied
    );
    assert_eq!(clip.calls, vec!["http://localhost/index.html"]);
}

#[test]
fn unavailable_steps_are_skipped_without_calls() {
    let mut sheet = Recorder::default();
    let mut clip = Recorder {
        available: true,
        ..Default::default()
    };

    assert_eq!(
        run_share_chain(&payload(), &mut sheet, &mut clip),
        ShareOutcome::LinkCopied
    );
    assert!(sheet.calls.is_empty());
}

#[test]
fn failed_clipboard_ends_at_manual_dialog() {
    let mut sheet = Unavailable;
    let mut clip = Recorder {
        available: true,
        fail: true,
        ..Default::default()
    };

    assert_eq!(
        run_share_chain(&payload(), &mut sheet, &mut clip),
        ShareOutcome::Manual(payload())
    );
    assert_eq!(clip.calls.len(), 1);
}

#[test]
fn nothing_available_always_yields_manual_dialog() {
    for name in ["张三", "", "  "] {
        let p = SharePayload::for_guest(&GuestName::parse(name), &EventDetails::default(), "u");
        let outcome = run_share_chain(&p, &mut Unavailable, &mut Unavailable);
        assert_eq!(outcome, ShareOutcome::Manual(p));
    }
}
