use crate::{
    app::state::{AppState, Screen},
    config::model::EventDetails,
};

const RULE: &str = "----------------------------------------";

/// Plain-text rendition of everything currently visible: the active screen, then the share
/// dialog if open, then the notice stack.
pub fn render_text(state: &AppState, event: &EventDetails) -> String {
    let mut lines = Vec::<String>::new();

    match state.screen() {
        Screen::Entry => {
            lines.push(event.title.clone());
            lines.push(format!("亲朋好友名称: [{}]", state.input()));
            lines.push(if state.confirm_enabled() {
                "[确认]".to_string()
            } else {
                "[确认] (不可用)".to_string()
            });
        }
        Screen::Transition => {
            lines.push("...".to_string());
            lines.push(format!("{} 即将开启", event.title));
        }
        Screen::Invitation => {
            lines.push(event.title.clone());
            lines.push(event.subtitle.clone());
            lines.push(state.displayed_name().unwrap_or_default().to_string());
            lines.push(event.invite_line.clone());
            lines.push(event.event_name.clone());
            lines.push(event.date.clone());
            lines.push(event.lunar_date.clone());
            lines.push(event.time.clone());
            lines.push(event.venue.clone());
            lines.push(event.closing.clone());
        }
    }

    if let Some(modal) = state.modal() {
        lines.push(RULE.to_string());
        lines.push(modal.payload.title.clone());
        lines.push(modal.payload.text.clone());
        lines.push(format!("链接: {}", modal.payload.url));
        lines.push("[关闭]".to_string());
        lines.push(RULE.to_string());
    }

    for message in state.notices().messages() {
        lines.push(format!("» {message}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/view/text.rs"]
mod tests;
