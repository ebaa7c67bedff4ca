use crate::{app::state::GuestName, config::model::EventDetails};

/// Structured bundle handed to the share capabilities and shown in the manual dialog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_guest(name: &GuestName, event: &EventDetails, url: &str) -> Self {
        let who = name.display();
        Self {
            title: format!("{who}邀请您参加{}", event.event_name),
            text: format!(
                "{who}诚挚邀请您参加{}，时间：{}",
                event.event_name, event.share_time
            ),
            url: url.to_string(),
        }
    }
}
