//! Personalized invitation cards.
//!
//! The crate models a three-screen guest flow and the artifacts it produces:
//!
//! 1. **Entry**: the guest types a name; confirmation is enabled once the trimmed name is
//!    non-empty. The name is persisted under a single key of a [`KeyValueStore`].
//! 2. **Transition**: shown for a fixed delay after confirming, driven by a cancellable
//!    [`Scheduler`] task.
//! 3. **Invitation**: the personalized card.
//!
//! From any screen the card can be exported as a PNG ([`InvitationRenderer`] +
//! [`export_file_name`]) or shared through an ordered fallback chain
//! ([`run_share_chain`]): native share sheet, then clipboard, then a manual dialog.
//!
//! State lives in an explicit [`AppState`] owned by a [`Controller`]. The controller never reads
//! a clock; callers pass `now` in, which keeps the flow deterministic. Views
//! ([`render_text`]) and the layout ([`invitation_layout`]) are pure functions of that state.
#![forbid(unsafe_code)]

mod app;
mod config;
mod export;
mod foundation;
mod render;
mod share;
mod store;
mod view;

pub use app::controller::{
    Controller, Key, MSG_DOWNLOADED, MSG_EXPORT_FAILED, MSG_GENERATING, MSG_LINK_COPIED,
    MSG_NAME_REQUIRED, MSG_SHARED,
};
pub use app::notice::{DEFAULT_NOTICE_MS, Notice, NoticeBoard, NoticeId};
pub use app::scheduler::{Scheduler, TaskToken};
pub use app::state::{AppState, GUEST_PLACEHOLDER, GuestName, ModalClick, Screen, ShareModal};
pub use config::model::{EventDetails, InvitationConfig, MAX_SCALE};
pub use export::png::{FILE_NAME_FALLBACK, download, encode_png, export_file_name};
pub use foundation::core::{Canvas, Millis, Point, Rect, Rgba8};
pub use foundation::error::{InviteError, InviteResult};
pub use render::layout::{CARD, DrawOp, Font, invitation_layout};
pub use render::raster::{InvitationBitmap, InvitationRenderer, RenderOpts};
pub use render::svg::display_list_to_svg;
#[cfg(feature = "system-clipboard")]
pub use share::adapters::SystemClipboard;
pub use share::adapters::{CommandShareSheet, Unavailable};
pub use share::chain::{ClipboardWriter, ShareOutcome, ShareSheet, run_share_chain};
pub use share::payload::SharePayload;
pub use store::kv::{JsonFileStore, KeyValueStore, MemoryStore, PLAYER_NAME_KEY};
pub use view::text::render_text;
