use super::*;
use crate::{
    app::controller::{Controller, MSG_NAME_REQUIRED},
    config::model::InvitationConfig,
    foundation::core::Millis,
    share::adapters::Unavailable,
    store::kv::MemoryStore,
};

fn controller() -> Controller<MemoryStore> {
    Controller::load(MemoryStore::new(), InvitationConfig::default()).unwrap()
}

#[test]
fn entry_screen_shows_input_and_confirm_state() {
    let mut c = controller();
    let text = render_text(c.state(), &c.config().event);
    assert!(text.contains("亲朋好友名称: []"));
    assert!(text.contains("(不可用)"));

    c.set_name(" 张三");
    let text = render_text(c.state(), &c.config().event);
    assert!(text.contains("亲朋好友名称: [ 张三]"));
    assert!(!text.contains("(不可用)"));
}

#[test]
fn invitation_screen_prints_displayed_name() {
    let mut c = controller();
    c.set_name("张三");
    c.confirm(Millis(0)).unwrap();
    assert!(render_text(c.state(), &c.config().event).contains("即将开启"));

    c.tick(Millis(2_000));
    let text = render_text(c.state(), &c.config().event);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[2], "张三");
    assert!(lines.contains(&"农历六月廿三"));
}

#[test]
fn modal_and_notices_are_appended() {
    let mut c = controller();
    c.confirm(Millis(0)).unwrap();
    c.share(Millis(0), &mut Unavailable, &mut Unavailable);

    let text = render_text(c.state(), &c.config().event);
    assert!(text.contains("尊贵的亲朋好友邀请您参加升学宴"));
    assert!(text.contains("链接: http://localhost/index.html"));
    assert!(text.ends_with(&format!("» {MSG_NAME_REQUIRED}\n")));
}
