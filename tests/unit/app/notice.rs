use super::*;

#[test]
fn notices_stack_without_dedup() {
    let mut board = NoticeBoard::default();
    let a = board.push(Millis(0), "请输入亲朋好友名称", DEFAULT_NOTICE_MS);
    let b = board.push(Millis(5), "请输入亲朋好友名称", DEFAULT_NOTICE_MS);

    assert_ne!(a, b);
    assert_eq!(board.len(), 2);
    assert_eq!(board.latest().map(|n| n.id), Some(b));
    assert_eq!(board.active()[1].expires_at(), Millis(2_005));
}

#[test]
fn dismiss_is_per_notice_and_tolerates_repeats() {
    let mut board = NoticeBoard::default();
    let a = board.push(Millis(0), "a", 10);
    let b = board.push(Millis(0), "b", 10);

    assert!(board.dismiss(a));
    assert!(!board.dismiss(a));
    assert_eq!(board.messages().collect::<Vec<_>>(), vec!["b"]);

    assert!(board.dismiss(b));
    assert!(board.is_empty());
}
