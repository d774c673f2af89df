mod common;

use common::{JSON_PATH, SPLASH_PATH, TEXT_PATH, TestHarness, unreachable_url};
use motd::{
    BUTTON_NOT_RECOGNIZED, DECODE_FAILED, MotdSink, NO_MESSAGE_RECEIVED, Presenter, Source,
};
use tokio::sync::mpsc::error::TryRecvError;

fn presenter(h: &TestHarness) -> (Presenter, tokio::sync::mpsc::UnboundedReceiver<String>) {
    let (sink, rx) = MotdSink::channel();
    (Presenter::new(h.client.clone(), h.endpoints(), sink), rx)
}

#[tokio::test(flavor = "multi_thread")]
async fn each_button_posts_its_result() {
    let h = TestHarness::new().await;
    h.mount_json(serde_json::json!({ "motd": "from json" })).await;
    h.mount_raw(TEXT_PATH, "from text\n").await;
    h.mount_raw(SPLASH_PATH, "from splash").await;
    let (presenter, mut rx) = presenter(&h);

    for (title, expected) in [
        ("JSON", "from json"),
        ("Text", "from text\n"),
        ("Random", "from splash"),
    ] {
        presenter.press(title).unwrap().await.unwrap();
        assert_eq!(rx.recv().await.as_deref(), Some(expected), "{title}");
    }
}

#[tokio::test]
async fn unknown_title() {
    let h = TestHarness::new().await;
    let (presenter, mut rx) = presenter(&h);

    assert!(presenter.press("Settings").is_none());
    assert_eq!(rx.try_recv().unwrap(), BUTTON_NOT_RECOGNIZED);
    assert_eq!(h.received().await, 0);
}

#[tokio::test]
async fn json_decode_failure_is_displayed() {
    let h = TestHarness::new().await;
    h.mount_raw(JSON_PATH, "<html></html>").await;
    let (presenter, mut rx) = presenter(&h);

    presenter.request(Source::Json).unwrap().await.unwrap();
    assert_eq!(rx.try_recv().unwrap(), DECODE_FAILED);
}

#[tokio::test]
async fn json_transport_failure_leaves_display_untouched() {
    let h = TestHarness::new().await;
    h.mount_error(JSON_PATH, 500).await;
    let (presenter, mut rx) = presenter(&h);

    presenter.request(Source::Json).unwrap().await.unwrap();
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn text_transport_failure_is_displayed() {
    let h = TestHarness::new().await;
    let (sink, mut rx) = MotdSink::channel();
    let endpoints = h.endpoints().with_text(unreachable_url(TEXT_PATH));
    let presenter = Presenter::new(h.client.clone(), endpoints, sink);

    presenter.request(Source::Text).unwrap().await.unwrap();
    assert_eq!(rx.try_recv().unwrap(), NO_MESSAGE_RECEIVED);
}

#[tokio::test]
async fn completes_after_display_is_gone() {
    let h = TestHarness::new().await;
    h.mount_json(serde_json::json!({ "motd": "too late" })).await;
    let (presenter, rx) = presenter(&h);
    drop(rx);

    presenter.request(Source::Json).unwrap().await.unwrap();
}
