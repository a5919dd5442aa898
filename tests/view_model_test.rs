//! List view model behaviour over a scripted posts collection.
//!
//! Gates on `MockPostsApi` hold individual fetches open so the tests decide
//! in which order overlapping responses arrive.

mod common;

use std::time::Duration;

use bytes::Bytes;
use chitchat::error::{ChitChatError, ErrorKind, FormField};
use chitchat::models::{ImageUpload, NewPostForm, Page};
use chitchat::render::{render_list, EMPTY_STATE};
use chitchat::traits::Severity;
use chitchat::view_model::{
    LoadStatus, MessageOutcome, CREATE_SUCCEEDED, DELETE_FAILED, DELETE_SUCCEEDED, FETCH_FAILED,
};
use common::*;

#[tokio::test]
async fn test_mount_loads_first_page() {
    let mut h = ViewModelHarness::new("");
    h.api.set_page(1, fixture_page(1, 9, 20));

    assert_eq!(h.vm.status(), LoadStatus::Idle);
    h.vm.mount();
    assert!(h.vm.is_loading());
    h.vm.settle().await;

    assert_eq!(h.vm.status(), LoadStatus::Ready);
    assert_eq!(h.vm.items().len(), 9);
    assert_eq!(h.vm.total_count(), 20);
    assert_eq!(h.api.calls(), vec![MockCall::FetchPage { page: 1, limit: 9 }]);
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_last_trigger_wins_when_older_response_arrives_late() {
    let mut h = ViewModelHarness::new("");
    h.api.set_page(1, fixture_page(1, 9, 18));
    h.api.set_page(2, fixture_page(10, 9, 18));
    let page_one = h.api.hold_page(1);

    h.vm.mount();
    h.vm.set_page(2);
    h.vm.settle().await;

    assert_eq!(h.vm.status(), LoadStatus::Ready);
    assert_eq!(h.vm.items()[0].id, "10");

    page_one.send(()).unwrap();
    assert_eq!(h.vm.process_next().await, Some(MessageOutcome::Discarded));

    assert_eq!(h.vm.items()[0].id, "10");
    assert_eq!(h.vm.query().page, 2);
    assert_eq!(h.vm.outstanding(), 0);
}

#[tokio::test]
async fn test_stale_failure_is_not_surfaced() {
    let mut h = ViewModelHarness::new("");
    h.api.set_page(2, fixture_page(10, 9, 18));
    let page_one = h.api.hold_page(1);

    h.vm.mount();
    h.vm.set_page(2);
    h.vm.settle().await;

    h.api.fail(Operation::FetchPage, MockFailure::Status(500));
    page_one.send(()).unwrap();
    h.vm.drain().await;

    assert_eq!(h.vm.status(), LoadStatus::Ready);
    assert!(h.vm.last_error().is_none());
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_rapid_search_keystrokes_keep_only_the_last() {
    let mut h = ViewModelHarness::new("");
    h.api.set_search("f", vec![fixture_post("f1", "owner")]);
    h.api.set_search("foo", vec![fixture_post("foo1", "owner")]);
    let first = h.api.hold_search("f");
    let second = h.api.hold_search("fo");

    h.vm.set_search_query("f");
    h.vm.set_search_query("fo");
    h.vm.set_search_query("foo");
    h.vm.settle().await;

    assert_eq!(h.vm.items()[0].id, "foo1");

    drop(first);
    drop(second);
    h.vm.drain().await;

    assert_eq!(h.vm.items().len(), 1);
    assert_eq!(h.vm.items()[0].id, "foo1");
    assert_eq!(h.vm.trigger(), 3);
}

#[tokio::test]
async fn test_search_mode_resets_page_and_never_pages() {
    let mut h = ViewModelHarness::new("page=3&limit=6");
    h.api.set_search("foo", vec![fixture_post("a", "owner"), fixture_post("b", "owner")]);

    h.vm.set_search_query("foo");
    h.vm.settle().await;

    assert_eq!(h.vm.query().page, 1);
    assert_eq!(h.vm.query().limit, 6);
    assert!(h.api.fetch_page_calls().is_empty());
    assert_eq!(h.api.search_calls(), vec!["foo"]);
    assert_eq!(h.vm.total_count(), 2);

    h.vm.set_search_query("");
    h.vm.settle().await;

    assert_eq!(h.api.fetch_page_calls(), vec![1]);
    assert_eq!(h.api.search_calls().len(), 1);
    assert_eq!(h.vm.params().to_query_string(), "page=1&limit=6");
}

#[tokio::test]
async fn test_whitespace_query_falls_back_to_paging() {
    let mut h = ViewModelHarness::new("");
    h.vm.set_search_query("   ");
    h.vm.settle().await;
    assert!(h.api.search_calls().is_empty());
    assert_eq!(h.api.fetch_page_calls(), vec![1]);
}

#[tokio::test]
async fn test_failure_keeps_last_good_page_and_refresh_recovers() {
    let mut h = ViewModelHarness::new("");
    h.api.set_page(1, fixture_page(1, 9, 12));
    h.vm.mount();
    h.vm.settle().await;

    h.api.fail(Operation::FetchPage, MockFailure::Status(500));
    h.vm.refresh();
    h.vm.settle().await;

    assert_eq!(h.vm.status(), LoadStatus::Error(ErrorKind::Server(500)));
    assert_eq!(h.vm.items().len(), 9);
    assert_eq!(h.notifier.messages(Severity::Error), vec![FETCH_FAILED]);
    let err = h.vm.last_error().unwrap();
    assert_eq!(err.context().unwrap().operation, "fetch_page");
    assert!(render_list(&h.vm).contains("server is experiencing issues"));

    h.api.clear_failure(Operation::FetchPage);
    h.vm.refresh();
    h.vm.settle().await;

    assert_eq!(h.vm.status(), LoadStatus::Ready);
    assert!(h.vm.last_error().is_none());
}

#[tokio::test]
async fn test_network_failure_maps_to_network_kind() {
    let mut h = ViewModelHarness::new("");
    h.api.fail(Operation::FetchPage, MockFailure::ConnectionRefused);
    h.vm.mount();
    h.vm.settle().await;
    assert_eq!(h.vm.status(), LoadStatus::Error(ErrorKind::Network));
    assert!(h.vm.page().is_none());
    assert!(render_list(&h.vm).contains(EMPTY_STATE));
}

#[tokio::test]
async fn test_pending_fetch_times_out() {
    let mut h = ViewModelHarness::with_timeout("", Duration::from_millis(50));
    let _held = h.api.hold_page(1);

    h.vm.mount();
    h.vm.settle().await;

    assert_eq!(h.vm.status(), LoadStatus::Error(ErrorKind::Timeout));
    assert_eq!(h.notifier.messages(Severity::Error), vec![FETCH_FAILED]);
}

#[tokio::test]
async fn test_superseded_timeout_is_discarded() {
    let mut h = ViewModelHarness::with_timeout("", Duration::from_millis(50));
    h.api.set_page(2, fixture_page(10, 1, 10));
    let _held = h.api.hold_page(1);

    h.vm.mount();
    h.vm.set_page(2);
    h.vm.settle().await;
    h.vm.drain().await;

    assert_eq!(h.vm.status(), LoadStatus::Ready);
    assert!(h.notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_panicking_fetch_still_settles_as_failure() {
    let mut h = ViewModelHarness::with_timeout("", Duration::from_millis(100));
    h.api.fail(Operation::FetchPage, MockFailure::Panic);

    h.vm.mount();
    let settled = tokio::time::timeout(Duration::from_secs(2), h.vm.settle()).await;

    assert!(settled.is_ok());
    assert_eq!(h.vm.status(), LoadStatus::Error(ErrorKind::Network));
    assert_eq!(h.vm.outstanding(), 0);
    assert_eq!(h.notifier.messages(Severity::Error), vec![FETCH_FAILED]);

    h.api.clear_failure(Operation::FetchPage);
    h.api.set_page(1, fixture_page(1, 3, 3));
    h.vm.refresh();
    h.vm.settle().await;
    assert_eq!(h.vm.status(), LoadStatus::Ready);
    assert_eq!(h.vm.items().len(), 3);
}

#[tokio::test]
async fn test_paging_is_disabled_while_searching() {
    let mut h = ViewModelHarness::new("limit=9");
    let hits = (0..20).map(|i| fixture_post(&format!("s{i}"), "owner")).collect();
    h.api.set_search("foo", hits);

    h.vm.set_search_query("foo");
    h.vm.settle().await;
    assert_eq!(h.vm.items().len(), 20);

    assert!(!h.vm.next_page());
    assert!(!h.vm.prev_page());
    let pagination = h.vm.pagination();
    assert_eq!(pagination.total_pages, 1);
    assert!(!pagination.next_enabled);
    assert_eq!(h.vm.query().page, 1);
    assert_eq!(h.api.search_calls(), vec!["foo"]);
    assert!(!h.vm.is_loading());
}

#[tokio::test]
async fn test_full_page_shows_single_button() {
    let mut h = ViewModelHarness::new("");
    h.api.set_page(1, fixture_page(1, 9, 9));
    h.vm.mount();
    h.vm.settle().await;

    let pagination = h.vm.pagination();
    assert_eq!(pagination.buttons.len(), 1);
    assert_eq!(pagination.buttons[0].label(), "1");
    assert!(!pagination.prev_enabled);
    assert!(!pagination.next_enabled);
    assert!(!h.vm.next_page());
}

#[tokio::test]
async fn test_deleting_last_item_on_later_page_leaves_empty_page() {
    let mut h = ViewModelHarness::new("page=2");
    h.api.set_page(2, fixture_page(10, 1, 10));
    h.vm.mount();
    h.vm.settle().await;
    assert_eq!(h.vm.items().len(), 1);

    h.api.set_page(2, Page::new(vec![], 9));
    h.vm.delete("10").await.unwrap();
    h.vm.settle().await;

    assert_eq!(h.vm.status(), LoadStatus::Ready);
    assert!(h.vm.items().is_empty());
    assert_eq!(h.notifier.messages(Severity::Success), vec![DELETE_SUCCEEDED]);

    let pagination = h.vm.pagination();
    assert_eq!(pagination.total_pages, 1);
    assert!(pagination.prev_enabled);
    assert!(render_list(&h.vm).contains(EMPTY_STATE));
}

#[tokio::test]
async fn test_forbidden_delete_redirects_to_login() {
    let mut h = ViewModelHarness::new("");
    h.vm.mount();
    h.vm.settle().await;
    h.api.fail(Operation::Delete, MockFailure::Forbidden);

    let err = h.vm.delete("p1").await.unwrap_err();

    assert!(err.requires_login());
    assert_eq!(h.navigator.login_redirects(), 1);
    assert_eq!(h.notifier.messages(Severity::Error), vec![DELETE_FAILED]);
    assert_eq!(h.vm.trigger(), 1);
    assert_eq!(h.vm.status(), LoadStatus::Ready);
}

#[tokio::test]
async fn test_create_validation_never_reaches_network() {
    let mut h = ViewModelHarness::new("");
    let form = NewPostForm {
        title: "Trip".to_string(),
        body: "Lovely".to_string(),
        tags: vec!["travel".to_string()],
        image: Some(ImageUpload::new(
            "clip.gif",
            "image/gif",
            Bytes::from_static(b"GIF89a"),
        )),
    };

    let err = h.vm.create(form).await.unwrap_err();

    match err {
        ChitChatError::Validation(fields) => {
            assert_eq!(fields.errors().len(), 1);
            assert!(fields.for_field(FormField::Image).is_some());
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(h.api.calls().is_empty());
    assert_eq!(h.vm.trigger(), 0);
}

#[tokio::test]
async fn test_create_refetches_without_resetting_page() {
    let mut h = ViewModelHarness::new("page=2");
    let form = NewPostForm {
        title: "Trip".to_string(),
        body: "Lovely".to_string(),
        tags: vec!["travel".to_string(), "lake".to_string()],
        image: Some(ImageUpload::new(
            "lake.jpg",
            "image/jpeg",
            Bytes::from_static(&[0xff, 0xd8, 0xff]),
        )),
    };

    h.vm.create(form).await.unwrap();
    h.vm.settle().await;

    let created = h
        .api
        .calls()
        .into_iter()
        .find_map(|call| match call {
            MockCall::Create(payload) => Some(payload),
            _ => None,
        })
        .unwrap();
    assert_eq!(created.user_id, "test-user-id");
    assert_eq!(created.tags.len(), 2);
    assert!(created.image.starts_with("data:image/jpeg;base64,"));
    assert_eq!(h.vm.query().page, 2);
    assert_eq!(h.api.fetch_page_calls(), vec![2]);
    assert_eq!(h.notifier.messages(Severity::Success), vec![CREATE_SUCCEEDED]);
}

#[tokio::test]
async fn test_anonymous_like_redirects_when_server_rejects() {
    let mut h = ViewModelHarness::anonymous("");
    h.api.fail(Operation::ToggleLike, MockFailure::Unauthorized);

    assert!(h.vm.like("p1").await.is_err());
    assert_eq!(h.navigator.login_redirects(), 1);
    assert!(h.vm.cards().iter().all(|c| !c.can_delete));
}
