use crate::tests::{context, sign_up};
use crate::{ClientContext, DashboardController, Mount, Notice, Panel, Route, Transition};

use serde_json::json;
use sn_core::Post;
use sn_store::{JsonStore, KeyValueStore, keys};

async fn mounted(ctx: &ClientContext) -> DashboardController {
    match DashboardController::mount(ctx.clone()).await {
        Mount::Ready(dashboard) => *dashboard,
        Mount::Redirect(route) => panic!("expected dashboard, redirected to {route:?}"),
    }
}

#[tokio::test]
async fn test_mount_without_session_redirects_to_entry() {
    let (ctx, _store) = context();

    let mount = DashboardController::mount(ctx).await;

    assert!(matches!(mount, Mount::Redirect(Route::Register)));
}

#[tokio::test]
async fn test_create_post_lands_at_head_of_feed() {
    let (ctx, store) = context();
    let user = sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    dashboard.drafts.post = "first".to_string();
    dashboard.create_post().await;
    dashboard.drafts.post = "second".to_string();
    dashboard.create_post().await;

    assert_eq!(dashboard.posts().len(), 2);
    assert_eq!(dashboard.posts()[0].content, "second");
    assert_eq!(dashboard.posts()[0].user_id, user.id);
    assert_eq!(dashboard.drafts.post, "");
    assert_eq!(dashboard.notice(), Some(&Notice::success("Post published!")));

    let stored: Vec<Post> = store.get_list(keys::POSTS).unwrap();
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_blank_message_is_noop() {
    let (ctx, store) = context();
    sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    dashboard.drafts.message = "   ".to_string();
    dashboard.send_message().await;

    assert!(dashboard.messages().is_empty());
    assert_eq!(dashboard.notice(), None);
    assert_eq!(store.get(keys::MESSAGES).unwrap(), None);
}

#[tokio::test]
async fn test_send_message_appends() {
    let (ctx, _store) = context();
    let user = sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    dashboard.drafts.message = "hello".to_string();
    dashboard.send_message().await;
    dashboard.drafts.message = "again".to_string();
    dashboard.drafts.message_to = Some(42);
    dashboard.send_message().await;

    let messages = dashboard.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content, "again");
    assert_eq!(messages[1].to_user_id, Some(42));
    assert_eq!(messages[0].from_user_id, user.id);
    assert_eq!(dashboard.drafts.message, "");
    assert_eq!(dashboard.notice(), Some(&Notice::success("Message sent!")));
}

#[tokio::test]
async fn test_create_group_appends_with_creator_as_member() {
    let (ctx, _store) = context();
    let user = sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    dashboard.drafts.group_name = "Chess".to_string();
    dashboard.drafts.group_description = "  ".to_string();
    dashboard.create_group().await;

    let group = &dashboard.groups()[0];
    assert_eq!(group.name, "Chess");
    assert_eq!(group.description, "");
    assert!(group.is_member(user.id));
    assert_eq!(dashboard.drafts.group_name, "");
}

#[tokio::test]
async fn test_update_profile_persists_across_mounts() {
    let (ctx, _store) = context();
    let user = sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    dashboard.open_panel(Panel::Profile);
    dashboard.profile_form.full_name = "Ada King".to_string();
    dashboard.profile_form.bio = "Analyst".to_string();
    dashboard.update_profile().await;

    assert_eq!(dashboard.active_panel(), None);
    assert_eq!(dashboard.notice(), Some(&Notice::success("Profile updated!")));
    assert_eq!(dashboard.user().full_name, "Ada King");
    assert_eq!(dashboard.user().registered_at, user.registered_at);

    let again = mounted(&ctx).await;
    assert_eq!(again.user().full_name, "Ada King");
    assert_eq!(again.user().bio.as_deref(), Some("Analyst"));
}

#[tokio::test]
async fn test_invalid_profile_keeps_panel_open() {
    let (ctx, _store) = context();
    sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    dashboard.open_panel(Panel::Profile);
    dashboard.profile_form.birth_date = "tomorrow".to_string();
    dashboard.update_profile().await;

    assert_eq!(dashboard.active_panel(), Some(Panel::Profile));
    assert!(dashboard.notice().is_some_and(Notice::is_error));
    assert_eq!(dashboard.user().full_name, "Ada Lovelace");
}

#[tokio::test]
async fn test_logout_then_mount_redirects() {
    let (ctx, _store) = context();
    sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    assert_eq!(dashboard.logout(), Transition::Navigate(Route::Register));

    let mount = DashboardController::mount(ctx).await;
    assert!(matches!(mount, Mount::Redirect(Route::Register)));
}

#[tokio::test]
async fn test_failed_load_leaves_sequence_empty() {
    let (ctx, store) = context();
    sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    store.set(keys::POSTS, "{not json").unwrap();

    let dashboard = mounted(&ctx).await;

    assert!(dashboard.posts().is_empty());
    assert_eq!(
        dashboard.notice(),
        Some(&Notice::error(
            "Could not load the feed. Please try again later."
        ))
    );
}

#[tokio::test]
async fn test_mount_orders_feed_and_chat() {
    let (ctx, store) = context();
    let user = sign_up(&ctx, "+15550001", "Ada Lovelace").await;

    store
        .set_json(
            keys::MESSAGES,
            &json!([
                { "id": 20, "fromUserId": user.id, "fromUserName": "Ada", "content": "later", "timestamp": "2024-01-15T11:00:00Z" },
                { "id": 10, "fromUserId": user.id, "fromUserName": "Ada", "content": "earlier", "timestamp": "2024-01-15T10:00:00Z" }
            ]),
        )
        .unwrap();
    store
        .set_json(
            keys::POSTS,
            &json!([
                { "id": 1, "userId": user.id, "userName": "Ada", "content": "old", "isModerated": true, "timestamp": "2024-01-15T10:00:00Z" },
                { "id": 2, "userId": user.id, "userName": "Ada", "content": "new", "isModerated": true, "timestamp": "2024-01-15T11:00:00Z" },
                { "id": 3, "userId": user.id, "userName": "Ada", "content": "hidden", "isModerated": false, "timestamp": "2024-01-15T12:00:00Z" }
            ]),
        )
        .unwrap();

    let dashboard = mounted(&ctx).await;

    let feed: Vec<&str> = dashboard.posts().iter().map(|p| p.content.as_str()).collect();
    assert_eq!(feed, ["new", "old"]);

    let chat: Vec<&str> = dashboard.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(chat, ["earlier", "later"]);
}

#[tokio::test]
async fn test_unread_notifications_and_friends() {
    let (ctx, store) = context();
    let user = sign_up(&ctx, "+15550001", "Ada Lovelace").await;

    store
        .set_json(
            keys::NOTIFICATIONS,
            &json!([
                { "id": 1, "type": "friend_request", "fromUserId": 2, "fromUserName": "Bob", "content": "wants to connect", "timestamp": "2024-01-15T10:00:00Z", "isRead": false },
                { "id": 2, "type": "message", "fromUserId": 2, "fromUserName": "Bob", "content": "sent you a message", "timestamp": "2024-01-15T10:05:00Z", "isRead": true }
            ]),
        )
        .unwrap();
    store.set_json(&keys::friends(user.id), &[2, 3]).unwrap();

    let mut dashboard = mounted(&ctx).await;
    dashboard.open_panel(Panel::Notifications);

    assert_eq!(dashboard.notifications().len(), 2);
    assert_eq!(dashboard.unread_notifications(), 1);
    assert_eq!(dashboard.friends(), [2, 3]);
    assert_eq!(dashboard.active_panel(), Some(Panel::Notifications));
}

#[tokio::test]
async fn test_blank_profile_fields_match_remote_semantics() {
    let (ctx, _store) = context();
    sign_up(&ctx, "+15550001", "Ada Lovelace").await;
    let mut dashboard = mounted(&ctx).await;

    dashboard.profile_form.email = "ada@example.com".to_string();
    dashboard.update_profile().await;

    dashboard.profile_form.position = String::new();
    dashboard.profile_form.email = String::new();
    dashboard.update_profile().await;

    assert_eq!(dashboard.user().position, "Mentor");
    assert_eq!(dashboard.user().email, None);
}

#[test]
fn test_transition_destination() {
    assert_eq!(Transition::Stay.destination(), None);
    assert_eq!(
        Transition::Navigate(Route::Login).destination(),
        Some(Route::Login)
    );
}
