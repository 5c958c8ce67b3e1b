mod common;

use axum::http::StatusCode;
use common::{form_post, get, raw_json_request, setup_test_app};
use items_server::db::bootstrap;
use items_server::ItemDraft;

#[tokio::test]
async fn test_list_page_renders_items() {
    let test_app = setup_test_app().await;
    bootstrap::seed_if_empty(&test_app.repo).await.unwrap();

    let resp = get(&test_app.app, "/items").await;
    assert_eq!(resp.status, StatusCode::OK);

    let content_type = resp.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = resp.text();
    assert!(html.contains("Widget"));
    assert!(html.contains("Gadget"));
    assert!(html.contains("Thingamajig"));
}

#[tokio::test]
async fn test_list_page_escapes_item_text() {
    let test_app = setup_test_app().await;
    test_app
        .repo
        .create_item(&ItemDraft {
            name: "<script>alert(1)</script>".to_string(),
            notes: String::new(),
        })
        .await
        .unwrap();

    let html = get(&test_app.app, "/items").await.text();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_create_page_shows_form() {
    let test_app = setup_test_app().await;

    let resp = get(&test_app.app, "/items/create").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.text().contains("action=\"/items/create\""));
}

#[tokio::test]
async fn test_create_submit_redirects_to_list() {
    let test_app = setup_test_app().await;

    let resp = form_post(&test_app.app, "/items/create", "name=Lamp&notes=desk+lamp").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/items"));

    let items = test_app.repo.list_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Lamp");
    assert_eq!(items[0].notes, "desk lamp");
}

#[tokio::test]
async fn test_create_submit_without_notes_stores_empty_string() {
    let test_app = setup_test_app().await;

    let resp = form_post(&test_app.app, "/items/create", "name=Lamp").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(test_app.repo.list_items().await.unwrap()[0].notes, "");
}

#[tokio::test]
async fn test_create_submit_requires_name() {
    let test_app = setup_test_app().await;

    for body in ["name=&notes=x", "notes=x", ""] {
        let resp = form_post(&test_app.app, "/items/create", body).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "body: {:?}", body);
    }

    let resp = form_post(&test_app.app, "/items/create", "name=").await;
    assert_eq!(resp.text(), "Name is required");
    assert_eq!(test_app.repo.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_submit_rejects_json_body() {
    let test_app = setup_test_app().await;

    let resp = raw_json_request(
        &test_app.app,
        "POST",
        "/items/create",
        r#"{"name":"Lamp"}"#.to_string(),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(test_app.repo.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_page_prefills_form() {
    let test_app = setup_test_app().await;
    bootstrap::seed_if_empty(&test_app.repo).await.unwrap();
    let item = test_app.repo.list_items().await.unwrap().remove(1);

    let resp = get(&test_app.app, &format!("/items/update/{}", item.id)).await;
    assert_eq!(resp.status, StatusCode::OK);

    let html = resp.text();
    assert!(html.contains("value=\"Gadget\""));
    assert!(html.contains("Another example item"));
}

#[tokio::test]
async fn test_update_page_missing_item_is_not_found() {
    let test_app = setup_test_app().await;

    let resp = get(&test_app.app, "/items/update/99").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.text(), "Item not found");
}

#[tokio::test]
async fn test_update_submit_redirects_and_persists() {
    let test_app = setup_test_app().await;
    bootstrap::seed_if_empty(&test_app.repo).await.unwrap();
    let id = test_app.repo.list_items().await.unwrap()[0].id;

    let resp = form_post(
        &test_app.app,
        &format!("/items/update/{}", id),
        "name=Sprocket&notes=changed",
    )
    .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/items"));

    let item = test_app.repo.get_item(id).await.unwrap().unwrap();
    assert_eq!(item.name, "Sprocket");
    assert_eq!(item.notes, "changed");
}

#[tokio::test]
async fn test_update_submit_requires_name() {
    let test_app = setup_test_app().await;
    let id = test_app
        .repo
        .create_item(&ItemDraft {
            name: "Keep".to_string(),
            notes: "me".to_string(),
        })
        .await
        .unwrap();

    let resp = form_post(&test_app.app, &format!("/items/update/{}", id), "name=&notes=x").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.text(), "Name is required");

    let item = test_app.repo.get_item(id).await.unwrap().unwrap();
    assert_eq!(item.name, "Keep");
    assert_eq!(item.notes, "me");
}

#[tokio::test]
async fn test_update_submit_validates_body_before_lookup() {
    let test_app = setup_test_app().await;

    let resp = form_post(&test_app.app, "/items/update/404", "notes=x").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.text(), "Name is required");
    assert_eq!(test_app.repo.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_submit_missing_item_is_not_found() {
    let test_app = setup_test_app().await;

    let resp = form_post(&test_app.app, "/items/update/5", "name=Ghost").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(test_app.repo.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_link_removes_item_and_redirects() {
    let test_app = setup_test_app().await;
    bootstrap::seed_if_empty(&test_app.repo).await.unwrap();
    let id = test_app.repo.list_items().await.unwrap()[2].id;

    let resp = get(&test_app.app, &format!("/items/delete/{}", id)).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/items"));
    assert!(test_app.repo.get_item(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_link_missing_item_is_not_found() {
    let test_app = setup_test_app().await;

    let resp = get(&test_app.app, "/items/delete/123").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.text(), "Item not found");
}

#[tokio::test]
async fn test_page_storage_failure_is_generic_plain_text() {
    let test_app = setup_test_app().await;
    test_app.repo.close().await;

    let resp = get(&test_app.app, "/items").await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text(), "Internal server error");
}
