//! End-to-end flows through the service and store layers

use chrono::Utc;

use groundwork_core::entities::Item;
use groundwork_core::traits::ItemRepository;
use groundwork_core::value_objects::{Email, ItemId};
use groundwork_service::{CreateItemRequest, ItemService, RenameItemRequest};
use integration_tests::helpers::{init_test_tracing, test_app};

fn create_request(name: &str) -> CreateItemRequest {
    CreateItemRequest {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn create_then_find_round_trips() {
    init_test_tracing();
    let app = test_app();
    let service = ItemService::new(&app.ctx);

    let before = Utc::now();
    let item = service.create_item(create_request("Alice")).await.unwrap();
    let after = Utc::now();

    assert_eq!(item.name(), "Alice");
    assert!(!item.id().is_nil());
    assert!(item.created_at() >= before && item.created_at() <= after);

    // The same repository instance serves the lookup.
    let found = app.repo.find_by_id(item.id()).await.unwrap().unwrap();
    assert_eq!(found, item);
}

#[tokio::test]
async fn listing_reflects_every_create() {
    let app = test_app();
    let service = ItemService::new(&app.ctx);

    for i in 1..=4 {
        service
            .create_item(create_request(&format!("Item {i}")))
            .await
            .unwrap();
    }

    let items = service.list_items().await.unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(app.repo.len(), 4);
}

#[tokio::test]
async fn save_with_same_id_overwrites() {
    let app = test_app();

    let id = ItemId::new(99);
    let first = Item::new(id, "First", Utc::now()).unwrap();
    let second = Item::new(id, "Second", Utc::now()).unwrap();

    app.repo.save(&first).await.unwrap();
    app.repo.save(&second).await.unwrap();

    let found = app.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.name(), "Second");
    assert_eq!(app.repo.len(), 1);
}

#[tokio::test]
async fn rename_flow_persists_through_layers() {
    let app = test_app();
    let service = ItemService::new(&app.ctx);

    let item = service.create_item(create_request("Draft")).await.unwrap();
    service
        .rename_item(
            item.id(),
            RenameItemRequest {
                name: "Final".to_string(),
            },
        )
        .await
        .unwrap();

    let stored = app.repo.find_by_id(item.id()).await.unwrap().unwrap();
    assert_eq!(stored.name(), "Final");
    assert_eq!(stored.id(), item.id());
}

#[tokio::test]
async fn delete_flow_tolerates_absent_ids() {
    let app = test_app();
    let service = ItemService::new(&app.ctx);

    let item = service.create_item(create_request("Gone")).await.unwrap();
    service.delete_item(item.id()).await.unwrap();
    assert!(app.repo.is_empty());

    // Deleting again must still succeed.
    service.delete_item(item.id()).await.unwrap();
}

#[tokio::test]
async fn failed_creation_leaves_no_trace() {
    let app = test_app();
    let service = ItemService::new(&app.ctx);

    assert!(service.create_item(create_request("  ")).await.is_err());
    assert!(app.repo.is_empty());
}

#[tokio::test]
async fn value_objects_compose_with_the_flow() {
    // Emails are identity-less: any two spellings of one address agree.
    let primary = Email::new("Ops@Example.COM").unwrap();
    let variant = Email::new(" ops@example.com").unwrap();
    assert_eq!(primary, variant);

    let app = test_app();
    let service = ItemService::new(&app.ctx);
    let item = service
        .create_item(create_request(primary.as_str()))
        .await
        .unwrap();
    assert_eq!(item.name(), "ops@example.com");
}
