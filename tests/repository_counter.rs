use seqlink::application::services::LinkService;
use seqlink::domain::repositories::CounterStore;
use seqlink::domain::sequence::SequenceAllocator;
use seqlink::infrastructure::persistence::{PgCounterStore, PgLinkStore};
use seqlink::utils::code_encoder::CodeEncoder;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_first_increment_creates_counter(pool: PgPool) {
    let store = PgCounterStore::new(Arc::new(pool));

    assert_eq!(store.current("urls").await, Ok(None));
    assert_eq!(store.increment_and_get("urls").await, Ok(1));
    assert_eq!(store.increment_and_get("urls").await, Ok(2));
    assert_eq!(store.current("urls").await, Ok(Some(2)));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_namespaces_are_independent(pool: PgPool) {
    let store = PgCounterStore::new(Arc::new(pool));

    store.increment_and_get("urls").await.unwrap();
    store.increment_and_get("urls").await.unwrap();

    assert_eq!(store.increment_and_get("other").await, Ok(1));
    assert_eq!(store.current("urls").await, Ok(Some(2)));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_concurrent_increments_are_distinct(pool: PgPool) {
    let store: Arc<dyn CounterStore> = Arc::new(PgCounterStore::new(Arc::new(pool)));
    let allocator = SequenceAllocator::new(store, "urls");

    let mut handles = Vec::new();
    for _ in 0..50 {
        let allocator = allocator.clone();
        handles.push(tokio::spawn(async move { allocator.next_sequence().await }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        assert!(seen.insert(handle.await.unwrap().unwrap()));
    }

    assert_eq!(seen.len(), 50);
    assert_eq!(seen.iter().max(), Some(&50));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_service_round_trip(pool: PgPool) {
    let pool = Arc::new(pool);
    let service = LinkService::new(
        SequenceAllocator::new(Arc::new(PgCounterStore::new(pool.clone())), "urls"),
        Arc::new(PgLinkStore::new(pool)),
        CodeEncoder::base62(),
    );

    let link = service
        .create_short_link("http://example.com".to_string())
        .await
        .unwrap();

    assert_eq!(link.code, "1");
    for _ in 0..3 {
        assert_eq!(service.resolve(&link.code).await.unwrap(), "http://example.com");
    }
    assert_eq!(service.get_clicks(&link.code).await.unwrap(), 3);
    assert!(service.health().await.is_healthy());
}
