#![allow(dead_code)]

use axum_test::TestServer;
use seqlink::application::services::LinkService;
use seqlink::domain::repositories::{CounterStore, LinkStore};
use seqlink::domain::sequence::SequenceAllocator;
use seqlink::infrastructure::memory::{MemoryCounterStore, MemoryLinkStore};
use seqlink::routes::router;
use seqlink::state::AppState;
use seqlink::utils::code_encoder::CodeEncoder;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

pub fn create_service(
    counter_store: Arc<dyn CounterStore>,
    link_store: Arc<dyn LinkStore>,
) -> LinkService {
    LinkService::new(
        SequenceAllocator::new(counter_store, "urls"),
        link_store,
        CodeEncoder::base62(),
    )
    .with_base_url(BASE_URL)
}

/// State backed by fresh in-memory stores.
pub fn create_test_state() -> AppState {
    let service = create_service(
        Arc::new(MemoryCounterStore::new()),
        Arc::new(MemoryLinkStore::new()),
    );
    AppState::new(Arc::new(service))
}

/// Application routes over in-memory stores.
pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub fn create_test_server_with(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}
