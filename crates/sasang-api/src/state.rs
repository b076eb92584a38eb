use sasang_storage::objects::ObjectStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: ObjectStore,
    pub default_instrument: String,
}
