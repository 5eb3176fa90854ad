use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

/// Immutable per-process state: one shared outbound HTTP client plus the
/// content backend configuration. No locks, nothing request-scoped.
#[derive(Debug)]
pub struct State {
    pub http: reqwest::Client,
    pub content: crate::content::Config,
}

impl State {
    pub fn new(content: crate::content::Config) -> State {
        State {
            http: reqwest::Client::new(),
            content,
        }
    }
}
