//! `api` crate — HTTP REST API layer.
//!
//! Exposes, under a configurable base path (default `/api`):
//!   GET    /todos
//!   GET    /todos/:id
//!   POST   /todos
//!   PUT    /todos/:id
//!   DELETE /todos/:id

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use service::TodoService;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod handlers;

/// Shared state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoService>,
}

impl AppState {
    pub fn new(todos: TodoService) -> Self {
        Self { todos: Arc::new(todos) }
    }
}

/// The todo routes, without a base path.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(handlers::todos::list).post(handlers::todos::create))
        .route(
            "/todos/:id",
            get(handlers::todos::get)
                .put(handlers::todos::update)
                .delete(handlers::todos::delete),
        )
        .with_state(state)
}

/// Full application: routes mounted under `base_path`, plus CORS and
/// request tracing. An empty base path or `/` mounts at the root.
pub fn app(state: AppState, base_path: &str) -> Router {
    let base_path = base_path.trim_matches('/');
    let routes = router(state);
    let routes = if base_path.is_empty() {
        routes
    } else {
        Router::new().nest(&format!("/{base_path}"), routes)
    };

    routes
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
