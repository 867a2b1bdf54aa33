//! HTTP server for the home page, blog posts and static assets

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HomeConfig;
use crate::content::BlogResolver;
use crate::error::BlogError;
use crate::templates::TemplateRenderer;
use crate::Portfolio;

/// Server state, shared read-only by all requests
pub struct AppState {
    resolver: BlogResolver,
    templates: TemplateRenderer,
    home: HomeConfig,
    static_dir: PathBuf,
}

impl AppState {
    pub fn new(portfolio: &Portfolio) -> Result<Self> {
        Ok(Self {
            resolver: portfolio.resolver(),
            templates: TemplateRenderer::new(&portfolio.config)?,
            home: portfolio.config.home.clone(),
            static_dir: portfolio.static_dir.clone(),
        })
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        match self {
            BlogError::NotFound(id) => {
                tracing::debug!("Post not found: {:?}", id);
                (StatusCode::NOT_FOUND, "404 page not found").into_response()
            }
            BlogError::Template(e) => {
                tracing::error!("Template rendering error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering error").into_response()
            }
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(home_handler))
        .route("/blogs/:id", get(blog_handler))
        .nest_service("/static", static_files)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(portfolio: &Portfolio, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::new(portfolio)?);

    if !state.resolver.renderer().has_theme() {
        tracing::warn!(
            "Highlight theme {:?} is not available; code blocks will fail to render",
            portfolio.config.highlight.theme
        );
    }
    tracing::debug!("Serving posts from {:?}", state.resolver.content_dir());

    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running on port :{}", port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, BlogError> {
    Ok(Html(state.templates.render_home(&state.home)?))
}

/// Blog posts are read from disk, so they render on the blocking pool
async fn blog_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let task = tokio::task::spawn_blocking(move || {
        state.resolver.render_page(&id, &state.templates)
    });

    match task.await {
        Ok(Ok(page)) => Html(page).into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => {
            tracing::error!("Blog render task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}
