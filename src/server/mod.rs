//! HTTP server rendering pages on request

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
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Credentials, SiteConfig};
use crate::content::ContentLoader;
use crate::notion::{FetchError, NotionClientFactory, SourceFactory};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Shared, read-only server state
pub struct ServerState {
    pub config: SiteConfig,
    pub credentials: Credentials,
    pub factory: Box<dyn SourceFactory>,
    pub renderer: TemplateRenderer,
    pub static_dir: PathBuf,
}

impl ServerState {
    /// State for a blog talking to the Notion API
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            config: blog.config.clone(),
            credentials: blog.credentials.clone(),
            factory: Box::new(NotionClientFactory::new(blog.config.notion.clone())),
            renderer: TemplateRenderer::new()?,
            static_dir: blog.static_dir.clone(),
        })
    }

    fn loader(&self) -> Result<ContentLoader<'_>, FetchError> {
        ContentLoader::connect(self.factory.as_ref(), &self.credentials, &self.config.notion)
    }
}

/// Failure while handling a page request
#[derive(Debug, Error)]
enum RouteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/:slug", get(page_handler))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(blog)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `GET /` - list of published pages
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    match load_index(&state).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Error in index loader: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load contents").into_response()
        }
    }
}

/// `GET /:slug` - a single page
async fn page_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    match load_page(&state, &slug).await {
        Ok(html) => Html(html).into_response(),
        Err(RouteError::Fetch(e)) => {
            tracing::error!("Error in page loader for {:?}: {}", slug, e);
            (StatusCode::NOT_FOUND, "Page not found").into_response()
        }
        Err(e @ RouteError::Render(_)) => {
            tracing::error!("Error rendering page {:?}: {}", slug, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

async fn load_index(state: &ServerState) -> Result<String, RouteError> {
    let pages = state.loader()?.list_published().await?;
    tracing::info!("Listing {} published pages", pages.len());
    Ok(state.renderer.render_index(&state.config, &pages)?)
}

async fn load_page(state: &ServerState, slug: &str) -> Result<String, RouteError> {
    let page = state.loader()?.get_by_slug(slug).await?;
    Ok(state.renderer.render_page(&state.config, slug, &page)?)
}
