//! HTTP server implementation

use axum::{
    extract::{rejection::FormRejection, DefaultBodyLimit, Form, State},
    response::Html,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::client::{LlmClient, ModelGateway};
use crate::core::config::AppConfig;
use crate::core::orchestrator::Orchestrator;
use crate::server::page::render_page;

/// Application state
#[derive(Clone)]
pub struct AppState {
    orchestrator: Orchestrator,
}

impl AppState {
    /// Wrap an orchestrator for sharing across handlers
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Submitted form fields; both may be absent
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionForm {
    /// Text to translate
    pub text: Option<String>,
    /// Target language name
    pub language: Option<String>,
}

/// Health check handler
async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Empty form
async fn index() -> Html<String> {
    Html(render_page(None))
}

/// Translate, judge and render.
///
/// A missing body or a non-form content type counts as a submission with no fields.
async fn submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SubmissionForm>, FormRejection>,
) -> Html<String> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Form not readable ({}), using defaults", rejection);
            SubmissionForm::default()
        }
    };
    let result = state
        .orchestrator
        .run_submission(form.text, form.language)
        .await;
    Html(render_page(Some(&result)))
}

/// Build the router around an orchestrator.
///
/// Request bodies are not size-limited; submitted text reaches the model whole.
pub fn router(orchestrator: Orchestrator) -> Router {
    let state = Arc::new(AppState::new(orchestrator));

    Router::new()
        .route("/", get(index).post(submit))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Run the HTTP server against the configured model endpoint
pub async fn run_server(
    config: AppConfig,
    gateway: Option<Arc<dyn ModelGateway>>,
) -> anyhow::Result<()> {
    let gateway: Arc<dyn ModelGateway> = match gateway {
        Some(gateway) => gateway,
        None => Arc::new(LlmClient::from_config(&config)?),
    };
    let orchestrator = Orchestrator::from_config(gateway, &config);
    let app = router(orchestrator);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Starting server on {}", addr);
    info!(
        "Translator model: {}, judge model: {}",
        config.translator_model, config.judge_model
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
