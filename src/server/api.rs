use crate::agent::ConciergeAgent;
use crate::alerts::Alert;
use crate::cli::Args;
use crate::forms::{ SubmitError, ValidationReport, FAILURE_ALERT, SUCCESS_ALERT };
use crate::models::contact::ContactSubmission;
use crate::search::SearchView;
use crate::ui::theme::Theme;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use axum::{
    routing::{get, post},
    Router,
    extract::{State, Query},
    response::IntoResponse,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use log::{info, error};

#[derive(Deserialize)]
pub struct ReloadRequest {
    pub source: Option<String>,
}

#[derive(Serialize)]
struct ReloadResponse {
    success: bool,
    message: String,
    details: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub q: Option<String>,
}

/// What the contact pages get back for a submission. `redirect` is only
/// present on success; `field_errors` only when validation rejected the
/// submission.
#[derive(Serialize)]
struct ContactResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<&'static str>,
    alerts: Vec<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_errors: Option<ValidationReport>,
}

#[derive(Serialize)]
struct ThemeResponse {
    theme: Theme,
}

#[derive(Clone)]
struct AppState {
    agent: Arc<Mutex<ConciergeAgent>>,
    args: Args,
}

pub async fn start_http_server(
    http_port: u16,
    agent: Arc<Mutex<ConciergeAgent>>,
    args: Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = format!("0.0.0.0:{}", http_port).parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app_state = AppState {
        agent,
        args: args.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/search", get(search_handler))
        .route("/api/reload", get(reload_handler))
        .route("/api/theme", get(theme_handler))
        .route("/api/theme/toggle", post(theme_toggle_handler))
        .layer(cors)
        .with_state(app_state);

    if args.enable_tls && args.tls_cert_path.is_some() && args.tls_key_path.is_some() {
        let cert_path = args.tls_cert_path.as_ref().unwrap();
        let key_path = args.tls_key_path.as_ref().unwrap();

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        tokio::spawn(async move {
            let result = axum_server::bind_rustls(addr, tls_config)
                .serve(app.into_make_service())
                .await;

            if let Err(e) = result {
                error!("HTTPS server error: {}", e);
            }
        });

        info!("HTTPS server started with TLS enabled");
    } else {
        tokio::spawn(async move {
            match tokio::net::TcpListener::bind(addr).await {
                Ok(listener) => {
                    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
                        error!("HTTP server error: {}", e);
                    }
                },
                Err(e) => {
                    error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
                }
            }
        });

        info!("HTTP server started");
    }

    Ok(())
}

async fn health_handler() -> &'static str {
    "Site concierge is running"
}

async fn contact_handler(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> impl IntoResponse {
    // The relay is cloned out so the agent lock is not held across the
    // delivery network calls.
    let relay = state.agent.lock().await.relay_handle();

    match relay.submit(&submission).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ContactResponse {
                success: true,
                redirect: Some(outcome.redirect),
                alerts: vec![Alert::success(SUCCESS_ALERT)],
                field_errors: None,
            }),
        ),
        Err(SubmitError::Validation(report)) => (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse {
                success: false,
                redirect: None,
                alerts: report.alerts(),
                field_errors: Some(report),
            }),
        ),
        Err(SubmitError::Dispatch(e)) => {
            error!("Contact delivery failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ContactResponse {
                    success: false,
                    redirect: None,
                    alerts: vec![Alert::error(FAILURE_ALERT)],
                    field_errors: None,
                }),
            )
        }
    }
}

async fn search_handler(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<SearchView> {
    let query = req.q.unwrap_or_default();
    let view = state.agent.lock().await.search(&query);
    Json(view)
}

async fn theme_handler(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = state.agent.lock().await.current_theme();
    Json(ThemeResponse { theme })
}

async fn theme_toggle_handler(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = state.agent.lock().await.toggle_theme();
    Json(ThemeResponse { theme })
}

async fn reload_handler(
    State(state): State<AppState>,
    Query(req): Query<ReloadRequest>,
) -> impl IntoResponse {
    let mut agent = match state.agent.try_lock() {
        Ok(g) => g,
        Err(_) => return (StatusCode::SERVICE_UNAVAILABLE, Json(ReloadResponse {
            success: false,
            message: "Agent busy".into(),
            details: None,
        })).into_response(),
    };

    let source = req.source.as_deref().unwrap_or("all");
    let mut results = Vec::new();
    let mut ok = true;

    match source {
        "responses" => {
            match agent.reload_responses_if_changed(&state.args) {
                Ok(true) => results.push("Responses reloaded".into()),
                Ok(false) => results.push("Responses unchanged".into()),
                Err(e) => { ok = false; results.push(format!("Responses error: {}", e)); }
            }
        }
        "search" => {
            match agent.reload_search_if_changed(&state.args) {
                Ok(true) => results.push("Search index reloaded".into()),
                Ok(false) => results.push("Search index unchanged".into()),
                Err(e) => { ok = false; results.push(format!("Search index error: {}", e)); }
            }
        }
        _ => {
            match agent.reload_responses_if_changed(&state.args) {
                Ok(true) => results.push("Responses reloaded".into()),
                Ok(false) => results.push("Responses unchanged".into()),
                Err(e) => { ok = false; results.push(format!("Responses error: {}", e)); }
            }
            match agent.reload_search_if_changed(&state.args) {
                Ok(true) => results.push("Search index reloaded".into()),
                Ok(false) => results.push("Search index unchanged".into()),
                Err(e) => { ok = false; results.push(format!("Search index error: {}", e)); }
            }
        }
    }

    let code = if ok { StatusCode::OK } else { StatusCode::BAD_REQUEST };
    (code, Json(ReloadResponse {
        success: ok,
        message: if ok { "Reload complete".into() } else { "Reload errors".into() },
        details: Some(results),
    })).into_response()
}
