//! Utilipay is a small REST backend for household utility billing.

#[forbid(unsafe_code)]
#[deny(missing_docs, unused_mut)]
mod bill;
mod crypto;
mod database;
pub mod error;
mod ledger;
mod middleware;
mod payment;
mod reminder;
mod router;
mod seed;
mod user;
mod utility;

pub mod config;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Method, StatusCode, header};
use axum::routing::get;
use axum::Router;
use error::ServerError;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    make_request_with_headers(app, method, path, body, &[]).await
}

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request_with_headers(
    app: Router,
    method: Method,
    path: &str,
    body: String,
    headers: &[(&str, &str)],
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    dbg!(&method, path, &body);

    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    app.oneshot(builder.body(axum::body::Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub db: database::Database,
    pub crypto: Arc<crypto::PasswordManager>,
    pub admin: Arc<dyn middleware::CredentialVerifier>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().include_headers(true).level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().include_headers(true).latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(10)))
        // Remove sensitive headers from trace.
        .layer(SetSensitiveHeadersLayer::new([
            header::AUTHORIZATION,
            header::HeaderName::from_static(crate::middleware::PASSWORD_HEADER),
        ]))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
                .allow_headers(Any),
        );

    Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        .nest("/auth", router::auth::router())
        .nest("/users", router::users::router())
        .nest("/utilities", router::utilities::router())
        .nest("/bills", router::bills::router())
        .nest("/payments", router::payments::router())
        .nest("/reminders", router::reminders::router())
        .nest("/admin", router::admin::router(state.clone()))
        .with_state(state)
        .layer(middleware)
}

/// Initialize the application state.
pub async fn initialize_state() -> Result<AppState, Box<dyn std::error::Error>>
{
    // read configuration file. let it in memory.
    let config = config::Configuration::default().read()?;

    let (path, pool_size) = match config.sqlite {
        Some(ref sqlite) => (
            sqlite.path.clone(),
            sqlite.pool_size.unwrap_or(database::DEFAULT_POOL_SIZE),
        ),
        None => {
            tracing::warn!("missing `sqlite` entry on `config.yaml` file");
            (
                database::DEFAULT_DATABASE_PATH.to_owned(),
                database::DEFAULT_POOL_SIZE,
            )
        },
    };
    let db = database::Database::new(&path, pool_size).await?;

    // execute migrations scripts on start.
    sqlx::migrate!().run(&db.sqlite).await?;

    let crypto = Arc::new(crypto::PasswordManager::new(config.argon2.clone())?);

    let admin: Arc<dyn middleware::CredentialVerifier> =
        Arc::new(middleware::StaticCredentials::new(
            config.admin.clone().unwrap_or_default(),
        ));

    let state = AppState {
        config,
        db,
        crypto,
        admin,
    };

    if state.config.seed_demo {
        seed::reset_demo(&state.db, &state.crypto).await?;
    }

    Ok(state)
}
