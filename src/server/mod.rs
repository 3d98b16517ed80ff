pub mod chat_request;
pub mod handlers;

use std::sync::Arc;

use axum::Router;

use crate::config::Settings;
use crate::error::Result as AppResult;
use crate::http_client;

#[derive(Clone)]
pub struct AppState {
    pub config: Settings,
    pub http: reqwest::Client,
}

pub fn create_app(config: Settings) -> AppResult<Router> {
    let http = http_client::build_client()?;

    let app_state = AppState { config, http };

    let mut app = handlers::routes().with_state(Arc::new(app_state));

    // CORS（聊天页面可能由任意静态文件服务器托管，需允许跨域调用 /chat）
    use axum::http::{Method, header};
    use tower_http::cors::{AllowOrigin, CorsLayer};
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::mirror_request());
    app = app.layer(cors);

    // Request-level logging; per-handler diagnostics go through tracing
    app = app.layer(tower_http::trace::TraceLayer::new_for_http());

    Ok(app)
}
