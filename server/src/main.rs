mod proxy;
mod state;

use app::{component, config::SiteConfig, shell};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use serde_json::json;
use state::AppState;

use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portal",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

const fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let site = match SiteConfig::from_env() {
        Ok(site) => site,
        Err(err) => {
            logging::error!("Invalid site configuration: {}", err);
            return;
        }
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let app_state = match AppState::new(leptos_options.clone(), site) {
        Ok(state) => state,
        Err(err) => {
            logging::error!("Failed to build upstream HTTP client: {}", err);
            return;
        }
    };

    let app = Router::new()
        .leptos_routes(&app_state, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .merge(proxy::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => logging::log!("Server shutdown gracefully"),
        Err(err) => logging::error!("Failed to serve app: {:?}", err),
    }
}
