use axum::{Extension, Router, routing::get};

use crate::{
    api,
    config::Config,
    error, info,
    management::{AppState, SharedState},
    success, warning,
};

/// Builds the proxy's router around `state`.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/pause", get(api::pause))
        .route("/play", get(api::play))
        .route("/next", get(api::next))
        .route("/previous", get(api::previous))
        .route("/top-tracks", get(api::top_tracks))
        .layer(Extension(state))
}

/// Binds the configured address and serves until the process is stopped.
///
/// With `open_browser` the login page is opened once the listener is up.
/// Failing to bind or to serve is fatal.
pub async fn start_api_server(config: Config, open_browser: bool) {
    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Client ID: {}", config.client_id);
    info!("Redirect URI: {}", config.redirect_uri);

    let login_url = config.login_url();
    let app = router(AppState::new(config).shared());

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    success!("Server started on http://{}", addr);
    info!("Log in at {}", login_url);

    if open_browser && webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        )
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
    }
}
