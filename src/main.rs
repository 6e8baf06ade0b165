use std::env;

use axum::http::Request;
use post_canvas::{router, AppState, Config};
use shuttle_runtime::SecretStore;
use tower_http::trace::TraceLayer;
use tracing::Level;

#[shuttle_runtime::main]
async fn main(#[shuttle_runtime::Secrets] secrets: SecretStore) -> shuttle_axum::ShuttleAxum {
    secrets.into_iter().for_each(|x| env::set_var(x.0, x.1));

    let config = Config::from_env().map_err(anyhow::Error::from)?;
    let state = AppState::new(config).map_err(anyhow::Error::from)?;

    let router = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    Ok(router.into())
}
