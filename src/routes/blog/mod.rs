use crate::blog::SessionID;
use crate::state::NestedRouter;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::Deserialize;

mod comment;
mod create;
mod uploads;
mod view;

/// The identity channel: the outer application's login flow hands clients a
/// session id, requests carry it back as `?session=<id>`.
#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    #[serde(default)]
    pub session: Option<SessionID>,
}

pub fn route() -> NestedRouter {
    let upload_compression_layer = tower_http::compression::CompressionLayer::new()
        .br(true)
        .quality(tower_http::CompressionLevel::Best);

    axum::Router::new()
        .route("/comment/:id", post(comment::post))
        .route("/addblog", post(create::post))
        .route(
            "/uploads/:name",
            get(uploads::get).layer(upload_compression_layer),
        )
        .route("/:blog_id", get(view::get))
}

/// `Location` plus an explicit status, so validation failures can answer
/// with a 4xx/5xx redirect rather than a plain 3xx.
fn redirect_to(status: StatusCode, location: String) -> Response {
    (status, [(axum::http::header::LOCATION, location)]).into_response()
}
