use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use tokio_util::io::ReaderStream;

pub(super) async fn get(
    State(state): SharedState,
    Path(name): Path<PathBuf>,
) -> Result<Response, StatusCode> {
    // strip any directory components so requests can't walk out of the
    // uploads folder
    let Some(file_name) = name.file_name() else {
        return Err(StatusCode::BAD_REQUEST);
    };

    let file_path = state.uploads_dir.join(file_name);
    let file = match tokio::fs::File::open(&file_path).await {
        Ok(it) => it,
        Err(err) => {
            if err.kind() == std::io::ErrorKind::NotFound {
                return Err(StatusCode::NOT_FOUND);
            }
            eprintln!("Error reading upload {file_name:?}: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    let stream = ReaderStream::new(file);
    let body = axum::body::Body::from_stream(stream);

    if let Some(mime_guess) = new_mime_guess::from_path(&file_path).first() {
        Ok(([("Content-Type", mime_guess.to_string())], body).into_response())
    } else {
        Ok(body.into_response())
    }
}
