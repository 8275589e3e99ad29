use crate::blog::BlogID;
use crate::state::SharedState;
use crate::store::NewComment;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use super::{redirect_to, SessionQuery};

#[derive(Debug, Deserialize)]
pub(super) struct CommentForm {
    #[serde(default)]
    content: String,
}

pub(super) async fn post(
    State(state): SharedState,
    Path(blog_id): Path<BlogID>,
    Query(query): Query<SessionQuery>,
    Form(form): Form<CommentForm>,
) -> Response {
    let session = match &query.session {
        Some(session_id) => state.get_session(session_id).await,
        None => None,
    };

    let Some(session) = session else {
        return redirect_to(StatusCode::BAD_REQUEST, format!("/blog/{blog_id}"));
    };
    if form.content.trim().is_empty() {
        return redirect_to(StatusCode::BAD_REQUEST, format!("/blog/{blog_id}"));
    }

    match state
        .store
        .create_comment(NewComment {
            content: form.content,
            created_by: session.user_id,
            blog_id: blog_id.clone(),
        })
        .await
    {
        Ok(_) => (),
        Err(err) => eprintln!("Error posting comment for blog {blog_id}: {err}"),
    }

    redirect_to(StatusCode::FOUND, format!("/blog/{blog_id}"))
}
