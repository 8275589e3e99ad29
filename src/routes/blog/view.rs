use crate::blog::{BlogID, BlogPost, Comment, SessionID, User};
use crate::state::{SharedState, State as AppState};
use crate::store::StoreError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::{redirect_to, SessionQuery};

/// The render locals the outer view layer receives: the post and its
/// comments with `created_by` populated, plus the requesting user.
#[derive(Debug, Serialize)]
pub(super) struct BlogView {
    blog: BlogPost,
    created_by: Option<User>,
    comments: Vec<CommentView>,
    user: Option<User>,
}

#[derive(Debug, Serialize)]
pub(super) struct CommentView {
    comment: Comment,
    created_by: Option<User>,
}

pub(super) async fn get(
    State(state): SharedState,
    Path(blog_id): Path<BlogID>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<BlogView>, Response> {
    let blog = match state.store.find_post(&blog_id).await {
        Ok(Some(it)) => it,
        Ok(None) => return Err(redirect_to(StatusCode::NOT_FOUND, String::from("/"))),
        Err(err) => {
            eprintln!("Error retrieving blog {blog_id}: {err}");
            return Err(redirect_to(StatusCode::FOUND, String::from("/")));
        }
    };

    match assemble_view(&state, blog, query.session.as_ref()).await {
        Ok(view) => Ok(Json(view)),
        Err(err) => {
            eprintln!("Error retrieving blog {blog_id}: {err}");
            Err(redirect_to(StatusCode::FOUND, String::from("/")))
        }
    }
}

async fn assemble_view(
    state: &AppState,
    blog: BlogPost,
    session_id: Option<&SessionID>,
) -> Result<BlogView, StoreError> {
    let created_by = state.store.find_user(&blog.created_by).await?;

    let mut comments = Vec::new();
    for comment in state.store.comments_for_post(&blog.id).await? {
        let created_by = state.store.find_user(&comment.created_by).await?;
        comments.push(CommentView {
            comment,
            created_by,
        });
    }

    let user = match session_id {
        Some(session_id) => match state.get_session(session_id).await {
            Some(session) => state.store.find_user(&session.user_id).await?,
            None => None,
        },
        None => None,
    };

    Ok(BlogView {
        blog,
        created_by,
        comments,
        user,
    })
}
