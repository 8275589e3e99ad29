use crate::state::SharedState;
use crate::store::NewBlogPost;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::{redirect_to, SessionQuery};

pub(super) async fn post(
    State(state): SharedState,
    Query(query): Query<SessionQuery>,
    mut multipart: Multipart,
) -> Response {
    let mut title = None;
    let mut body = None;
    let mut cover_image = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(it)) => it,
            Ok(None) => break,
            Err(err) => {
                eprintln!("Error reading add-blog form: {err}");
                return redirect_to(StatusCode::BAD_REQUEST, String::from("/addblog"));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => title = field.text().await.ok(),
            "body" => body = field.text().await.ok(),
            crate::upload::COVER_IMAGE_FIELD => {
                // only a part with a filename counts as an upload
                if field.file_name().is_none() {
                    continue;
                }

                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                match field.bytes().await {
                    Ok(bytes) => cover_image = Some((content_type, bytes)),
                    Err(err) => {
                        eprintln!("Error reading cover image field: {err}");
                        return redirect_to(StatusCode::BAD_REQUEST, String::from("/addblog"));
                    }
                }
            }
            _ => continue,
        }
    }

    let (Some(title), Some(body)) = (title, body) else {
        return redirect_to(StatusCode::BAD_REQUEST, String::from("/addblog"));
    };
    if title.is_empty() || body.is_empty() {
        return redirect_to(StatusCode::BAD_REQUEST, String::from("/addblog"));
    }

    let cover_img_url = match cover_image {
        Some((content_type, bytes)) => {
            let file_name =
                crate::upload::unique_filename(crate::upload::COVER_IMAGE_FIELD, &content_type);

            match crate::upload::save(&state.uploads_dir, &file_name, &bytes).await {
                Ok(()) => format!("/uploads/{}", urlencoding::encode(&file_name)),
                Err(err) => {
                    eprintln!("Error saving cover image {file_name}: {err}");
                    return redirect_to(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        String::from("/addblog"),
                    );
                }
            }
        }
        None => String::new(),
    };

    let created_by = match &query.session {
        Some(session_id) => state
            .get_session(session_id)
            .await
            .map(|session| session.user_id)
            .unwrap_or_default(),
        None => String::new(),
    };

    match state
        .store
        .create_post(NewBlogPost {
            title,
            body,
            cover_img_url,
            created_by,
        })
        .await
    {
        Ok(_) => redirect_to(StatusCode::FOUND, String::from("/")),
        Err(err) => {
            eprintln!("Error posting blog: {err}");
            redirect_to(StatusCode::INTERNAL_SERVER_ERROR, String::from("/addblog"))
        }
    }
}
