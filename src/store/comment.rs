use super::{Store, StoreError};
use crate::blog::{BlogID, Comment, UserID};

#[derive(Debug)]
pub struct NewComment {
    pub content: String,
    pub created_by: UserID,
    pub blog_id: BlogID,
}

impl Store {
    pub async fn create_comment(&self, new_comment: NewComment) -> Result<Comment, StoreError> {
        let comment = Comment {
            id: crate::blog::get_random_hex_string::<{ crate::blog::COMMENT_ID_BYTES }>(),
            content: new_comment.content,
            created_by: new_comment.created_by,
            blog_id: new_comment.blog_id,
            created_at: chrono::Utc::now(),
        };

        self.write_doc(
            &self.root.join("comment").join(format!("{}.json", comment.id)),
            &comment,
        )
        .await?;

        Ok(comment)
    }

    /// All comments for one post, oldest first.
    pub async fn comments_for_post(&self, blog_id: &BlogID) -> Result<Vec<Comment>, StoreError> {
        let mut entries = match tokio::fs::read_dir(self.root.join("comment")).await {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut comments = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let raw = tokio::fs::read(entry.path()).await?;
            let comment = serde_json::from_slice::<Comment>(&raw)?;

            if comment.blog_id == *blog_id {
                comments.push(comment);
            }
        }
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(comments)
    }
}
