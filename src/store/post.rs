use super::{Store, StoreError};
use crate::blog::{BlogID, BlogPost, UserID};

#[derive(Debug)]
pub struct NewBlogPost {
    pub title: String,
    pub body: String,
    pub cover_img_url: String,
    pub created_by: UserID,
}

impl Store {
    pub async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let post = BlogPost {
            id: crate::blog::get_random_hex_string::<{ crate::blog::BLOG_ID_BYTES }>(),
            title: new_post.title,
            body: new_post.body,
            cover_img_url: new_post.cover_img_url,
            created_by: new_post.created_by,
            created_at: chrono::Utc::now(),
        };

        self.write_doc(
            &self.root.join("post").join(format!("{}.json", post.id)),
            &post,
        )
        .await?;

        Ok(post)
    }

    pub async fn find_post(&self, blog_id: &BlogID) -> Result<Option<BlogPost>, StoreError> {
        self.read_doc(&self.root.join("post").join(format!("{blog_id}.json")))
            .await
    }
}
