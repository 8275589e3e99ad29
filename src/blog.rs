use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub type BlogID = String;
pub type CommentID = String;
pub type UserID = String;
pub type SessionID = String;

pub const STORE_PATH: &str = "store";
pub const UPLOADS_PATH: &str = "public/uploads";

pub const BLOG_ID_BYTES: usize = 16;
pub const COMMENT_ID_BYTES: usize = 16;
pub const SESSION_ID_BYTES: usize = 32;

pub const SESSION_TTL: std::time::Duration = std::time::Duration::from_secs(60 * 60 * 24);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogID,
    pub title: String,
    pub body: String,
    // `/uploads/<file>` path, empty when the post has no cover image
    #[serde(default)]
    pub cover_img_url: String,
    pub created_by: UserID,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentID,
    pub content: String,
    pub created_by: UserID,
    pub blog_id: BlogID,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Written by the outer application; this crate only reads users to populate
/// `created_by` references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserID,
    pub username: String,
    pub name: String,
}

pub fn get_random_hex_string<const LEN: usize>() -> String {
    let mut bytes = [0u8; LEN];
    rand_chacha::ChaCha20Rng::from_entropy().fill_bytes(&mut bytes);

    bytes.iter().fold(String::new(), |mut output, b| {
        let _ = write!(output, "{b:02x}");
        output
    })
}
