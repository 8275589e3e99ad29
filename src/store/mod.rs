use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

mod comment;
mod post;
mod user;

pub use comment::NewComment;
pub use post::NewBlogPost;

/// Document store rooted at a directory, one JSON file per record:
/// `post/<id>.json`, `comment/<id>.json`, `user/<id>.json`.
#[derive(Debug)]
pub struct Store {
    pub root: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document: {0}")]
    Document(#[from] serde_json::Error),
}

impl Store {
    pub fn new(root: PathBuf) -> Store {
        Store { root }
    }

    async fn read_doc<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, StoreError> {
        let raw = match tokio::fs::read(path).await {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(Some(serde_json::from_slice(&raw)?))
    }

    async fn write_doc<T: Serialize>(&self, path: &Path, doc: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_vec(doc)?).await?;

        Ok(())
    }
}
