use super::{Store, StoreError};
use crate::blog::{User, UserID};

impl Store {
    /// Resolves a `created_by` reference into the stored user document.
    pub async fn find_user(&self, user_id: &UserID) -> Result<Option<User>, StoreError> {
        self.read_doc(&self.root.join("user").join(format!("{user_id}.json")))
            .await
    }
}
