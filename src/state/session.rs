use crate::blog::{SessionID, UserID};

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserID,
    pub expires_at: std::time::Instant,
}

impl Session {
    pub fn is_valid(&self) -> bool {
        std::time::Instant::now() < self.expires_at
    }
}

impl super::State {
    pub async fn get_session(&self, session_id: &SessionID) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(session_id)?;

        session.is_valid().then(|| session.clone())
    }

    /// Sessions are only issued here; verifying who the user is belongs to
    /// the outer application's login flow.
    pub async fn create_session(&self, user_id: UserID) -> SessionID {
        let session_id: SessionID =
            crate::blog::get_random_hex_string::<{ crate::blog::SESSION_ID_BYTES }>();
        let new_session = Session {
            user_id,
            expires_at: std::time::Instant::now() + crate::blog::SESSION_TTL,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| session.is_valid());
        sessions.insert(session_id.clone(), new_session);

        session_id
    }
}
