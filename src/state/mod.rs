use crate::blog::SessionID;
use crate::store::Store;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod session;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub store: Store,
    pub uploads_dir: PathBuf,
    pub sessions: RwLock<HashMap<SessionID, session::Session>>,
}

impl State {
    pub fn new() -> State {
        State::at(
            PathBuf::from(crate::blog::STORE_PATH),
            PathBuf::from(crate::blog::UPLOADS_PATH),
        )
    }

    pub fn at(store_root: PathBuf, uploads_dir: PathBuf) -> State {
        State {
            store: Store::new(store_root),
            uploads_dir,
            sessions: RwLock::new(HashMap::new()),
        }
    }
}
