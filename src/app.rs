use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::fixtures::FixtureStore;

/// Application state shared by all request handlers.
///
/// Requests are synchronous once a handler runs: each one takes the store
/// lock for its full duration, so read-after-write is always consistent
/// within a session.
#[derive(Debug)]
pub struct App {
    pub store: RwLock<FixtureStore>,
}

impl App {
    pub fn new(store: FixtureStore) -> Self {
        App {
            store: RwLock::new(store),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState(pub Arc<App>);

impl AppState {
    pub fn new(store: FixtureStore) -> Self {
        AppState(Arc::new(App::new(store)))
    }
}

impl Deref for AppState {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
