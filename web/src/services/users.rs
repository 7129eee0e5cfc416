use model::UserStore;

use super::BrowserStorage;

pub fn user_store() -> UserStore<BrowserStorage> {
    UserStore::new(BrowserStorage)
}
