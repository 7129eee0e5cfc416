mod chambers;
mod storage;
mod users;

pub use chambers::*;
pub use storage::*;
pub use users::*;
