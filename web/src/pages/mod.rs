mod home;
mod users;

pub use home::*;
pub use users::*;
