mod chambers;
mod errors;
mod records;
mod storage;
mod store;
mod validate;

pub use chambers::*;
pub use errors::*;
pub use records::*;
pub use storage::*;
pub use store::*;
pub use validate::*;
