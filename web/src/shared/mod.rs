mod confirm_dialog;
mod sidebar;
mod user_form;

pub use confirm_dialog::*;
pub use sidebar::*;
pub use user_form::*;
