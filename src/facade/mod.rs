pub mod dialog;
pub mod manager;
pub mod view_state;

pub use dialog::{DeleteDialog, EditDialog};
pub use manager::RecordManager;
pub use view_state::ViewState;
