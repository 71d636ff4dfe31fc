//! UI Components
//!
//! Reusable Leptos components for the inventory screens.

pub mod add_form;
pub mod data_grid;
pub mod info_modal;
pub mod nav;
pub mod toast;

pub use add_form::AddForm;
pub use data_grid::{CellLink, DataGrid};
pub use info_modal::InfoModal;
pub use nav::Nav;
pub use toast::Toast;
