//! Pages
//!
//! Top-level page components for each route.

pub mod chemicals;
pub mod equipment;
pub mod glassware;
pub mod home;
pub mod inventory;

pub use chemicals::Chemicals;
pub use equipment::Equipment;
pub use glassware::Glassware;
pub use home::Home;
