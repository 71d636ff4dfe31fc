//! State Management
//!
//! Global toast state and the inventory record model.

pub mod global;
pub mod records;

pub use global::{provide_global_state, GlobalState};
pub use records::{
    remove_record, replace_record, Chemical, Equipment, FieldSpec, Glassware, Record, SdsLookup,
};
