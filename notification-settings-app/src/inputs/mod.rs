//! Generic input element types.

pub mod button;
pub mod toggle;
