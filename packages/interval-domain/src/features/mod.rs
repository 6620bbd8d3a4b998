//! Feature modules

pub mod value_range;
