//! Feature modules

pub mod bounds_check;
