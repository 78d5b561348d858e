pub mod catalog;
pub mod code;
pub mod metadata;
pub mod signal;
