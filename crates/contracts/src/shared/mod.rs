pub mod config;
pub mod dom;
pub mod styles;
