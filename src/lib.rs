pub mod config;
pub mod data;
pub mod types;
pub mod views;
