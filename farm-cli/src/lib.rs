pub mod api;
pub mod app;
pub mod session;
pub mod utils;
pub mod views;
