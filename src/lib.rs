pub mod app;
pub mod config;
pub mod extract;
pub mod gallery;
pub mod hub;
pub mod session;
