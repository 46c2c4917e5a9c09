pub mod components;
pub mod config;
pub mod hooks;
pub mod services;
pub mod store;

mod app;

pub use app::{App, AppProps};
