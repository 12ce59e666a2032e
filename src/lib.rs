pub mod app;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod store;
pub mod ui;
pub mod web;

pub use error::{Error, Result};
