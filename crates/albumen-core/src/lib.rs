pub mod collection;
pub mod download;
pub mod error;
pub mod layout;
pub mod models;
pub mod orientation;
pub mod platform;
pub mod print;
pub mod sample;

pub use error::{Error, Result};
