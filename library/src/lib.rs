#![deny(unsafe_code)]

pub mod animation;
pub mod energy;
pub mod error;
pub mod export;
pub mod format;
pub mod render;

pub type Result<T> = std::result::Result<T, crate::error::Error>;
