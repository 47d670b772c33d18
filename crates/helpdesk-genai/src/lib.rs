#![doc = include_str!("../README.md")]

mod client;
mod error;
mod types;

pub use client::{client, init, init_with, GenAiClient};
pub use error::GenAiError;
pub use types::{GenAiConfig, ModelRef, Plugin, API_KEY_ENV, DEFAULT_MODEL, TIMEOUT_ENV};
