//! Support Desk - Leptos Frontend Library

pub mod animation;
pub mod app;
pub mod components;
pub mod formatters;
pub mod hooks;
pub mod pages;
