pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod gate;
pub mod loader;
pub mod motion;
pub mod navigation;
mod streams;
pub mod theme;
pub mod transition;
pub mod util;
pub mod view;
mod views;
