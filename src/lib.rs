pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interactive;
pub mod loader;
pub mod reader;
pub mod render;
pub mod session;
pub mod template;
