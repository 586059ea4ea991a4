pub mod content;
pub mod loader;
