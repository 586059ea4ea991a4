pub mod config;
pub mod world_storage;
