pub mod area_handle;
pub mod connectable;
pub mod connection;
pub mod passage;
pub mod selector;
pub mod transistor;
pub mod world_graph;
