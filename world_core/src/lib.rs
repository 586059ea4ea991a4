pub mod constants;
pub mod error;
pub mod events;
pub mod logging;
pub mod scene;
pub mod storage;
pub mod transitions;
pub mod world;
