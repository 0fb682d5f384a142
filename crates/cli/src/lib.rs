//! Process wiring for the comfort index server: configuration bootstrap,
//! service graph and the HTTP front door.

pub mod bootstrap;
pub mod di;
pub mod server;
