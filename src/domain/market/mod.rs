//! Market aggregate: tradable pairs, market snapshots and the gateway port.

pub mod entities;
pub mod gateway;
pub mod value_objects;

pub use entities::*;
pub use gateway::*;
pub use value_objects::*;
