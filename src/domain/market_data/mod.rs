//! Market data aggregate: gainer snapshots and their value objects.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
