//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API. They are
//! separate from the internal domain models in `src/models/` and handle
//! serialization and domain-model conversion.

pub mod blueprint;
pub mod guests;

pub use blueprint::*;
pub use guests::*;
