pub mod blueprint;
pub mod guests;
pub(crate) mod health;

pub use health::health_check;
