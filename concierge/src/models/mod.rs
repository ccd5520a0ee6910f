mod blueprint;
mod events;
mod guest;
mod recommendation;
mod weather;

pub use blueprint::*;
pub use events::*;
pub use guest::*;
pub use recommendation::*;
pub use weather::*;
