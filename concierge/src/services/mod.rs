mod blueprint;
mod recommend;

pub use blueprint::BlueprintService;
pub use recommend::derive_recommendations;
