use serde::{Deserialize, Serialize};

/// A single amenity offer surfaced to the guest.
///
/// The engine returns these in an ordered sequence; order is part of the
/// contract since presentation renders top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

impl Recommendation {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}
