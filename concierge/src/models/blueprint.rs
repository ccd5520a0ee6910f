use crate::models::{CurrentWeather, GuestProfile, Recommendation};

/// The fully composed stay blueprint for one guest: live weather, today's
/// events, and the derived recommendations, ready for presentation.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub location: String,
    pub weather: CurrentWeather,
    pub day_name: String,
    pub events: Vec<String>,
    pub guest: GuestProfile,
    pub recommendations: Vec<Recommendation>,
}
