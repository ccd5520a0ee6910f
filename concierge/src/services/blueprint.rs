use std::sync::Arc;

use chrono::Local;

use crate::config::Config;
use crate::error::{ConciergeError, Result};
use crate::models::{Blueprint, EventCalendar, GuestRegistry};
use crate::services::derive_recommendations;
use crate::weather::WeatherClient;

/// Composes the three collaborators — weather client, event calendar, and
/// guest registry — into one stay blueprint per request.
///
/// Weather and today's events are recomputed on every call; nothing is
/// cached. The engine itself stays pure, the wall clock only enters here.
#[derive(Clone)]
pub struct BlueprintService {
    weather: WeatherClient,
    calendar: Arc<EventCalendar>,
    guests: Arc<GuestRegistry>,
    location_name: String,
}

impl BlueprintService {
    pub fn new(
        config: &Config,
        weather: WeatherClient,
        calendar: Arc<EventCalendar>,
        guests: Arc<GuestRegistry>,
    ) -> Self {
        Self {
            weather,
            calendar,
            guests,
            location_name: config.location.name.clone(),
        }
    }

    /// Build the blueprint for today's weekday.
    pub async fn build(&self, guest_name: &str) -> Result<Blueprint> {
        let today = Local::now().format("%A").to_string();
        self.build_for_day(guest_name, &today).await
    }

    /// Build the blueprint for an explicit weekday name. Split out from
    /// [`build`](Self::build) so tests are not tied to the wall clock.
    pub async fn build_for_day(&self, guest_name: &str, day_name: &str) -> Result<Blueprint> {
        let guest = self
            .guests
            .get(guest_name)
            .ok_or_else(|| ConciergeError::NotFound(format!("Guest '{guest_name}' not found")))?
            .clone();

        let weather = self.weather.current().await;
        let schedule = self.calendar.schedule_for(day_name);

        let recommendations =
            derive_recommendations(&weather, &schedule.events, &guest.preferences);

        tracing::debug!(
            "Blueprint for {}: {} recommendation(s) on {}",
            guest.display_name,
            recommendations.len(),
            schedule.day_name
        );

        Ok(Blueprint {
            location: self.location_name.clone(),
            weather,
            day_name: schedule.day_name,
            events: schedule.events,
            guest,
            recommendations,
        })
    }
}
