use std::sync::Arc;

use crate::config::Config;
use crate::models::{EventCalendar, GuestRegistry};
use crate::services::BlueprintService;
use crate::weather::WeatherClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub guests: Arc<GuestRegistry>,
    pub calendar: Arc<EventCalendar>,
    pub blueprint: BlueprintService,
}

impl AppState {
    pub fn new(config: Config, weather: WeatherClient) -> Self {
        let config = Arc::new(config);
        let guests = Arc::new(GuestRegistry::builtin());
        let calendar = Arc::new(EventCalendar::builtin());
        let blueprint =
            BlueprintService::new(&config, weather, calendar.clone(), guests.clone());

        Self {
            config,
            guests,
            calendar,
            blueprint,
        }
    }
}
