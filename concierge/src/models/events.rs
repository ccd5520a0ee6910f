/// Event list for a single day, as returned by calendar lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub day_name: String,
    pub events: Vec<String>,
}

/// Static weekday → events table. Built once at startup and never mutated.
///
/// Exactly one entry per weekday name; lookups for anything else fall back
/// to a single generic event rather than an empty or absent result.
#[derive(Debug, Clone)]
pub struct EventCalendar {
    entries: Vec<(&'static str, Vec<String>)>,
}

const DEFAULT_EVENT: &str = "General Relaxation";

impl EventCalendar {
    /// The compiled-in hotel event calendar.
    pub fn builtin() -> Self {
        let entries = vec![
            ("Monday", to_events(&["Weekday Business Mixer", "Quiet Reading Hour"])),
            ("Tuesday", to_events(&["Taco Tuesday", "Business Networking"])),
            ("Wednesday", to_events(&["Wine Down Wednesday", "Mid-week Yoga"])),
            (
                "Thursday",
                to_events(&["Thirsty Thursday Happy Hour", "Live Acoustic Music"]),
            ),
            ("Friday", to_events(&["Friday Night Fever", "Cocktail Workshop"])),
            ("Saturday", to_events(&["Saturday Night Jazz", "Pool Party"])),
            ("Sunday", to_events(&["Sunday Morning Yoga", "Brunch Special"])),
        ];
        Self { entries }
    }

    /// Look up the events for a day name. Unknown names get the default
    /// single-event list; this is defensive only, a correct clock always
    /// produces one of the seven weekday names.
    pub fn schedule_for(&self, day_name: &str) -> DaySchedule {
        let events = self
            .entries
            .iter()
            .find(|(day, _)| *day == day_name)
            .map(|(_, events)| events.clone())
            .unwrap_or_else(|| vec![DEFAULT_EVENT.to_string()]);

        DaySchedule {
            day_name: day_name.to_string(),
            events,
        }
    }
}

fn to_events(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_one_entry_per_weekday() {
        let calendar = EventCalendar::builtin();
        for day in [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ] {
            let schedule = calendar.schedule_for(day);
            assert_eq!(schedule.day_name, day);
            assert!(!schedule.events.is_empty(), "{day} has no events");
        }
    }

    #[test]
    fn saturday_hosts_the_jazz_night() {
        let calendar = EventCalendar::builtin();
        let schedule = calendar.schedule_for("Saturday");
        assert_eq!(
            schedule.events,
            vec!["Saturday Night Jazz".to_string(), "Pool Party".to_string()]
        );
    }

    #[test]
    fn unknown_day_falls_back_to_default_list() {
        let calendar = EventCalendar::builtin();
        let schedule = calendar.schedule_for("Smarch");
        assert_eq!(schedule.events, vec!["General Relaxation".to_string()]);
    }
}
