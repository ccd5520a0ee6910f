use std::collections::BTreeSet;

/// A named bundle of preference tags used to personalize recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestProfile {
    pub display_name: String,
    /// Preference tags, e.g. "Music", "Food". A set: membership is what
    /// matters, and the ordered view is only for display.
    pub preferences: BTreeSet<String>,
}

impl GuestProfile {
    pub fn new(display_name: &str, preferences: &[&str]) -> Self {
        Self {
            display_name: display_name.to_string(),
            preferences: preferences.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

/// The fixed registry of selectable guest profiles. Compiled-in constants,
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct GuestRegistry {
    profiles: Vec<GuestProfile>,
}

impl GuestRegistry {
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                GuestProfile::new("Alice (Business Traveler)", &["Business", "Quiet"]),
                GuestProfile::new("Bob (Music Lover)", &["Music", "Party"]),
                GuestProfile::new("Charlie (Wellness Guru)", &["Wellness", "Nature"]),
                GuestProfile::new("Diana (Foodie)", &["Food", "Drinks"]),
            ],
        }
    }

    pub fn get(&self, display_name: &str) -> Option<&GuestProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.display_name == display_name)
    }

    pub fn profiles(&self) -> &[GuestProfile] {
        &self.profiles
    }
}
