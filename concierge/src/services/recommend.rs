//! The recommendation engine: a pure function from (weather, events,
//! preferences) to an ordered list of amenity offers.
//!
//! Rules are evaluated in a fixed order — rain, heat, event match, then a
//! preference fallback when nothing else fired — and the output sequence
//! preserves that order. Total over all inputs: the only failure-shaped
//! outcome is the System Error offer produced for unavailable weather.

use std::collections::BTreeSet;

use crate::models::{CurrentWeather, Recommendation};

const RAIN_CODE_THRESHOLD: u32 = 50;
const HEAT_TEMP_THRESHOLD: f64 = 30.0;

/// Event name fragment that pairs with the "Music" preference.
const JAZZ_EVENT_FRAGMENT: &str = "Saturday Night Jazz";

/// Derive the ordered amenity offers for one guest.
///
/// Never returns an empty list: unavailable weather short-circuits to a
/// single System Error entry, and if no weather or event rule fires the
/// preference fallback contributes exactly one entry.
pub fn derive_recommendations(
    weather: &CurrentWeather,
    events: &[String],
    preferences: &BTreeSet<String>,
) -> Vec<Recommendation> {
    let snapshot = match weather {
        CurrentWeather::Available(snapshot) => snapshot,
        CurrentWeather::Unavailable => {
            return vec![Recommendation::new(
                "System Error",
                "Could not retrieve weather data for recommendations.",
            )];
        }
    };

    let mut recommendations = Vec::new();

    // Rain: strict threshold, code 50 itself does not count.
    if snapshot.weather_code > RAIN_CODE_THRESHOLD {
        recommendations.push(Recommendation::new(
            "Indoor Spa",
            "It's raining outside. Perfect for a relaxing spa day.",
        ));
        recommendations.push(Recommendation::new(
            "Warm Tea",
            "Stay cozy with our signature herbal tea.",
        ));
    }

    // Heat: strict threshold, 30°C itself does not count.
    if snapshot.temperature > HEAT_TEMP_THRESHOLD {
        recommendations.push(Recommendation::new(
            "Poolside Cooler",
            "It's hot! Enjoy a refreshing drink by the pool.",
        ));
        recommendations.push(Recommendation::new(
            "AC Room Upgrade",
            "Stay cool with a premium AC room.",
        ));
    }

    // Substring containment on purpose: multiple qualifying events yield
    // duplicate offers, and that duplication is part of the contract.
    for event in events {
        if event.contains(JAZZ_EVENT_FRAGMENT) && preferences.contains("Music") {
            recommendations.push(Recommendation::new(
                "VIP Jazz Table",
                "Since you love music, we saved you a spot for the Jazz night!",
            ));
        }
    }

    if recommendations.is_empty() {
        if preferences.contains("Food") {
            recommendations.push(Recommendation::new(
                "Chef's Special",
                "Try our local delicacies at the restaurant.",
            ));
        } else {
            recommendations.push(Recommendation::new(
                "Lounge Access",
                "Relax in our exclusive lounge area.",
            ));
        }
    }

    recommendations
}
