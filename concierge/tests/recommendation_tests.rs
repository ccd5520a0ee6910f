//! Properties of the pure recommendation engine: rule ordering, the
//! unavailable-weather short-circuit, fallback behavior, and the strict
//! comparison boundaries.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use concierge::models::{CurrentWeather, Recommendation, WeatherSnapshot};
use concierge::services::derive_recommendations;

fn weather(temperature: f64, weather_code: u32) -> CurrentWeather {
    CurrentWeather::Available(WeatherSnapshot {
        temperature,
        weather_code,
        wind_speed: 5.0,
    })
}

fn prefs(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

fn events(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn titles(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter().map(|rec| rec.title.as_str()).collect()
}

#[test]
fn rain_produces_spa_then_tea_first() {
    let recs = derive_recommendations(&weather(22.0, 61), &events(&[]), &prefs(&[]));
    assert_eq!(titles(&recs), vec!["Indoor Spa", "Warm Tea"]);
}

#[test]
fn heat_produces_cooler_then_upgrade_first() {
    let recs = derive_recommendations(&weather(35.0, 2), &events(&[]), &prefs(&[]));
    assert_eq!(titles(&recs), vec!["Poolside Cooler", "AC Room Upgrade"]);
}

#[test]
fn rain_rules_precede_heat_rules() {
    let recs = derive_recommendations(&weather(33.0, 80), &events(&[]), &prefs(&[]));
    assert_eq!(
        titles(&recs),
        vec!["Indoor Spa", "Warm Tea", "Poolside Cooler", "AC Room Upgrade"]
    );
}

#[test]
fn unavailable_weather_short_circuits_to_system_error() {
    let recs = derive_recommendations(
        &CurrentWeather::Unavailable,
        &events(&["Saturday Night Jazz"]),
        &prefs(&["Music", "Food"]),
    );
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "System Error");
}

#[test]
fn jazz_event_with_music_preference_books_the_vip_table() {
    let recs = derive_recommendations(
        &weather(25.0, 2),
        &events(&["Saturday Night Jazz", "Pool Party"]),
        &prefs(&["Music", "Party"]),
    );
    assert_eq!(titles(&recs), vec!["VIP Jazz Table"]);
}

#[test]
fn jazz_event_without_music_preference_falls_back() {
    let recs = derive_recommendations(
        &weather(25.0, 2),
        &events(&["Saturday Night Jazz"]),
        &prefs(&["Wellness"]),
    );
    assert_eq!(titles(&recs), vec!["Lounge Access"]);
}

#[test]
fn repeated_jazz_events_repeat_the_offer() {
    // Substring matching is literal and duplicates are preserved.
    let recs = derive_recommendations(
        &weather(25.0, 2),
        &events(&["Saturday Night Jazz", "Saturday Night Jazz (late set)"]),
        &prefs(&["Music"]),
    );
    assert_eq!(titles(&recs), vec!["VIP Jazz Table", "VIP Jazz Table"]);
}

#[test]
fn food_preference_gets_the_chefs_special_fallback() {
    let recs = derive_recommendations(
        &weather(25.0, 2),
        &events(&["Brunch Special"]),
        &prefs(&["Food", "Drinks"]),
    );
    assert_eq!(titles(&recs), vec!["Chef's Special"]);
}

#[test]
fn fallback_without_food_is_lounge_access() {
    let recs = derive_recommendations(&weather(25.0, 2), &events(&[]), &prefs(&[]));
    assert_eq!(titles(&recs), vec!["Lounge Access"]);
}

#[test]
fn fallback_never_fires_alongside_other_rules() {
    let recs = derive_recommendations(&weather(35.0, 2), &events(&[]), &prefs(&["Food"]));
    assert_eq!(titles(&recs), vec!["Poolside Cooler", "AC Room Upgrade"]);
}

#[test]
fn output_is_never_empty() {
    let recs = derive_recommendations(&weather(20.0, 0), &events(&[]), &prefs(&[]));
    assert!(!recs.is_empty());
}

#[test]
fn identical_inputs_yield_identical_outputs() {
    let w = weather(31.0, 55);
    let ev = events(&["Saturday Night Jazz"]);
    let p = prefs(&["Music"]);

    let first = derive_recommendations(&w, &ev, &p);
    let second = derive_recommendations(&w, &ev, &p);
    assert_eq!(first, second);
}

#[test]
fn thresholds_are_strict() {
    // Code 50 is not rain, temperature 30 is not heat.
    let recs = derive_recommendations(&weather(30.0, 50), &events(&[]), &prefs(&[]));
    assert_eq!(titles(&recs), vec!["Lounge Access"]);

    let recs = derive_recommendations(&weather(30.01, 51), &events(&[]), &prefs(&[]));
    assert_eq!(
        titles(&recs),
        vec!["Indoor Spa", "Warm Tea", "Poolside Cooler", "AC Room Upgrade"]
    );
}

#[test]
fn hot_jazz_saturday_end_to_end_example() {
    let recs = derive_recommendations(
        &weather(32.0, 10),
        &events(&["Saturday Night Jazz"]),
        &prefs(&["Music"]),
    );
    assert_eq!(
        titles(&recs),
        vec!["Poolside Cooler", "AC Room Upgrade", "VIP Jazz Table"]
    );
}
