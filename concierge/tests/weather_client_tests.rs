//! Weather client behavior against a mocked Open-Meteo upstream: every
//! failure mode must collapse to `CurrentWeather::Unavailable`, never a
//! partial snapshot or an error surfaced to the caller.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use concierge::config::{LocationConfig, WeatherConfig};
use concierge::models::CurrentWeather;
use concierge::weather::WeatherClient;

fn location() -> LocationConfig {
    LocationConfig {
        name: "Amravati".to_string(),
        latitude: 20.93,
        longitude: 77.75,
    }
}

fn client_for(server: &MockServer, timeout_secs: u64) -> WeatherClient {
    let config = WeatherConfig {
        base_url: format!("{}/v1/forecast", server.uri()),
        timeout_secs,
    };
    WeatherClient::new(&config, &location()).expect("weather client should build")
}

fn forecast_body() -> serde_json::Value {
    json!({
        "latitude": 20.93,
        "longitude": 77.75,
        "current_weather": {
            "temperature": 31.4,
            "weathercode": 2,
            "windspeed": 7.2,
            "winddirection": 180,
            "is_day": 1
        }
    })
}

#[tokio::test]
async fn successful_fetch_yields_full_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "20.93"))
        .and(query_param("longitude", "77.75"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let weather = client_for(&server, 5).current().await;

    match weather {
        CurrentWeather::Available(snapshot) => {
            assert_eq!(snapshot.temperature, 31.4);
            assert_eq!(snapshot.weather_code, 2);
            assert_eq!(snapshot.wind_speed, 7.2);
        }
        CurrentWeather::Unavailable => panic!("expected an available snapshot"),
    }
}

#[tokio::test]
async fn server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let weather = client_for(&server, 5).current().await;
    assert_eq!(weather, CurrentWeather::Unavailable);
}

#[tokio::test]
async fn malformed_payload_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let weather = client_for(&server, 5).current().await;
    assert_eq!(weather, CurrentWeather::Unavailable);
}

#[tokio::test]
async fn missing_current_weather_field_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "latitude": 20.93 })),
        )
        .mount(&server)
        .await;

    let weather = client_for(&server, 5).current().await;
    assert_eq!(weather, CurrentWeather::Unavailable);
}

#[tokio::test]
async fn partial_current_weather_is_unavailable() {
    // A snapshot missing windspeed must never surface half-filled.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": { "temperature": 25.0, "weathercode": 1 }
        })))
        .mount(&server)
        .await;

    let weather = client_for(&server, 5).current().await;
    assert_eq!(weather, CurrentWeather::Unavailable);
}

#[tokio::test]
async fn timeout_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let weather = client_for(&server, 1).current().await;
    assert_eq!(weather, CurrentWeather::Unavailable);
}
