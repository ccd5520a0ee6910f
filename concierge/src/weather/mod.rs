mod client;

pub use client::WeatherClient;
