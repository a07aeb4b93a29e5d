//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current conditions and the five-day, three-hourly forecast,
//! mapped straight into the domain model.

pub mod client;
pub mod models;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
