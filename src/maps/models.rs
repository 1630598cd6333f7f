// src/maps/models.rs
#![allow(dead_code)]
use serde::{Deserialize, Serialize};

use crate::utils::error::ExtractError;

// Valid WGS84 coordinate ranges, in degrees
pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

pub fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && (LATITUDE_MIN..=LATITUDE_MAX).contains(&value)
}

pub fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && (LONGITUDE_MIN..=LONGITUDE_MAX).contains(&value)
}

/// A pinned (latitude, longitude) pair recovered from a share URL.
///
/// Both values keep the exact substrings found in the URL; callers that need
/// numbers go through `as_degrees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinatePair {
    /// Numeric view of the pair, if both fields parse as decimals.
    pub fn as_degrees(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.parse::<f64>().ok()?;
        let lng = self.longitude.parse::<f64>().ok()?;
        Some((lat, lng))
    }
}

/// One processed URL in a batch run.
///
/// Latitude and longitude are either both present or both absent; the
/// constructors keep it that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub url: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub error: Option<String>,
}

impl ExtractionRecord {
    pub fn success(url: &str, pair: CoordinatePair) -> Self {
        Self {
            url: url.to_string(),
            latitude: Some(pair.latitude),
            longitude: Some(pair.longitude),
            error: None,
        }
    }

    pub fn failure(url: &str, error: &ExtractError) -> Self {
        Self {
            url: url.to_string(),
            latitude: None,
            longitude: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
