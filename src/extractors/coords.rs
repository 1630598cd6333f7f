// src/extractors/coords.rs

// --- Imports ---
use crate::maps::models::{self, CoordinatePair};
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
// Share URLs carry the pinned location after a hex feature ID, e.g.
// "...!1s0x808586deffffffc3:0xcded139783705509!8m2!3d37.7749!4d-122.4194..."
// A URL may contain several ":0x" feature IDs; the coordinate block follows
// the last one.
const FEATURE_MARKER: &str = ":0x";
const LATITUDE_TAG: &str = "!3d";

// --- Regex Patterns (Lazy Static) ---
// Captures the "!3d<lat>!4d<lng>" field pair in one pass. The "4d" tag is
// matched literally rather than skipped as a fixed-width prefix, so a segment
// with a latitude but no longitude field fails cleanly instead of slicing
// past the end of the last field.
static COORD_FIELDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!3d(-?[0-9]+(?:\.[0-9]+)?)!4d(-?[0-9]+(?:\.[0-9]+)?)")
        .expect("Failed to compile COORD_FIELDS_RE")
});

// --- Main Extractor Structure ---
pub struct CoordinateExtractor;

impl CoordinateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the pinned (latitude, longitude) pair from a share URL.
    ///
    /// Values are returned verbatim as they appear in the URL, after checking
    /// that both parse as finite decimals within WGS84 range.
    pub fn extract(&self, url: &str) -> Result<CoordinatePair, ExtractError> {
        tracing::debug!("Attempting coordinate extraction from URL ({} bytes)", url.len());

        // Only the segment after the last feature marker is considered.
        let marker = url.rfind(FEATURE_MARKER).ok_or(ExtractError::MarkerNotFound)?;
        let segment = &url[marker + FEATURE_MARKER.len()..];

        if !segment.contains(LATITUDE_TAG) {
            return Err(ExtractError::LatitudeFieldNotFound);
        }

        let caps = COORD_FIELDS_RE
            .captures(segment)
            .ok_or(ExtractError::LongitudeFieldNotFound)?;

        let latitude = caps[1].to_string();
        let longitude = caps[2].to_string();

        let lat: f64 = latitude
            .parse()
            .map_err(|_| ExtractError::MalformedCoordinate(latitude.clone()))?;
        let lng: f64 = longitude
            .parse()
            .map_err(|_| ExtractError::MalformedCoordinate(longitude.clone()))?;

        if !models::is_valid_latitude(lat) {
            return Err(ExtractError::OutOfRange(format!("latitude {}", latitude)));
        }
        if !models::is_valid_longitude(lng) {
            return Err(ExtractError::OutOfRange(format!("longitude {}", longitude)));
        }

        tracing::debug!("Extracted coordinates: {}, {}", latitude, longitude);
        Ok(CoordinatePair { latitude, longitude })
    }
}

/// Form-field contract: both values on success, neither on any failure.
/// Never panics on malformed input.
pub fn extract_coordinates(url: &str) -> (Option<String>, Option<String>) {
    match CoordinateExtractor::new().extract(url) {
        Ok(pair) => (Some(pair.latitude), Some(pair.longitude)),
        Err(e) => {
            tracing::debug!("Coordinate extraction failed: {}", e);
            (None, None)
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_URL: &str = "https://www.google.com/maps/place/Golden+Gate+Bridge/@37.8199,-122.4786,17z/data=!3m1!4b1!4m6!3m5!1s0x808586deffffffc3:0xcded139783705509!8m2!3d37.7749!4d-122.4194!16zL20vMDNjdjc";

    #[test]
    fn test_extracts_sample_share_url() {
        let extractor = CoordinateExtractor::new();
        let pair = extractor.extract(SAMPLE_URL).expect("extraction failed");
        assert_eq!(pair.latitude, "37.7749");
        assert_eq!(pair.longitude, "-122.4194");
    }

    #[test]
    fn test_no_feature_marker() {
        let extractor = CoordinateExtractor::new();
        let result = extractor.extract("https://www.google.com/maps/place/somewhere");
        assert!(matches!(result, Err(ExtractError::MarkerNotFound)));
        assert_eq!(
            extract_coordinates("https://www.google.com/maps/place/somewhere"),
            (None, None)
        );
    }

    #[test]
    fn test_marker_without_latitude_field() {
        let extractor = CoordinateExtractor::new();
        let result = extractor.extract("https://maps.example/data=!1s0xabc:0xdef!8m2!4d-122.4");
        assert!(matches!(result, Err(ExtractError::LatitudeFieldNotFound)));
    }

    #[test]
    fn test_latitude_without_longitude_field() {
        let extractor = CoordinateExtractor::new();

        // Latitude is the last field in the URL
        let result = extractor.extract("https://maps.example/data=!1s0xabc:0xdef!8m2!3d37.7749");
        assert!(matches!(result, Err(ExtractError::LongitudeFieldNotFound)));

        // A field follows the latitude, but it is not a longitude field
        let result = extractor.extract("https://maps.example/data=!1s0xabc:0xdef!8m2!3d37.7749!16zabc");
        assert!(matches!(result, Err(ExtractError::LongitudeFieldNotFound)));
    }

    #[test]
    fn test_only_segment_after_last_marker_is_considered() {
        // Coordinates precede the last feature marker: not found
        let url = "https://maps.example/data=!1s0x111:0x222!3d10.0!4d20.0!5s:0x333";
        assert_eq!(extract_coordinates(url), (None, None));

        // Coordinates follow the last feature marker: found
        let url = "https://maps.example/data=!1s0x111:0x222!9x9!1s0x444:0x555!8m2!3d1.5!4d2.5";
        assert_eq!(
            extract_coordinates(url),
            (Some("1.5".to_string()), Some("2.5".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let extractor = CoordinateExtractor::new();

        let result = extractor.extract("https://maps.example/:0xabc!3d95.0!4d10.0");
        assert!(matches!(result, Err(ExtractError::OutOfRange(_))));

        let result = extractor.extract("https://maps.example/:0xabc!3d45.0!4d-190.5");
        assert!(matches!(result, Err(ExtractError::OutOfRange(_))));
    }

    #[test]
    fn test_values_returned_verbatim() {
        // Trailing zeros and integer forms survive; nothing is reformatted
        let (lat, lng) = extract_coordinates("https://maps.example/:0xabc!3d37.77490000!4d-122");
        assert_eq!(lat.as_deref(), Some("37.77490000"));
        assert_eq!(lng.as_deref(), Some("-122"));
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let first = extract_coordinates(SAMPLE_URL);
        let second = extract_coordinates(SAMPLE_URL);
        assert_eq!(first, second);
    }

    #[test]
    fn test_garbage_input_never_panics() {
        for input in ["", ":0x", ":0x!3d", "!3d!4d", ":0x!3d!4d", "::0x0x!3d.!4d.", ":0x\u{00e9}!3d1!4d2"] {
            let _ = extract_coordinates(input);
        }
    }
}
