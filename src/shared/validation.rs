use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for reporter and subscriber phone numbers
    /// Optional leading "+", then 7 to 15 digits
    /// - Valid: "+260970000000", "0970000000"
    /// - Invalid: "+26097-000", "phone", "12345"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{7,15}$").unwrap();
}

/// Check that a `[lng, lat]` pair is finite and within WGS84 ranges
pub fn is_valid_lng_lat(lng: f64, lat: f64) -> bool {
    lng.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lng)
        && (-90.0..=90.0).contains(&lat)
}

/// Reject strings that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
