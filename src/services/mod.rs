// Data-access shims: one round trip to the store per call, uniform failures.
pub mod activities;
pub mod journal;

/// Trim and lowercase a filter value. Blank values mean "no filter".
pub fn normalize_filter(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}
