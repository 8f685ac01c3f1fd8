#[cfg(test)]
#[path = "../../tests/unit/utils/format_test.rs"]
mod format_test;

/// Formats a distance in kilometers to a human readable string: distances below one kilometer
/// are shown in whole meters (rounded up), others in kilometers with one decimal digit.
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1. { format!("{} m", (distance_km * 1000.).ceil()) } else { format!("{distance_km:.1} km") }
}
