use serde::{Deserialize, Serialize};

/// User preferences consumed by the solvers and annotation builders.
///
/// Persisted verbatim in the document's model-data bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub show_wall_lengths: bool,
    pub show_wall_angles: bool,
    pub show_only_small_wall_angles: bool,
    pub grid_size: f64,
    pub units: String,
    pub units_conversion_factor: f64,
    pub default_wall_thickness: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_wall_lengths: true,
            show_wall_angles: true,
            show_only_small_wall_angles: false,
            grid_size: 10.0,
            units: "cm".to_owned(),
            units_conversion_factor: 2.0,
            default_wall_thickness: 5.0,
        }
    }
}

impl Preferences {
    /// Proximity tolerance used when gathering walls around an intersection
    /// point: at least the grid size, never below 10 units.
    #[must_use]
    pub fn intersection_tolerance(&self) -> f64 {
        self.grid_size.max(10.0)
    }

    /// Formats a raw centerline length as a user-facing label in the
    /// configured units.
    #[must_use]
    pub fn format_length(&self, length: f64) -> String {
        format!("{:.2} {}", length * self.units_conversion_factor, self.units)
    }
}
