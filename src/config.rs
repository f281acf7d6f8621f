//! Runtime settings read from `PHOTOGRID_*` environment variables.
//!
//! Missing or malformed values fall back to the defaults below.

const DEFAULT_THUMB_MAX_DP: f32 = 200.0;
const DEFAULT_DENSITY: f32 = 1.0;
const DEFAULT_GRID_MIN_CELL_DP: f32 = 128.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Longer-edge cap for grid thumbnails, in dp.
    pub thumb_max_dp: f32,
    /// Pixels per dp.
    pub density: f32,
    /// Minimum cell width of the adaptive grid, in dp.
    pub grid_min_cell_dp: f32,
    /// Scan subdirectories too.
    pub recursive: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumb_max_dp: DEFAULT_THUMB_MAX_DP,
            density: DEFAULT_DENSITY,
            grid_min_cell_dp: DEFAULT_GRID_MIN_CELL_DP,
            recursive: false,
        }
    }
}

impl GalleryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let positive = |key: &str, default: f32| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(default)
        };

        Self {
            thumb_max_dp: positive("PHOTOGRID_THUMB_MAX_DP", DEFAULT_THUMB_MAX_DP),
            density: positive("PHOTOGRID_DENSITY", DEFAULT_DENSITY),
            grid_min_cell_dp: positive("PHOTOGRID_GRID_MIN_CELL_DP", DEFAULT_GRID_MIN_CELL_DP),
            recursive: lookup("PHOTOGRID_RECURSIVE")
                .map(|v| {
                    matches!(
                        v.trim().to_ascii_lowercase().as_str(),
                        "1" | "true" | "yes" | "on"
                    )
                })
                .unwrap_or(false),
        }
    }

    /// Thumbnail cap in physical pixels, as handed to the scaler.
    pub fn thumb_max_px(&self) -> i32 {
        ((self.thumb_max_dp * self.density) as i32).max(1)
    }

    /// Column count of the adaptive grid for a given width in pixels.
    pub fn columns_for(&self, width_px: f32) -> usize {
        let cell_px = self.grid_min_cell_dp * self.density;
        ((width_px / cell_px) as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> GalleryConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GalleryConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.thumb_max_px(), 200);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("PHOTOGRID_THUMB_MAX_DP", "150"),
            ("PHOTOGRID_DENSITY", "2.5"),
            ("PHOTOGRID_RECURSIVE", "Yes"),
        ]);
        assert_eq!(config.thumb_max_px(), 375);
        assert!(config.recursive);
    }

    #[test]
    fn test_invalid_values_use_defaults() {
        let config = config_from(&[
            ("PHOTOGRID_THUMB_MAX_DP", "-10"),
            ("PHOTOGRID_DENSITY", "abc"),
            ("PHOTOGRID_GRID_MIN_CELL_DP", "0"),
            ("PHOTOGRID_RECURSIVE", "maybe"),
        ]);
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_columns_for() {
        let config = GalleryConfig::default();
        assert_eq!(config.columns_for(1080.0), 8);
        assert_eq!(config.columns_for(100.0), 1);

        let dense = GalleryConfig {
            density: 3.0,
            ..Default::default()
        };
        assert_eq!(dense.columns_for(1080.0), 2);
    }
}
