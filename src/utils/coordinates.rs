use crate::utils::constants::{MAP_BOTTOM, MAP_LEFT, MAP_RIGHT, MAP_TOP};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Latitude/longitude rectangle covered by the full base map image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_extent"))]
pub struct BoundingBox {
    #[validate(range(min = -90.0, max = 90.0))]
    pub top: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub bottom: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub left: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub right: f64,
}

fn validate_extent(bbox: &BoundingBox) -> std::result::Result<(), ValidationError> {
    if bbox.top <= bbox.bottom {
        return Err(ValidationError::new("top_not_above_bottom"));
    }
    if bbox.right <= bbox.left {
        return Err(ValidationError::new("right_not_beyond_left"));
    }
    Ok(())
}

impl BoundingBox {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Map a (latitude, longitude) pair to map-relative (x, y).
    ///
    /// Inside the box both components fall in [0, 1]; nothing is clamped, so
    /// points outside the box map outside that range.
    ///
    /// # Examples
    /// ```
    /// use cyclone_heatmap::utils::coordinates::BoundingBox;
    ///
    /// let bbox = BoundingBox::default();
    /// let (x, y) = bbox.convert_lat_long(bbox.bottom, bbox.left);
    /// assert_eq!((x, y), (0.0, 0.0));
    /// ```
    pub fn convert_lat_long(&self, lat: f64, long: f64) -> (f64, f64) {
        let x = (long - self.left) / (self.right - self.left);
        let y = (lat - self.bottom) / (self.top - self.bottom);
        (x, y)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(MAP_TOP, MAP_BOTTOM, MAP_LEFT, MAP_RIGHT)
    }
}

/// Convert a coordinate pair against the default base map extent
pub fn convert_lat_long(lat: f64, long: f64) -> (f64, f64) {
    BoundingBox::default().convert_lat_long(lat, long)
}
