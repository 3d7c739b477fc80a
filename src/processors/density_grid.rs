use crate::error::Result;
use crate::models::ParsedRecord;
use crate::utils::constants::{EARTH_RADIUS_KM, GRID_SIZE};
use crate::utils::coordinates::BoundingBox;
use ndarray::{s, Array2};
use tracing::debug;

/// Occurrence counts on a GRID_SIZE x GRID_SIZE lattice, indexed `[x][y]`
/// where x is the longitude bucket and y the latitude bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    cells: Array2<f64>,
}

impl DensityGrid {
    pub fn new() -> Self {
        Self {
            cells: Array2::zeros((GRID_SIZE, GRID_SIZE)),
        }
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.cells[[x, y]]
    }

    pub fn total(&self) -> f64 {
        self.cells.sum()
    }

    pub fn non_zero_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0.0).count()
    }

    pub fn in_bounds(x: i64, y: i64) -> bool {
        let size = GRID_SIZE as i64;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Add one to cell (x, y). Returns false, leaving the grid untouched, when
    /// the cell lies outside the grid on either side.
    pub fn increment(&mut self, x: i64, y: i64) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.cells[[x as usize, y as usize]] += 1.0;
        true
    }

    /// Lay the grid out as an image: row 0 is the northern edge, column 0 the western edge.
    ///
    /// Zooming the `[x][y]` grid directly would put longitude along image rows. This
    /// layout deliberately departs from that so heat lands over the matching map pixels.
    pub fn north_up(&self) -> Array2<f64> {
        self.cells.t().slice(s![..;-1, ..]).to_owned()
    }
}

impl Default for DensityGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale a map-relative coordinate to a grid index, rounding half to even
pub fn scale_to_index(normalized: f64) -> f64 {
    (normalized * (GRID_SIZE - 1) as f64).round_ties_even()
}

/// Number of diagonal spread steps for a cyclone radius in kilometres.
///
/// This divides by the earth's radius rather than converting to cells, so only
/// very large radii spread at all.
pub fn spread_steps(radius_km: f64) -> i64 {
    let steps = (radius_km / EARTH_RADIUS_KM).round_ties_even();
    if steps.is_finite() && steps > 0.0 {
        steps as i64
    } else {
        0
    }
}

pub struct DensityGridBuilder {
    bounding_box: BoundingBox,
}

impl DensityGridBuilder {
    pub fn new() -> Self {
        Self {
            bounding_box: BoundingBox::default(),
        }
    }

    pub fn with_bounding_box(bounding_box: BoundingBox) -> Self {
        Self { bounding_box }
    }

    /// Grid cell for a position, `None` when it is not a finite number
    pub fn cell_index(&self, lat: f64, long: f64) -> Option<(i64, i64)> {
        let (x, y) = self.bounding_box.convert_lat_long(lat, long);
        let (x, y) = (scale_to_index(x), scale_to_index(y));
        (x.is_finite() && y.is_finite()).then_some((x as i64, y as i64))
    }

    /// Accumulate occurrence counts for records that all carry a position.
    ///
    /// A record without a radius adds one to its own cell. A record with a
    /// radius adds one to each of the four diagonal cells at every offset
    /// `0..spread_steps(radius)`, so offset 0 lands on the centre four times.
    /// Records centred off the grid are skipped and spread cells off the grid
    /// are dropped.
    pub fn build(&self, records: &[ParsedRecord]) -> Result<DensityGrid> {
        let mut grid = DensityGrid::new();
        let mut off_grid = 0usize;
        let mut clipped = 0usize;

        for record in records {
            let (lat, long) = record.require_position()?;

            let (x, y) = match self.cell_index(lat, long) {
                Some((x, y)) if DensityGrid::in_bounds(x, y) => (x, y),
                _ => {
                    off_grid += 1;
                    continue;
                }
            };

            match record.radius {
                None => {
                    grid.increment(x, y);
                }
                Some(radius) => {
                    // Beyond GRID_SIZE every diagonal cell is off the grid
                    let steps = spread_steps(radius).min(GRID_SIZE as i64);
                    for i in 0..steps {
                        for (cx, cy) in [(x + i, y - i), (x + i, y + i), (x - i, y + i), (x - i, y - i)] {
                            if !grid.increment(cx, cy) {
                                clipped += 1;
                            }
                        }
                    }
                }
            }
        }

        debug!(
            records = records.len(),
            off_grid,
            clipped,
            total = grid.total(),
            "Built density grid"
        );

        Ok(grid)
    }
}

impl Default for DensityGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}
