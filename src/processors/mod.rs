pub mod density_grid;
pub mod rescale;

pub use density_grid::{DensityGrid, DensityGridBuilder};
pub use rescale::{normalize_unit, zoom_cubic};
