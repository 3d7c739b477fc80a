use crate::error::{ProcessingError, Result};
use crate::processors::rescale::{normalize_unit, zoom_cubic};
use crate::processors::DensityGrid;
use crate::utils::constants::HEAT_CHANNEL_WEIGHT;
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use ndarray::{Array2, ArrayView2};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Range of the normalised heat layer that went into a composite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatRange {
    pub min: f64,
    pub max: f64,
}

impl HeatRange {
    fn of(layer: &Array2<f64>) -> Self {
        let min = layer.iter().copied().fold(f64::INFINITY, f64::min);
        let max = layer.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { min, max }
    }
}

/// Brightness of each pixel as the HSV value channel, max(r, g, b), indexed `[row][column]`
pub fn greymap_from_rgb(image: &RgbImage) -> Array2<f64> {
    let (width, height) = image.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        let Rgb([r, g, b]) = *image.get_pixel(col as u32, row as u32);
        r.max(g).max(b) as f64
    })
}

/// Float to 8-bit channel, truncating like an unsigned cast
fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Blend a [0, 1] heat layer into a greyscale base map.
///
/// red = grey/2 + 127 heat, green = grey/2 + 127 - 127 heat, blue = grey/2
pub fn compose_overlay(heat: ArrayView2<f64>, greymap: ArrayView2<f64>) -> Result<RgbImage> {
    if heat.dim() != greymap.dim() {
        return Err(ProcessingError::DimensionMismatch {
            expected: greymap.dim(),
            found: heat.dim(),
        });
    }

    let (rows, cols) = greymap.dim();
    Ok(ImageBuffer::from_fn(cols as u32, rows as u32, |col, row| {
        let index = [row as usize, col as usize];
        let base = greymap[index] / 2.0;
        let weight = HEAT_CHANNEL_WEIGHT * heat[index];
        Rgb([
            to_channel(base + weight),
            to_channel(base + HEAT_CHANNEL_WEIGHT - weight),
            to_channel(base),
        ])
    }))
}

pub struct HeatmapWriter;

impl HeatmapWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn load_base_map(&self, path: &Path) -> Result<RgbImage> {
        let file = File::open(path)?;
        let format = ImageFormat::from_path(path)?;
        Ok(image::load(BufReader::new(file), format)?.to_rgb8())
    }

    /// Rescale the grid north-up onto `shape` (rows, columns) and normalise to [0, 1]
    pub fn heat_layer(&self, grid: &DensityGrid, shape: (usize, usize)) -> Array2<f64> {
        let zoomed = zoom_cubic(grid.north_up().view(), shape);
        normalize_unit(zoomed.view())
    }

    pub fn render(&self, grid: &DensityGrid, base_map: &RgbImage) -> Result<RgbImage> {
        let greymap = greymap_from_rgb(base_map);
        let heat = self.heat_layer(grid, greymap.dim());
        compose_overlay(heat.view(), greymap.view())
    }

    /// Composite the grid over the base map image and save it as PNG
    pub fn write_heatmap(
        &self,
        grid: &DensityGrid,
        base_map_path: &Path,
        output_path: &Path,
    ) -> Result<HeatRange> {
        let base_map = self.load_base_map(base_map_path)?;
        let greymap = greymap_from_rgb(&base_map);

        let heat = self.heat_layer(grid, greymap.dim());
        let range = HeatRange::of(&heat);

        let composite = compose_overlay(heat.view(), greymap.view())?;
        composite.save_with_format(output_path, ImageFormat::Png)?;

        info!(
            output = %output_path.display(),
            width = composite.width(),
            height = composite.height(),
            heat_min = range.min,
            heat_max = range.max,
            "Wrote heat map"
        );

        Ok(range)
    }
}

impl Default for HeatmapWriter {
    fn default() -> Self {
        Self::new()
    }
}
