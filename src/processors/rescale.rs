use ndarray::{Array2, ArrayView2};

/// Keys cubic convolution coefficient
const CUBIC_A: f64 = -0.5;

fn cubic_weight(distance: f64) -> f64 {
    let x = distance.abs();
    if x <= 1.0 {
        (CUBIC_A + 2.0) * x.powi(3) - (CUBIC_A + 3.0) * x.powi(2) + 1.0
    } else if x < 2.0 {
        CUBIC_A * x.powi(3) - 5.0 * CUBIC_A * x.powi(2) + 8.0 * CUBIC_A * x - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

/// Source samples and weights contributing to one output sample
#[derive(Debug, Clone, Copy)]
struct Taps {
    indices: [usize; 4],
    weights: [f64; 4],
}

/// Output sample `o` reads input coordinate `o * (n_in - 1) / (n_out - 1)`,
/// so the first and last samples line up. Neighbours past an edge repeat the edge.
fn taps(n_in: usize, n_out: usize) -> Vec<Taps> {
    let scale = if n_out > 1 {
        (n_in - 1) as f64 / (n_out - 1) as f64
    } else {
        0.0
    };
    let last = n_in as isize - 1;

    (0..n_out)
        .map(|o| {
            let position = o as f64 * scale;
            let base = position.floor();
            let t = position - base;

            let mut indices = [0usize; 4];
            let mut weights = [0.0f64; 4];
            for k in 0..4 {
                let offset = k as isize - 1;
                indices[k] = (base as isize + offset).clamp(0, last) as usize;
                weights[k] = cubic_weight(t - offset as f64);
            }

            Taps { indices, weights }
        })
        .collect()
}

/// Resample a 2-D field to `shape` (rows, columns) with separable cubic convolution
pub fn zoom_cubic(input: ArrayView2<f64>, shape: (usize, usize)) -> Array2<f64> {
    let (rows_in, cols_in) = input.dim();
    let (rows_out, cols_out) = shape;

    if rows_in == 0 || cols_in == 0 {
        return Array2::zeros(shape);
    }

    let row_taps = taps(rows_in, rows_out);
    let col_taps = taps(cols_in, cols_out);

    let mut by_rows = Array2::<f64>::zeros((rows_out, cols_in));
    for (r, tap) in row_taps.iter().enumerate() {
        for c in 0..cols_in {
            by_rows[[r, c]] = tap
                .indices
                .iter()
                .zip(tap.weights.iter())
                .map(|(&i, &w)| w * input[[i, c]])
                .sum();
        }
    }

    let mut output = Array2::<f64>::zeros(shape);
    for r in 0..rows_out {
        for (c, tap) in col_taps.iter().enumerate() {
            output[[r, c]] = tap
                .indices
                .iter()
                .zip(tap.weights.iter())
                .map(|(&i, &w)| w * by_rows[[r, i]])
                .sum();
        }
    }

    output
}

/// Min-max scale a field into [0, 1].
///
/// A field with no spread (all zero, or any constant) maps to all zeros.
pub fn normalize_unit(input: ArrayView2<f64>) -> Array2<f64> {
    let min = input.iter().copied().fold(f64::INFINITY, f64::min);
    let shifted = input.mapv(|v| v - min);
    let max = shifted.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !max.is_finite() || max <= 0.0 {
        return Array2::zeros(input.dim());
    }

    shifted.mapv(|v| v / max)
}
