//! Encoder input for a single structure.
use ndarray::{s, Array1, Array3, Array4, Axis};

/// Coordinates, per-residue confidence and padding mask for a batch of one.
///
/// The coordinates are framed by one `inf` row at each end (the BOS / EOS
/// slots). Rows whose first atom is NaN are padding; confidence is `1` for
/// fully resolved rows, `0` for partially resolved rows and `-1` for padding.
#[derive(Debug, Clone)]
pub struct CoordBatch {
    /// `[1, L + 2, 3, 3]`
    pub coords: Array4<f32>,
    /// `[1, L + 2]`
    pub confidence: ndarray::Array2<f32>,
    /// `[1, L + 2]`
    pub padding_mask: ndarray::Array2<bool>,
}

impl CoordBatch {
    pub fn new(coords: &Array3<f32>) -> Self {
        let n = coords.shape()[0];
        let mut framed = Array3::<f32>::from_elem((n + 2, 3, 3), f32::INFINITY);
        framed.slice_mut(s![1..n + 1, .., ..]).assign(coords);

        let padding_mask: Array1<bool> = framed
            .axis_iter(Axis(0))
            .map(|row| row[[0, 0]].is_nan())
            .collect();
        let confidence: Array1<f32> = framed
            .axis_iter(Axis(0))
            .enumerate()
            .map(|(i, row)| {
                let raw = if i == 0 || i == n + 1 { -1.0 } else { 1.0 };
                let resolved = if row.iter().all(|v| v.is_finite()) { 1.0 } else { 0.0 };
                let padding = if padding_mask[i] { 1.0 } else { 0.0 };
                raw * resolved - padding
            })
            .collect();

        Self {
            coords: framed.insert_axis(Axis(0)),
            confidence: confidence.insert_axis(Axis(0)),
            padding_mask: padding_mask.insert_axis(Axis(0)),
        }
    }
    /// Number of framed rows, `L + 2`.
    pub fn len(&self) -> usize {
        self.coords.shape()[1]
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing() {
        let mut coords = Array3::<f32>::zeros((4, 3, 3));
        // padding row
        coords.slice_mut(s![1, .., ..]).fill(f32::NAN);
        // missing C atom
        coords[[3, 2, 0]] = f32::NAN;

        let batch = CoordBatch::new(&coords);
        assert_eq!(batch.len(), 6);
        assert_eq!(batch.coords.shape(), &[1, 6, 3, 3]);
        assert!(batch.coords[[0, 0, 0, 0]].is_infinite());
        assert!(batch.coords[[0, 5, 2, 2]].is_infinite());
        assert_eq!(batch.coords[[0, 1, 0, 0]], 0.0);

        let mask: Vec<bool> = batch.padding_mask.iter().copied().collect();
        assert_eq!(mask, vec![false, false, true, false, false, false]);

        let confidence: Vec<f32> = batch.confidence.iter().copied().collect();
        assert_eq!(confidence, vec![0.0, 1.0, -1.0, 1.0, 0.0, 0.0]);
    }
}
