//! Square two-dimensional DCT-II with orthonormal scaling and its inverse.
//!
//! Blocks are row-major slices of `size * size` values.

/// precomputed cosine basis for one block size
#[derive(Debug, Clone)]
pub struct DctPlan {
    size: usize,
    /// `basis[u * size + x] = C(u) * cos((2x + 1) * u * PI / (2 * size))`
    basis: Vec<f64>,
}

impl DctPlan {
    pub fn new(size: usize) -> Self {
        let n = size as f64;
        let mut basis = vec![0.0f64; size * size];
        for u in 0..size {
            let norm = if u == 0 { (1.0 / n).sqrt() } else { (2.0 / n).sqrt() };
            for x in 0..size {
                basis[u * size + x] =
                    norm * ((2 * x + 1) as f64 * u as f64 * std::f64::consts::PI / (2.0 * n)).cos();
            }
        }

        Self { size, basis }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// pixel values → coefficients
    pub fn forward(&self, block: &[f64]) -> Vec<f64> {
        let n = self.size;
        let c = &self.basis;

        // Separable: rows first, then columns.
        let mut temp = vec![0.0f64; n * n];
        for row in 0..n {
            for u in 0..n {
                temp[row * n + u] = (0..n).map(|x| block[row * n + x] * c[u * n + x]).sum();
            }
        }

        let mut coeffs = vec![0.0f64; n * n];
        for col in 0..n {
            for v in 0..n {
                coeffs[v * n + col] = (0..n).map(|y| temp[y * n + col] * c[v * n + y]).sum();
            }
        }

        coeffs
    }

    /// coefficients → pixel values
    pub fn inverse(&self, coeffs: &[f64]) -> Vec<f64> {
        let n = self.size;
        let c = &self.basis;

        let mut temp = vec![0.0f64; n * n];
        for v in 0..n {
            for x in 0..n {
                temp[v * n + x] = (0..n).map(|u| coeffs[v * n + u] * c[u * n + x]).sum();
            }
        }

        let mut pixels = vec![0.0f64; n * n];
        for y in 0..n {
            for x in 0..n {
                pixels[y * n + x] = (0..n).map(|v| temp[v * n + x] * c[v * n + y]).sum();
            }
        }

        pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(left: &[f64], right: &[f64]) {
        assert_eq!(left.len(), right.len());
        for (i, (l, r)) in left.iter().zip(right).enumerate() {
            assert!((l - r).abs() < 1e-9, "value {i} differs: {l} vs {r}");
        }
    }

    #[test]
    fn should_put_a_flat_block_into_the_dc_coefficient() {
        let plan = DctPlan::new(8);
        let coeffs = plan.forward(&[100.0; 64]);

        // orthonormal scaling: DC = mean * size
        assert!((coeffs[0] - 800.0).abs() < 1e-9);
        assert!(coeffs[1..].iter().all(|c| c.abs() < 1e-9));
    }

    #[test]
    fn should_invert_the_forward_transform() {
        for size in [1, 2, 3, 8, 16] {
            let plan = DctPlan::new(size);
            let block: Vec<f64> = (0..size * size).map(|i| ((i * 37) % 256) as f64).collect();
            assert_close(&plan.inverse(&plan.forward(&block)), &block);
        }
    }

    #[test]
    fn should_map_a_checkerboard_to_the_highest_frequency() {
        let plan = DctPlan::new(2);
        let coeffs = plan.forward(&[1.0, -1.0, -1.0, 1.0]);
        assert_close(&coeffs, &[0.0, 0.0, 0.0, 2.0]);
    }
}
