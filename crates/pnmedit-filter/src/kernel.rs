//! Convolution kernels
//!
//! A [`Kernel`] is a 3x3 weight matrix centered on its middle element.
//! [`FilterKind`] names the four kernels the editor offers.

use crate::{FilterError, FilterResult};
use std::fmt;
use std::str::FromStr;

/// Side length of every kernel
pub const KERNEL_SIZE: u32 = 3;

/// A 3x3 convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Kernel data (row-major order)
    data: [f64; 9],
}

impl Kernel {
    /// Create a kernel from a slice of nine values in row-major order.
    pub fn from_slice(data: &[f64]) -> FilterResult<Self> {
        let data: [f64; 9] = data.try_into().map_err(|_| {
            FilterError::InvalidKernel(format!("expected 9 values, got {}", data.len()))
        })?;
        if data.iter().any(|v| !v.is_finite()) {
            return Err(FilterError::InvalidKernel(
                "kernel values must be finite".to_string(),
            ));
        }
        Ok(Self { data })
    }

    /// Create a kernel from integer weights divided by `divisor`.
    fn weighted(weights: [i32; 9], divisor: f64) -> Self {
        Self {
            data: weights.map(|w| w as f64 / divisor),
        }
    }

    /// Edge detection (Laplacian with diagonals).
    pub fn edge() -> Self {
        Self::weighted([-1, -1, -1, -1, 8, -1, -1, -1, -1], 1.0)
    }

    /// Sharpening kernel.
    pub fn sharpen() -> Self {
        Self::weighted([0, -1, 0, -1, 5, -1, 0, -1, 0], 1.0)
    }

    /// Box (averaging) kernel.
    ///
    /// All values are `1/9`.
    pub fn box_blur() -> Self {
        Self::weighted([1; 9], 9.0)
    }

    /// 3x3 binomial approximation of a Gaussian, normalized by 16.
    pub fn gaussian_blur() -> Self {
        Self::weighted([1, 2, 1, 2, 4, 2, 1, 2, 1], 16.0)
    }

    /// Get the weight at (`x`, `y`), both in `0..3`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= KERNEL_SIZE || y >= KERNEL_SIZE {
            return None;
        }
        Some(self.data[(y * KERNEL_SIZE + x) as usize])
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// The named filters accepted by `APPLY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Edge,
    Sharpen,
    Blur,
    GaussianBlur,
}

impl FilterKind {
    /// All filters, in menu order
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Edge,
        FilterKind::Sharpen,
        FilterKind::Blur,
        FilterKind::GaussianBlur,
    ];

    /// Command-line name of the filter
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Edge => "EDGE",
            FilterKind::Sharpen => "SHARPEN",
            FilterKind::Blur => "BLUR",
            FilterKind::GaussianBlur => "GAUSSIAN_BLUR",
        }
    }

    /// The kernel this filter convolves with
    pub fn kernel(self) -> Kernel {
        match self {
            FilterKind::Edge => Kernel::edge(),
            FilterKind::Sharpen => Kernel::sharpen(),
            FilterKind::Blur => Kernel::box_blur(),
            FilterKind::GaussianBlur => Kernel::gaussian_blur(),
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Names match exactly, case included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let k = Kernel::from_slice(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(k.get(1, 1), Some(1.0));
        assert_eq!(k.get(3, 0), None);
        assert!(Kernel::from_slice(&[1.0; 4]).is_err());
        assert!(Kernel::from_slice(&[f64::NAN; 9]).is_err());
    }

    #[test]
    fn test_kernel_sums() {
        assert_eq!(Kernel::edge().sum(), 0.0);
        assert_eq!(Kernel::sharpen().sum(), 1.0);
        assert!((Kernel::box_blur().sum() - 1.0).abs() < 1e-12);
        assert_eq!(Kernel::gaussian_blur().sum(), 1.0);
        assert_eq!(Kernel::gaussian_blur().get(1, 1), Some(0.25));
    }

    #[test]
    fn test_filter_names() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.name().parse::<FilterKind>().unwrap(), kind);
        }
        assert!("blur".parse::<FilterKind>().is_err());
        assert!("GAUSSIAN".parse::<FilterKind>().is_err());
        assert!("EDGES".parse::<FilterKind>().is_err());
        assert!("".parse::<FilterKind>().is_err());
    }
}
