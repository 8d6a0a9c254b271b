use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect bounds must be finite: min ({min}) max ({max})")]
    NonFiniteBounds { min: Complex, max: Complex },
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Region of the complex plane sampled by a render.
///
/// `min` holds the lower real and imaginary bounds, `max` the upper ones.
/// Both axes are strictly increasing from `min` to `max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ComplexRectError::NonFiniteBounds { min, max });
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if min.real >= max.real || min.imag >= max.imag {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let min = Complex::new(-2.0, -1.5);
        let max = Complex::new(2.0, 1.5);

        let rect = ComplexRect::new(min, max).unwrap();

        assert_eq!(rect.min(), min);
        assert_eq!(rect.max(), max);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 3.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(0.0, 100.0));
        let negative_width = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(-100.0, 10.0));
        let zero_height = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, 0.0));
        let negative_height = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, -10.0));

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_width,
            Err(ComplexRectError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            zero_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
    }

    #[test]
    fn test_complex_rect_bounds_must_be_finite() {
        let min = Complex::new(f64::NAN, 0.0);
        let max = Complex::new(1.0, 1.0);

        assert!(matches!(
            ComplexRect::new(min, max),
            Err(ComplexRectError::NonFiniteBounds { .. })
        ));

        let max = Complex::new(f64::INFINITY, 1.0);

        assert!(matches!(
            ComplexRect::new(Complex::new(0.0, 0.0), max),
            Err(ComplexRectError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn test_invalid_size_error_message() {
        let err = ComplexRectError::InvalidSize {
            width: 0.0,
            height: 2.0,
        };

        assert_eq!(err.to_string(), "complex rect size must be positive: 0x2");
    }
}
