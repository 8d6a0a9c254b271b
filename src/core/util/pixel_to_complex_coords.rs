use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error("point {point} is outside the {size} image")]
    PointOutsideImage { point: Point, size: ImageSize },
}

/// Maps a pixel to the complex plane, sampling each axis as a half-open interval.
///
/// The divisor is the pixel count, so `(0, 0)` lands exactly on `region.min()`
/// and the last row and column stop one pixel-step short of `region.max()`.
pub fn pixel_to_complex_coords(
    pixel: Point,
    size: ImageSize,
    region: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !size.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideImage { point: pixel, size });
    }

    Ok(map_pixel(pixel, size, region))
}

/// Unchecked mapping for the render loops, which only visit in-bounds pixels.
#[inline]
pub(crate) fn map_pixel(pixel: Point, size: ImageSize, region: ComplexRect) -> Complex {
    let min = region.min();
    let real = min.real + region.width() * f64::from(pixel.x) / f64::from(size.width());
    let imag = min.imag + region.height() * f64::from(pixel.y) / f64::from(size.height());

    Complex { real, imag }
}
