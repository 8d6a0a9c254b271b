use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Per-pixel computation driven by the generate_fractal strategies.
///
/// `compute` must be a pure function of the pixel so that every strategy
/// produces the same buffer regardless of how rows are scheduled.
pub trait FractalAlgorithm {
    type Sample: Copy + Default + Send;

    fn image_size(&self) -> ImageSize;

    fn compute(&self, pixel: Point) -> Self::Sample;
}
