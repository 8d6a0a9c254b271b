use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::julia::errors::JuliaError;

pub const DEFAULT_WIDTH: u32 = 256;
pub const DEFAULT_HEIGHT: u32 = 256;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

pub const MIN_DIMENSION: u32 = 1;
pub const MAX_DIMENSION: u32 = 4096;
pub const MIN_ITERATIONS: u32 = 1;
pub const MAX_ITERATIONS: u32 = 10_000;

/// Everything one render needs. Immutable once built.
///
/// The escape radius is always [`DEFAULT_ESCAPE_RADIUS`]; callers that need a
/// different radius go through [`iterate`](crate::core::fractals::julia::algorithm::iterate)
/// directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParameters {
    region: ComplexRect,
    constant: Complex,
    size: ImageSize,
    max_iterations: u32,
    escape_radius: f64,
}

impl RenderParameters {
    /// Image dimensions are not range-checked here: a zero width or height
    /// is a valid, empty render.
    pub fn new(
        region: ComplexRect,
        constant: Complex,
        size: ImageSize,
        max_iterations: u32,
    ) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        if !constant.is_finite() {
            return Err(JuliaError::NonFiniteConstant(constant));
        }

        Ok(Self {
            region,
            constant,
            size,
            max_iterations,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        })
    }

    pub fn display_name(&self) -> &str {
        "Julia"
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}
