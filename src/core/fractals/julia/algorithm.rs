use std::f64::consts::LN_2;
use std::ops::ControlFlow;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::fractals::julia::params::RenderParameters;
use crate::core::util::pixel_to_complex_coords::map_pixel;

/// Escape-time iteration of `z -> z² + c` starting at `z0`.
///
/// Returns [`EscapeResult::Interior`] if `|z|` stays within `escape_radius` for
/// all `max_iterations` steps. Otherwise the result carries the smooth
/// (continuous) escape count, clamped to zero from below. The function is
/// total: non-finite magnitudes count as an immediate escape with value 0.
#[must_use]
pub fn iterate(z0: Complex, c: Complex, max_iterations: u32, escape_radius: f64) -> EscapeResult {
    let escape_radius_squared = escape_radius * escape_radius;

    let orbit = (0..max_iterations).try_fold(z0, |z, iteration| {
        let magnitude_squared = z.magnitude_squared();

        // NaN fails every comparison, so this has to come before the radius test.
        if !magnitude_squared.is_finite() {
            ControlFlow::Break(EscapeResult::Escaped { smooth: 0.0 })
        } else if magnitude_squared > escape_radius_squared {
            ControlFlow::Break(EscapeResult::Escaped {
                smooth: smooth_escape_value(iteration, magnitude_squared),
            })
        } else {
            ControlFlow::Continue(z * z + c)
        }
    });

    match orbit {
        ControlFlow::Break(result) => result,
        ControlFlow::Continue(_) => EscapeResult::Interior,
    }
}

/// `i + 1 - log2(ln|z|)`, valid only for `|z| > 1`.
///
/// A sub-unit escape radius lets points escape with `|z| <= 1`; those fall
/// back to the plain iteration count.
fn smooth_escape_value(iteration: u32, magnitude_squared: f64) -> f64 {
    let log_magnitude = magnitude_squared.ln() / 2.0;

    if log_magnitude > 0.0 {
        (f64::from(iteration) + 1.0 - log_magnitude.ln() / LN_2).max(0.0)
    } else {
        f64::from(iteration)
    }
}

/// Binds [`RenderParameters`] to the per-pixel [`FractalAlgorithm`] port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm<'a> {
    params: &'a RenderParameters,
}

impl<'a> JuliaAlgorithm<'a> {
    #[must_use]
    pub fn new(params: &'a RenderParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn escape_result(&self, pixel: Point) -> EscapeResult {
        let z0 = map_pixel(pixel, self.params.size(), self.params.region());

        iterate(
            z0,
            self.params.constant(),
            self.params.max_iterations(),
            self.params.escape_radius(),
        )
    }
}

impl FractalAlgorithm for JuliaAlgorithm<'_> {
    type Sample = f32;

    fn image_size(&self) -> ImageSize {
        self.params.size()
    }

    fn compute(&self, pixel: Point) -> f32 {
        self.escape_result(pixel).to_sample()
    }
}
