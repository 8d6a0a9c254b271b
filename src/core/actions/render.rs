use std::fmt;

use clap::ValueEnum;
use log::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_parallel_scoped_threads::generate_fractal_parallel_scoped_threads;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::data::output_buffer::OutputBuffer;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::params::RenderParameters;

/// How rows are scheduled. Every strategy yields a bit-identical buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderStrategy {
    Serial,
    /// One scoped thread per contiguous row band, joined before returning.
    #[default]
    ScopedThreads,
    /// One rayon task per row on the global pool.
    Rayon,
}

impl fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial => write!(f, "serial"),
            Self::ScopedThreads => write!(f, "scoped-threads"),
            Self::Rayon => write!(f, "rayon"),
        }
    }
}

/// Renders `params` with the default [`RenderStrategy::ScopedThreads`].
#[must_use]
pub fn render(params: &RenderParameters) -> OutputBuffer {
    render_with(params, RenderStrategy::default())
}

#[must_use]
pub fn render_with(params: &RenderParameters, strategy: RenderStrategy) -> OutputBuffer {
    let size = params.size();

    if size.is_empty() {
        debug!("skipping render of empty {size} image");
        return OutputBuffer::empty(size);
    }

    let algorithm = JuliaAlgorithm::new(params);
    let samples = match strategy {
        RenderStrategy::Serial => generate_fractal_serial(&algorithm),
        RenderStrategy::ScopedThreads => generate_fractal_parallel_scoped_threads(&algorithm),
        RenderStrategy::Rayon => generate_fractal_parallel_rayon(&algorithm),
    };

    OutputBuffer::from_rendered(size, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::escape_result::INTERIOR_SENTINEL;
    use crate::core::data::image_size::ImageSize;
    use crate::core::data::point::Point;
    use crate::core::fractals::julia::params::DEFAULT_MAX_ITERATIONS;

    fn params_over(
        min: (f64, f64),
        max: (f64, f64),
        constant: Complex,
        width: u32,
        height: u32,
    ) -> RenderParameters {
        let region =
            ComplexRect::new(Complex::new(min.0, min.1), Complex::new(max.0, max.1)).unwrap();

        RenderParameters::new(
            region,
            constant,
            ImageSize::new(width, height),
            DEFAULT_MAX_ITERATIONS,
        )
        .unwrap()
    }

    fn default_params(width: u32, height: u32) -> RenderParameters {
        params_over((-2.0, -1.5), (2.0, 1.5), Complex::new(-0.7, 0.27015), width, height)
    }

    #[test]
    fn test_buffer_length_matches_image_size() {
        for (width, height) in [(100, 80), (1, 1), (200, 50), (3, 97)] {
            let buffer = render(&default_params(width, height));

            assert_eq!(buffer.len(), (width * height) as usize, "{width}x{height}");
            assert_eq!(buffer.size(), ImageSize::new(width, height));
        }
    }

    #[test]
    fn test_zero_dimension_returns_empty_buffer() {
        for (width, height) in [(64, 0), (0, 64), (0, 0)] {
            for strategy in [
                RenderStrategy::Serial,
                RenderStrategy::ScopedThreads,
                RenderStrategy::Rayon,
            ] {
                let buffer = render_with(&default_params(width, height), strategy);

                assert!(buffer.is_empty(), "{width}x{height} with {strategy}");
            }
        }
    }

    #[test]
    fn test_all_escaping_region() {
        let params = params_over((10.0, 10.0), (12.0, 12.0), Complex::default(), 16, 16);
        let buffer = render(&params);

        assert!(buffer.samples().iter().all(|&v| v >= 0.0 && v.is_finite()));
    }

    #[test]
    fn test_interior_region() {
        let params = params_over((-0.1, -0.1), (0.1, 0.1), Complex::default(), 8, 8);
        let buffer = render(&params);

        assert!(buffer.samples().iter().all(|&v| v == INTERIOR_SENTINEL));
    }

    #[test]
    fn test_render_is_deterministic() {
        let params = default_params(64, 64);
        let first = render(&params);
        let second = render(&params);

        let first_bits: Vec<u32> = first.samples().iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u32> = second.samples().iter().map(|v| v.to_bits()).collect();

        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_strategies_produce_bit_identical_buffers() {
        let params = default_params(73, 41);
        let serial = render_with(&params, RenderStrategy::Serial).to_le_bytes();

        assert_eq!(render_with(&params, RenderStrategy::ScopedThreads).to_le_bytes(), serial);
        assert_eq!(render_with(&params, RenderStrategy::Rayon).to_le_bytes(), serial);
    }

    #[test]
    fn test_first_pixel_samples_region_min() {
        // (0, 0) maps to z0 = 10 + 10i, which escapes at iteration 0.
        let params = params_over((10.0, 10.0), (12.0, 12.0), Complex::default(), 4, 4);
        let buffer = render(&params);
        let expected = crate::core::fractals::julia::algorithm::iterate(
            Complex::new(10.0, 10.0),
            Complex::default(),
            DEFAULT_MAX_ITERATIONS,
            params.escape_radius(),
        )
        .to_sample();

        assert_eq!(buffer.get(Point { x: 0, y: 0 }), Some(expected));
    }

    #[test]
    fn test_strategy_display_matches_cli_names() {
        for strategy in [
            RenderStrategy::Serial,
            RenderStrategy::ScopedThreads,
            RenderStrategy::Rayon,
        ] {
            let name = strategy.to_string();

            assert_eq!(RenderStrategy::from_str(&name, false), Ok(strategy));
        }
    }
}
