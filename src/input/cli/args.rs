use std::path::PathBuf;

use clap::Parser;

use crate::core::actions::render::RenderStrategy;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::params::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, MAX_DIMENSION, MAX_ITERATIONS,
    MIN_DIMENSION, MIN_ITERATIONS, RenderParameters,
};

pub const DEFAULT_OUTPUT: &str = "output/julia.f32";

/// Render a Julia set tile as raw little-endian f32 smooth escape values.
///
/// Interior points are written as -1.0. Set RUST_LOG=debug to see the worker layout.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "julia_explorer", version)]
pub struct RenderArgs {
    /// Lower real bound of the sampled region
    #[arg(long, allow_negative_numbers = true)]
    pub min_x: f64,

    /// Upper real bound of the sampled region
    #[arg(long, allow_negative_numbers = true)]
    pub max_x: f64,

    /// Lower imaginary bound of the sampled region
    #[arg(long, allow_negative_numbers = true)]
    pub min_y: f64,

    /// Upper imaginary bound of the sampled region
    #[arg(long, allow_negative_numbers = true)]
    pub max_y: f64,

    /// Julia constant as "re,im", e.g. "-0.7,0.27015"
    #[arg(long, allow_hyphen_values = true)]
    pub constant: Complex,

    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_DIMENSION)..=i64::from(MAX_DIMENSION)),
    )]
    pub width: u32,

    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_DIMENSION)..=i64::from(MAX_DIMENSION)),
    )]
    pub height: u32,

    #[arg(
        long,
        default_value_t = DEFAULT_MAX_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_ITERATIONS)..=i64::from(MAX_ITERATIONS)),
    )]
    pub max_iterations: u32,

    #[arg(long, value_enum, default_value_t = RenderStrategy::default())]
    pub strategy: RenderStrategy,

    /// Output file, or "-" for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl RenderArgs {
    pub fn to_params(&self) -> Result<RenderParameters, JuliaError> {
        let region = ComplexRect::new(
            Complex::new(self.min_x, self.min_y),
            Complex::new(self.max_x, self.max_y),
        )?;

        RenderParameters::new(
            region,
            self.constant,
            ImageSize::new(self.width, self.height),
            self.max_iterations,
        )
    }
}
