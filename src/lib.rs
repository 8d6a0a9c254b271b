mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use crate::controllers::cli::render::CliRenderController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render::{RenderStrategy, render, render_with};
pub use crate::core::data::complex::{Complex, ParseComplexError};
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::escape_result::{EscapeResult, INTERIOR_SENTINEL};
pub use crate::core::data::image_size::ImageSize;
pub use crate::core::data::output_buffer::{OutputBuffer, OutputBufferError, SAMPLE_BYTES};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::julia::algorithm::iterate;
pub use crate::core::fractals::julia::errors::JuliaError;
pub use crate::core::fractals::julia::params::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, MAX_DIMENSION,
    MAX_ITERATIONS, MIN_DIMENSION, MIN_ITERATIONS, RenderParameters,
};
pub use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};
pub use crate::input::cli::args::RenderArgs;
pub use crate::input::cli::commands::run_cli::RunCliCommand;
pub use crate::presenters::file::raw_f32::RawF32FilePresenter;
pub use crate::storage::write_le_f32::{write_le_f32, write_le_f32_file};
