use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRectError;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum JuliaError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
    #[error("Julia constant must be finite, got {0}")]
    NonFiniteConstant(Complex),
    #[error(transparent)]
    Region(#[from] ComplexRectError),
}
