pub mod generate_fractal;
pub mod render;
