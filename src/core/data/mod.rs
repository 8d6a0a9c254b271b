pub mod complex;
pub mod complex_rect;
pub mod escape_result;
pub mod image_size;
pub mod output_buffer;
pub mod point;
