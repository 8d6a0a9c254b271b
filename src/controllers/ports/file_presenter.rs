use std::path::Path;

use crate::core::data::output_buffer::OutputBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &OutputBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
