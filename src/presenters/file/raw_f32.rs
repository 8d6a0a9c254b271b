use std::io;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::output_buffer::OutputBuffer;
use crate::storage::write_le_f32::{write_le_f32, write_le_f32_file};

/// Path that sends the buffer to stdout instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Presents the raw sample buffer in its transport encoding.
pub struct RawF32FilePresenter {}

impl FilePresenterPort for RawF32FilePresenter {
    fn present(&self, buffer: &OutputBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let filepath = filepath.as_ref();

        if filepath == Path::new(STDOUT_PATH) {
            write_le_f32(buffer, io::stdout().lock())
        } else {
            write_le_f32_file(buffer, filepath)
        }
    }
}

impl Default for RawF32FilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl RawF32FilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
