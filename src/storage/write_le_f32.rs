use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::data::output_buffer::OutputBuffer;

/// Streams `buffer` as headerless little-endian `f32` samples in row-major order.
pub fn write_le_f32(buffer: &OutputBuffer, writer: impl Write) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);

    for sample in buffer.samples() {
        writer.write_all(&sample.to_le_bytes())?;
    }

    writer.flush()
}

/// Writes `buffer` to `filepath`, creating missing parent directories.
pub fn write_le_f32_file(buffer: &OutputBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    write_le_f32(buffer, std::fs::File::create(filepath)?)
}
