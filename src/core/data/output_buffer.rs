use thiserror::Error;

use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputBufferError {
    #[error("image size {width}x{height} needs {expected} samples, got {actual}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Bytes per serialized sample.
pub const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Completed render: one `f32` sample per pixel in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputBuffer {
    size: ImageSize,
    samples: Vec<f32>,
}

impl OutputBuffer {
    #[must_use]
    pub fn empty(size: ImageSize) -> Self {
        Self {
            size,
            samples: Vec::new(),
        }
    }

    pub fn from_samples(size: ImageSize, samples: Vec<f32>) -> Result<Self, OutputBufferError> {
        let expected = size.pixel_count();

        if samples.len() != expected {
            return Err(OutputBufferError::BoundsMismatch {
                width: size.width(),
                height: size.height(),
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self { size, samples })
    }

    /// For the render strategies, which size their buffers from `size` themselves.
    pub(crate) fn from_rendered(size: ImageSize, samples: Vec<f32>) -> Self {
        debug_assert_eq!(samples.len(), size.pixel_count());

        Self { size, samples }
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<f32> {
        if !self.size.contains_point(point) {
            return None;
        }

        self.samples.get(self.size.index_of(point)).copied()
    }

    /// Transport encoding: little-endian IEEE-754 samples, row-major, no header.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.samples
            .iter()
            .flat_map(|sample| sample.to_le_bytes())
            .collect()
    }
}
