use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::{RenderStrategy, render_with};
use crate::core::data::output_buffer::OutputBuffer;
use crate::core::fractals::julia::params::RenderParameters;

pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<OutputBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, params: &RenderParameters, strategy: RenderStrategy) {
        info!("Rendering {} set...", params.display_name());
        info!("Image size: {}", params.size());
        info!("Constant: {}", params.constant());
        info!("Max iterations: {}", params.max_iterations());
        info!("Strategy: {strategy}");

        let start = Instant::now();
        let buffer = render_with(params, strategy);

        info!("Duration: {:?}", start.elapsed());

        self.buffer = Some(buffer);
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&OutputBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("Saved {} samples to {}", buffer.len(), filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::image_size::ImageSize;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(usize, PathBuf)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &OutputBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((buffer.len(), filepath.as_ref().to_path_buf()));
            Ok(())
        }
    }

    fn params() -> RenderParameters {
        let region = ComplexRect::new(Complex::new(-2.0, -1.5), Complex::new(2.0, 1.5)).unwrap();

        RenderParameters::new(region, Complex::new(-0.7, 0.27015), ImageSize::new(16, 12), 64)
            .unwrap()
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);

        assert!(controller.write("unused.f32").is_ok());
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_rendered_buffer() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter);

        controller.generate(&params(), RenderStrategy::ScopedThreads);
        controller.write("out/julia.f32").unwrap();

        assert_eq!(controller.buffer().map(OutputBuffer::len), Some(16 * 12));
        assert_eq!(
            *presenter.presented.borrow(),
            vec![(16 * 12, PathBuf::from("out/julia.f32"))]
        );
    }
}
