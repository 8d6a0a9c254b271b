use crate::controllers::cli::render::CliRenderController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::input::cli::args::RenderArgs;

pub struct RunCliCommand<P: FilePresenterPort> {
    args: RenderArgs,
    presenter: P,
}

impl<P: FilePresenterPort> RunCliCommand<P> {
    pub fn new(args: RenderArgs, presenter: P) -> Self {
        Self { args, presenter }
    }

    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let params = self.args.to_params()?;
        let mut controller = CliRenderController::new(self.presenter);

        controller.generate(&params, self.args.strategy);
        controller.write(&self.args.output)?;

        Ok(())
    }
}
