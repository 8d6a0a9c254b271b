use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = julia_explorer::RenderArgs::parse();
    let presenter = julia_explorer::RawF32FilePresenter::new();

    julia_explorer::RunCliCommand::new(args, presenter).execute()
}
