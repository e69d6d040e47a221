use clap::Parser;
use gitdocs::{run, Args, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::load(&args.config)?;
    run(config).await
}
