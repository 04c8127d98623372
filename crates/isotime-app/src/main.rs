use isotime_core::config::load_config;
use tracing_subscriber::EnvFilter;

mod command;

use command::Command;

fn main() -> anyhow::Result<()> {
    let settings = load_config()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(settings.logging.level_filter()?.into())
                .from_env_lossy(),
        )
        .init();

    tracing::info!("Configuration loaded: {:?}", settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::from_args(&args)?;

    println!("{}", command.run(&settings.output)?);

    Ok(())
}
