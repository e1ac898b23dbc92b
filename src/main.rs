use anyhow::Context;
use clap::Parser;
use dactylkit::{init_logging, Args, Generator, GeneratorConfig, BUILD_DATE, VERSION};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = GeneratorConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    init_logging()?;
    info!("dactylkit {} ({})", VERSION, BUILD_DATE);

    let report = Generator::new(config.generation_options())
        .run()
        .context("Case generation failed")?;

    info!(
        "Done: {} keys, {} wall points, {} screw inserts",
        report.key_count,
        report.wall_points,
        report.screw_locations.len()
    );
    for artifact in &report.artifacts {
        info!("  {}", artifact.display());
    }
    Ok(())
}
