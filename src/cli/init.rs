use crate::cli::InitArgs;
use crate::config::Config;
use tracing::info;

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.config.display()
        );
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(&args.config, yaml)?;
    info!("Wrote default config to {:?}", args.config);
    println!("Created {}", args.config.display());
    Ok(())
}
