use anyhow::Context;
use env_game_template::{config::Config, sdl_display::SdlDisplay, template::EnvGameTemplate};

fn main() -> anyhow::Result<()> {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = Config::default();
    let display = SdlDisplay::new(&config).context("failed to open the display")?;
    let mut template = EnvGameTemplate::new(config, display)?;
    template.run()?;
    Ok(())
}
