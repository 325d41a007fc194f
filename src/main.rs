mod gui;

use anyhow::Context;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use tabpager::config;

fn main() -> anyhow::Result<()> {
    let level = std::env::var("TABPAGER_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(level, log_config, TerminalMode::Mixed, ColorChoice::Auto);

    let config = config::load_config();
    if config::config_path().is_some_and(|path| !path.exists()) {
        // First run: leave an editable copy of the defaults behind.
        config::save_config(&config);
    }
    log::info!("tabpager starting with {} titles", config.titles.len());

    gui::run(config).context("demo window failed")
}
