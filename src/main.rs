use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_sets::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment; a missing .env file is fine.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("could not load .env");
        }
    }
    let options = ShellOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_spec().as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Serve the set shell over stdin/stdout; logs stay on stderr.
    log::info!("{} v{} ready", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let mut shell = SetShell::new(options, std::io::stdout());
    if let Err(e) = shell.run(std::io::stdin().lock()) {
        log::error!("fatal error: {}", e);
        return Err(e);
    }
    Ok(())
}
