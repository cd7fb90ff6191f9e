//! SandhiIO - Joint-stream ingestion daemon
//!
//! Listens for a single TCP sender (e.g. a Unity simulation publishing
//! robot arm state) and recovers label text and plausible joint angles
//! from the unframed byte stream. Runs until the sender disconnects or an
//! unrecoverable fault occurs, then exits.

use sandhi_io::config::AppConfig;
use sandhi_io::error::{Error, Result};
use sandhi_io::session::{JointSession, SessionEnd};
use std::env;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `sandhi-io <path>` (positional)
/// - `sandhi-io --config <path>` (flag-based)
/// - `sandhi-io -c <path>` (short flag)
///
/// Defaults to `/etc/sandhiio.toml` if not specified.
fn parse_config_path() -> String {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return args[1].clone();
    }

    "/etc/sandhiio.toml".to_string()
}

fn main() -> Result<()> {
    let config_path = parse_config_path();

    // A missing file falls back to the loopback defaults; the daemon is
    // fully usable with zero setup.
    let (config, defaulted) = match AppConfig::from_file(&config_path) {
        Ok(config) => (config, false),
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
            (AppConfig::loopback_defaults(), true)
        }
        Err(e) => return Err(e),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("SandhiIO v0.1.0 starting...");
    if defaulted {
        log::warn!("Config {} not found, using loopback defaults", config_path);
    } else {
        log::info!("Using config: {}", config_path);
    }

    let addr = config.network.socket_addr()?;
    let session = JointSession::bind(addr)?;
    log::info!("Listening for joint stream on {} (single sender)", addr);

    // One session for the process lifetime; no re-accept after it ends.
    match session.run() {
        Ok(SessionEnd::PeerClosed) => {
            log::info!("Session ended: sender disconnected");
            Ok(())
        }
        Err(Error::ConnectionRefused) => {
            log::error!("Connection refused at accept, giving up");
            Err(Error::ConnectionRefused)
        }
        Err(e) => {
            log::error!("Session fault: {}", e);
            Err(e)
        }
    }
}
