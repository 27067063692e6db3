/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

fn parse_level(value: &str) -> Level {
    value.trim().parse::<Level>().unwrap_or(Level::INFO)
}

/// Installs the global fmt subscriber once; the level comes from `LOGLEVEL` (default INFO).
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string()));
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        match tracing::subscriber::set_global_default(subscriber) {
            Ok(()) => tracing::debug!("Log level set to: {}", level),
            Err(e) => eprintln!("Logger already installed: {e}"),
        }
    });
}
