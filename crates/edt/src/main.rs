//! EduTracker CLI - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `edt generate-key [--kind encryption\|hmac]` | Print a new base64 secret |
//! | `edt hash-email <email>` | Print the email lookup hash |
//! | `edt hash-password <password>` | Print a bcrypt hash |
//! | `edt check-config` | Validate configuration, exit non-zero on failure |

use clap::Parser;
use edt::cli::{Cli, execute, load_config};
use edt::infrastructure::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = if cli.command.needs_config() {
        load_config(&cli)?
    } else {
        AppConfig::default()
    };

    let output = execute(&cli.command, config)?;
    println!("{output}");
    Ok(())
}
