use anyhow::{bail, Context, Result};
use localized_site::security::hash_password;
use std::io::BufRead;
use tracing::info;

/// Print an `ADMIN_PASSWORD_HASH` value for a password given as the first
/// argument or, without arguments, on the first line of stdin.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hash_admin_password=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            info!("Reading password from stdin");
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("Password must not be empty");
    }

    let hash = hash_password(&password).context("Failed to hash password")?;
    println!("ADMIN_PASSWORD_HASH='{}'", hash);
    Ok(())
}
