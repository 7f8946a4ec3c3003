// src/bin/hash_admin_password.rs
//! Prints an argon2 PHC string for `ADMIN_PASSWORD_HASH`. The password is
//! read from the first argument or, when absent, from stdin.
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead};

fn main() -> Result<()> {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = neuralpulse_core::infrastructure::security::password::hash_password(&password)
        .map_err(|err| anyhow::anyhow!("hashing failed: {err}"))?;
    println!("{hash}");
    Ok(())
}
