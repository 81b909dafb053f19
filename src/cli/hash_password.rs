//! Hash-password command

use clap::Args;

use crate::infrastructure::auth::hash_password;

#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Plain-text password to hash
    pub password: String,
}

/// Print the PHC string to stdout so it can be pasted into configuration
pub fn run(args: HashPasswordArgs) -> anyhow::Result<()> {
    let hash = hash_password(&args.password)?;
    println!("{}", hash);
    Ok(())
}
