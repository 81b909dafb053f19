//! CLI module for the user configuration gateway
//!
//! - `serve`: run the HTTP API
//! - `hash-password`: produce an Argon2 hash for `auth.users`

pub mod hash_password;
pub mod serve;

use clap::{Parser, Subcommand};

/// User configuration gateway - HTTP front for a Firebase Realtime Database
#[derive(Parser)]
#[command(name = "userconfig-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),

    /// Hash a password for a static login user
    HashPassword(hash_password::HashPasswordArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::parse_from(["userconfig-gateway", "serve", "--port", "3002", "--enable-auth"]);

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(3002));
                assert!(args.enable_auth);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_hash_password() {
        let cli = Cli::parse_from(["userconfig-gateway", "hash-password", "s3cret"]);
        assert!(matches!(cli.command, Command::HashPassword(ref a) if a.password == "s3cret"));
    }
}
