#![deny(missing_docs)]
//! A command-line interface for provisioning TOTP secrets and generating
//! and validating one-time codes.

use clap::{Parser, Subcommand};
use log::{error, info};
use rand::TryRngCore;
use rand::rngs::OsRng;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use totp_core::engine::Totp;
use totp_core::{base32, config, engine};

mod provision;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Mint a new secret for an account\ntotp-cli secret --label alice\n\n# Print the current code for a secret\ntotp-cli generate --secret GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ\n\n# Validate a code a user typed in\ntotp-cli validate --secret GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ 287082\n\n# Use a non-default hash and window\ntotp-cli --config ./totp.json generate --secret <SECRET>"
)]
struct Cli {
    /// Path to the JSON engine configuration. Defaults (SHA-256, window 5) apply when omitted or missing.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new shared secret and show its provisioning details
    Secret {
        /// A label for the account the secret belongs to
        #[arg(short, long)]
        label: Option<String>,

        /// The issuer embedded in the provisioning URI
        #[arg(long, default_value = "rust-totp")]
        issuer: String,

        /// The number of random bytes in the secret
        #[arg(long, default_value_t = 10)]
        bytes: usize,
    },
    /// Print the code for a secret
    Generate {
        /// The Base32 shared secret
        #[arg(short, long)]
        secret: String,

        /// Unix timestamp to generate for. Defaults to the current time.
        #[arg(long, value_name = "UNIX_SECONDS")]
        at: Option<u64>,

        /// Generate for an explicit time-step counter instead of a timestamp
        #[arg(long, conflicts_with = "at")]
        counter: Option<u64>,
    },
    /// Check a code against a secret
    Validate {
        /// The Base32 shared secret
        #[arg(short, long)]
        secret: String,

        /// The 6-digit code to check
        #[arg()]
        code: String,

        /// Unix timestamp to validate at. Defaults to the current time.
        #[arg(long, value_name = "UNIX_SECONDS")]
        at: Option<u64>,

        /// Override the configured window (in 30-second steps)
        #[arg(long)]
        window: Option<u32>,
    },
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path).unwrap_or_else(|e| {
            error!("Failed to load config '{}': {e}", path.display());
            std::process::exit(1);
        }),
        None => config::TotpConfig::default(),
    };
    let totp = Totp::from_config(&config);

    match &cli.command {
        Commands::Secret {
            label,
            issuer,
            bytes,
        } => {
            let Some(algorithm) = totp.hash_name() else {
                error!(
                    "The configured hash provider '{}' is not available.",
                    config.hash
                );
                std::process::exit(1);
            };

            let mut rng = OsRng;
            let mut buffer = vec![0u8; *bytes];
            if let Err(e) = rng.try_fill_bytes(&mut buffer) {
                error!("Failed to source random bytes: {e}");
                std::process::exit(1);
            }

            let secret = base32::encode(&buffer);
            info!("Generated a new {bytes}-byte secret.");
            println!("Secret: {secret}");
            println!("Algorithm: {algorithm}");
            println!(
                "QR Code: {}",
                provision::otpauth_url(issuer, label.as_deref(), algorithm, &secret)
            );
        }
        Commands::Generate {
            secret,
            at,
            counter,
        } => {
            let counter = counter.unwrap_or_else(|| {
                let now = at.unwrap_or_else(unix_now);
                info!(
                    "Code valid for another {} second(s).",
                    engine::seconds_remaining_at(now)
                );
                engine::counter_at(now)
            });

            match totp.generate(secret, counter) {
                Some(code) => println!("{code}"),
                None => {
                    error!(
                        "The configured hash provider '{}' is not available.",
                        config.hash
                    );
                    std::process::exit(1);
                }
            }
        }
        Commands::Validate {
            secret,
            code,
            at,
            window,
        } => {
            let now = at.unwrap_or_else(unix_now);
            let window = window.unwrap_or_else(|| totp.window());
            if totp.validate_within(secret, code, now, window) {
                println!("Code accepted.");
            } else {
                error!("Code rejected.");
                std::process::exit(1);
            }
        }
    }
}
