use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use zycrypt::encoding;
use zycrypt::Padding;

/// Decrypts `_encrypt_` values from ZyXEL VMG3925 configuration files.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The stored value, with or without its `_encrypt_` marker (the plaintext with --encrypt).
    text: String,

    /// Only check the range of the final padding byte, not the content of the padding.
    #[arg(long, conflicts_with = "encrypt")]
    lenient: bool,

    /// Encrypt TEXT instead, producing a value the router will accept.
    #[arg(short, long)]
    encrypt: bool,

    /// Prefix the encrypted value with the `_encrypt_` marker.
    #[arg(long, requires = "encrypt")]
    marker: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if args.encrypt {
        let mut encoded =
            zycrypt::encrypt_text(args.text.as_bytes()).context("encryption failed")?;
        if args.marker {
            encoded = encoding::add_marker(&encoded);
        }
        println!("Encrypted text: '{}'", encoded);
        return Ok(());
    }

    let mode = if args.lenient {
        Padding::Lenient
    } else {
        Padding::Strict
    };
    debug!("decrypting with {:?} padding checks", mode);

    let plaintext = zycrypt::decrypt_text_with(&args.text, mode).context("decryption failed")?;
    println!("Decrypted text: '{}'", String::from_utf8_lossy(&plaintext));

    Ok(())
}
