//! classicrypt - encrypt and decrypt text with classical ciphers.
//!
//! Text comes from the trailing arguments, or from stdin when none are
//! given. The result is written to stdout; diagnostics go to stderr.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use std::io::{self, Read};

use classicrypt::playfair::strip_fillers;
use classicrypt::{Cipher, CipherKind, TextCipher};

/// classicrypt - Playfair, Rail Fence and Columnar Transposition
#[derive(Parser)]
#[command(name = "classicrypt")]
#[command(version)]
#[command(about = "Encrypt and decrypt text with classical ciphers")]
#[command(long_about = None)]
struct Cli {
    /// Log debug diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt plaintext
    Encrypt(CipherArgs),

    /// Decrypt ciphertext
    Decrypt {
        #[command(flatten)]
        args: CipherArgs,

        /// Remove the X/Q fillers Playfair inserts between doubled letters
        /// and at the end of odd-length text
        #[arg(long)]
        strip_fillers: bool,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// Cipher to use: playfair, railfence or columnar
    #[arg(short, long, env = "CLASSICRYPT_CIPHER")]
    cipher: CipherKind,

    /// Key: a word for playfair/columnar, the number of rails for railfence
    #[arg(short, long, env = "CLASSICRYPT_KEY", hide_env_values = true)]
    key: String,

    /// Print the Playfair matrix, Rail Fence layout or Columnar grid to stderr
    #[arg(long)]
    show_grid: bool,

    /// Text to process (read from stdin when omitted)
    text: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );

    let output = match cli.command {
        Commands::Encrypt(args) => run(Mode::Encrypt, &args)?,
        Commands::Decrypt {
            args,
            strip_fillers: strip,
        } => {
            if strip && args.cipher != CipherKind::Playfair {
                bail!("--strip-fillers only applies to the playfair cipher");
            }
            let plaintext = run(Mode::Decrypt, &args)?;
            if strip {
                strip_fillers(&plaintext)
            } else {
                plaintext
            }
        }
    };

    println!("{}", output);
    Ok(())
}

fn run(mode: Mode, args: &CipherArgs) -> Result<String> {
    let cipher = Cipher::new(args.cipher, &args.key)
        .with_context(|| format!("Cannot set up the {} cipher", args.cipher))?;
    let input = read_text(&args.text)?;
    debug!("Read {} characters of input", input.chars().count());

    let output = match mode {
        Mode::Encrypt => cipher
            .encrypt(&input)
            .with_context(|| format!("Failed to encrypt with {}", args.cipher))?,
        Mode::Decrypt => cipher
            .decrypt(&input)
            .with_context(|| format!("Failed to decrypt with {}", args.cipher))?,
    };
    info!("{} produced {} characters", args.cipher, output.chars().count());

    if args.show_grid {
        let plaintext = match mode {
            Mode::Encrypt => input.as_str(),
            Mode::Decrypt => output.as_str(),
        };
        eprintln!("{}", render_grid(&cipher, plaintext));
    }

    Ok(output)
}

/// Reads the text to process from the arguments, or from stdin.
fn read_text(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(trim_line_ending(&buffer).to_string())
}

fn trim_line_ending(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

/// Diagnostic view of how `plaintext` is laid out by `cipher`.
fn render_grid(cipher: &Cipher, plaintext: &str) -> String {
    match cipher {
        Cipher::Playfair(playfair) => {
            format!("Playfair matrix:\n{}", playfair.matrix())
        }
        Cipher::RailFence(rail_fence) => format!(
            "Rail Fence ({} rails):\n{}",
            rail_fence.rails(),
            rail_fence.fence(plaintext)
        ),
        Cipher::Columnar(columnar) => format!(
            "Columnar grid (column order {:?}):\n{}",
            columnar.order(),
            columnar.grid(plaintext)
        ),
    }
}
