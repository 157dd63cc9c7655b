//! dotprops CLI
//!
//! Command-line interface for reading and editing `.properties` files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotprops::{Config, Properties, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// dotprops CLI
#[derive(Parser, Debug)]
#[command(name = "dotprops")]
#[command(about = "Read and edit .properties files without losing formatting")]
#[command(version)]
struct Args {
    /// The .properties file to operate on
    file: PathBuf,

    /// Return values exactly as stored, without expanding ${key} references
    #[arg(long)]
    no_expand: bool,

    /// Delimiter used for new keys and by `normalize`
    #[arg(short, long, default_value = "=")]
    delimiter: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value of a key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,

        /// Write back to the file instead of stdout
        #[arg(short, long)]
        in_place: bool,
    },

    /// Delete every entry for a key
    Del {
        /// The key to delete
        key: String,

        /// Write back to the file instead of stdout
        #[arg(short, long)]
        in_place: bool,
    },

    /// List the distinct keys
    Keys,

    /// Print the map view: each key with its raw value, last entry winning
    Dump {
        /// Print the raw map view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every entry (comments and blanks included) as JSON
    Entries,

    /// Replace every delimiter with the configured one
    Normalize {
        #[arg(short, long)]
        in_place: bool,
    },

    /// Remove comments and blank lines
    Compact {
        #[arg(short, long)]
        in_place: bool,
    },

    /// Remove comments
    StripComments {
        #[arg(short, long)]
        in_place: bool,
    },

    /// Remove blank lines
    StripBlanks {
        #[arg(short, long)]
        in_place: bool,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("dotprops: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Execute one command against the file
fn run(args: Args) -> Result<ExitCode> {
    let config = Config::builder()
        .auto_expand(!args.no_expand)
        .default_delimiter(args.delimiter)
        .build();

    let mut props = Properties::load_with_config(&args.file, config)?;

    let in_place = match args.command {
        Commands::Get { key } => {
            return Ok(match props.get(&key)? {
                Some(value) => {
                    println!("{}", value);
                    ExitCode::SUCCESS
                }
                None => ExitCode::FAILURE,
            });
        }
        Commands::Keys => {
            for key in props.keys() {
                println!("{}", key);
            }
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Dump { json: true } => {
            println!("{}", props.to_json()?);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Dump { json: false } => {
            for (key, value) in props.to_map() {
                println!("{} = {}", key, value);
            }
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Entries => {
            println!("{}", props.entries_to_json()?);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Set {
            key,
            value,
            in_place,
        } => {
            props.set(key, value);
            in_place
        }
        Commands::Del { key, in_place } => {
            if props.delete(&key)?.is_none() {
                tracing::info!("Key '{}' not present", key);
            }
            in_place
        }
        Commands::Normalize { in_place } => {
            props.normalize_delimiters();
            in_place
        }
        Commands::Compact { in_place } => {
            props.compact();
            in_place
        }
        Commands::StripComments { in_place } => {
            props.strip_comments();
            in_place
        }
        Commands::StripBlanks { in_place } => {
            props.strip_blanks();
            in_place
        }
    };

    if in_place {
        props.save(&args.file)?;
    } else {
        let text = props.to_text();
        if text.ends_with('\n') {
            print!("{}", text);
        } else {
            println!("{}", text);
        }
    }

    Ok(ExitCode::SUCCESS)
}
