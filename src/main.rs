use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use shiftr::{crack, decrypt, encrypt, Candidate, Shift, DEFAULT_SHIFT};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// shiftr - classical Caesar cipher toolkit
///
/// Shift, unshift, and crack rotated text. A museum piece, not security.
#[derive(Parser)]
#[command(name = "shiftr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text by shifting letters forward
    Encrypt {
        /// Text to encrypt (reads stdin when omitted and --in is unset)
        text: Option<String>,

        /// Shift amount; any integer, wrapped modulo 26
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Read the input from a file instead of the argument
        #[arg(long = "in", value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Write the output to a file instead of stdout
        #[arg(long = "out", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Decrypt text by shifting letters back
    Decrypt {
        /// Text to decrypt (reads stdin when omitted and --in is unset)
        text: Option<String>,

        /// Shift amount; any integer, wrapped modulo 26
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Read the input from a file instead of the argument
        #[arg(long = "in", value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Write the output to a file instead of stdout
        #[arg(long = "out", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Try all 26 shifts and list every candidate plaintext
    Crack {
        /// Text to crack (reads stdin when omitted and --in is unset)
        text: Option<String>,

        /// Read the input from a file instead of the argument
        #[arg(long = "in", value_name = "FILE", conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Write the candidate list to a file instead of stdout
        #[arg(long = "out", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit candidates as YAML instead of per-shift lines
        #[arg(long, default_value_t = false)]
        yaml: bool,
    },

    /// Show or set the default shift
    Config {
        /// New default shift; wrapped modulo 26 before saving
        #[arg(allow_negative_numbers = true)]
        shift: Option<i64>,

        /// Remove the stored default shift
        #[arg(long, default_value_t = false)]
        clear: bool,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Preferences {
    default_shift: Option<u8>,
}

impl Preferences {
    fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences from {:?}", path))?;
            serde_yaml::from_str(&content).context("Failed to parse preferences")
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize preferences")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write preferences to {:?}", path))?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("shiftr").join("config.yaml"))
    }
}

/// Pick the effective shift: the flag wins, then the stored default, then 3
fn resolve_shift(flag: Option<i64>) -> Result<Shift> {
    if let Some(raw) = flag {
        return Ok(Shift::new(raw));
    }

    let prefs = Preferences::load()?;
    Ok(prefs
        .default_shift
        .map(|stored| Shift::new(i64::from(stored)))
        .unwrap_or_default())
}

/// Gather the input text: argument first, then --in file, then stdin to EOF
fn read_input(text: Option<String>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = input {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Backup path for an existing output file: `<name>.backup` beside it
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Deliver the result: to --out (backing up any existing file), else stdout
///
/// Nothing but the result itself ever reaches stdout, so pipes stay clean.
fn write_output(result: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if path.exists() {
                let backup = backup_path(path);
                fs::copy(path, &backup)
                    .with_context(|| format!("Failed to back up {:?} to {:?}", path, backup))?;
                println!("✓ Backup created: {:?}", backup);
            }
            fs::write(path, result)
                .with_context(|| format!("Failed to write output file {:?}", path))?;
            println!("✓ Saved: {:?}", path);
        }
        None => {
            print!("{}", result);
        }
    }
    Ok(())
}

/// Render candidates as per-shift lines, or as a YAML list with --yaml
fn render_candidates(candidates: &[Candidate], yaml: bool) -> Result<String> {
    if yaml {
        return serde_yaml::to_string(candidates).context("Failed to serialize candidates");
    }

    let mut lines = String::new();
    for candidate in candidates {
        lines.push_str(&candidate.to_string());
        lines.push('\n');
    }
    Ok(lines)
}

fn handle_encrypt(
    text: Option<String>,
    shift: Option<i64>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let source = read_input(text, input.as_deref())?;
    let shift = resolve_shift(shift)?;
    write_output(&encrypt(&source, shift), output.as_deref())
}

fn handle_decrypt(
    text: Option<String>,
    shift: Option<i64>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let source = read_input(text, input.as_deref())?;
    let shift = resolve_shift(shift)?;
    write_output(&decrypt(&source, shift), output.as_deref())
}

fn handle_crack(
    text: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    yaml: bool,
) -> Result<()> {
    let source = read_input(text, input.as_deref())?;
    let report = render_candidates(&crack(&source), yaml)?;
    write_output(&report, output.as_deref())
}

fn handle_config(shift: Option<i64>, clear: bool) -> Result<()> {
    let mut prefs = Preferences::load()?;

    if clear {
        if prefs.default_shift.take().is_some() {
            prefs.save()?;
            println!("Cleared default shift");
        } else {
            println!("No default shift stored");
        }
        return Ok(());
    }

    match shift {
        Some(raw) => {
            let normalized = Shift::new(raw).value();
            prefs.default_shift = Some(normalized);
            prefs.save()?;
            println!("Default shift set to {}", normalized);
        }
        None => match prefs.default_shift {
            Some(stored) => println!("Default shift: {}", stored),
            None => println!("Default shift: {} (built-in)", DEFAULT_SHIFT),
        },
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt {
            text,
            shift,
            input,
            output,
        } => handle_encrypt(text, shift, input, output),
        Commands::Decrypt {
            text,
            shift,
            input,
            output,
        } => handle_decrypt(text, shift, input, output),
        Commands::Crack {
            text,
            input,
            output,
            yaml,
        } => handle_crack(text, input, output, yaml),
        Commands::Config { shift, clear } => handle_config(shift, clear),
        Commands::Version => {
            println!("shiftr {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
