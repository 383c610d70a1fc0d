//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use dartshape_core::config::CONFIG_FILE_NAME;
use dartshape_core::{MemberSignature, ReportFormat, ScanResult, Settings, ShapeScanner};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for editor/tool consumption
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "dartshape")]
#[command(author, version, about = "Shape fingerprints for Dart class members", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shape sequence and leading text of one declaration
    Scan {
        /// Declaration text (reads --input or stdin when omitted)
        declaration: Option<String>,

        /// File containing the declaration
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep generic type arguments in the leading text
        #[arg(long)]
        keep_type_arguments: bool,
    },

    /// Classify one declaration (field, getter, method, ...)
    Classify {
        /// Declaration text (reads --input or stdin when omitted)
        declaration: Option<String>,

        /// File containing the declaration
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Enclosing class name, used to recognize constructors
        #[arg(long = "class")]
        class_name: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Classify every declaration in a file, one per line
    Batch {
        /// Input file with one declaration per line
        input: PathBuf,

        /// Enclosing class name, used to recognize constructors
        #[arg(long = "class")]
        class_name: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Scan {
            declaration,
            input,
            format,
            config,
            keep_type_arguments,
        } => {
            let mut settings = load_settings(config.as_deref())?;
            if keep_type_arguments {
                settings.scanner.strip_type_arguments = false;
            }
            let text = read_declaration(declaration, input.as_deref())?;
            let format = format.unwrap_or_else(|| settings.output.format.into());
            scan_command(&text, format, &settings)?
        }
        Commands::Classify {
            declaration,
            input,
            class_name,
            format,
            config,
        } => {
            let settings = load_settings(config.as_deref())?;
            let text = read_declaration(declaration, input.as_deref())?;
            let format = format.unwrap_or_else(|| settings.output.format.into());
            classify_command(&text, class_name.as_deref(), format, &settings)?
        }
        Commands::Batch {
            input,
            class_name,
            format,
            config,
        } => {
            let settings = load_settings(config.as_deref())?;
            let format = format.unwrap_or_else(|| settings.output.format.into());
            batch_command(&input, class_name.as_deref(), format, &settings)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Install the stderr log subscriber (`RUST_LOG` overrides the `warn` default)
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded in another tool
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load settings from an explicit path, or discover them in the current directory
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            info!("Using config: {}", path.display());
            Settings::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Settings::discover(&cwd)
                .with_context(|| format!("Failed to load {} from {}", CONFIG_FILE_NAME, cwd.display()))
        }
    }
}

/// Resolve the declaration text from the argument, an input file, or stdin
pub fn read_declaration(declaration: Option<String>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = declaration {
        return Ok(text);
    }

    match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read declaration from stdin")?;
            Ok(text)
        }
    }
}

/// Execute the scan command
pub fn scan_command(declaration: &str, format: OutputFormat, settings: &Settings) -> Result<String> {
    let scanner = ShapeScanner::with_settings(settings.scanner.clone());
    debug!("Scanning with {:?}", scanner.settings());
    let result = scanner.scan(declaration);

    match format {
        OutputFormat::Text => Ok(format_scan_text(&result)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&result).context("Failed to serialize scan result")
        }
    }
}

/// Execute the classify command
pub fn classify_command(
    declaration: &str,
    class_name: Option<&str>,
    format: OutputFormat,
    settings: &Settings,
) -> Result<String> {
    let scanner = ShapeScanner::with_settings(settings.scanner.clone());
    let member = scanner.classify(declaration, class_name);

    match format {
        OutputFormat::Text => Ok(format_member_text(&member)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&member).context("Failed to serialize member signature")
        }
    }
}

/// Execute the batch command
pub fn batch_command(
    input: &Path,
    class_name: Option<&str>,
    format: OutputFormat,
    settings: &Settings,
) -> Result<String> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let scanner = ShapeScanner::with_settings(settings.scanner.clone());
    let members: Vec<MemberSignature> = batch_declarations(&content)
        .map(|line| {
            let member = scanner.classify(line, class_name);
            debug!("{} -> {} {:?}", line, member.kind, member.shape.sequence);
            member
        })
        .collect();

    info!("Classified {} declarations from {}", members.len(), input.display());

    match format {
        OutputFormat::Text => Ok(members
            .iter()
            .map(format_member_line)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&members).context("Failed to serialize member signatures")
        }
    }
}

/// Non-blank, non-comment lines of a batch file
fn batch_declarations(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
}

fn format_scan_text(result: &ScanResult) -> String {
    format!(
        "sequence:     {}\nleading text: {}",
        result.sequence, result.leading_text
    )
}

fn format_member_text(member: &MemberSignature) -> String {
    let modifiers = if member.modifiers.is_empty() {
        "-".to_string()
    } else {
        member.modifiers.join(" ")
    };
    let body = if member.has_body { "yes" } else { "no" };

    format!(
        "kind:      {}\nname:      {}\nmodifiers: {}\nbody:      {}\nlabel:     {}\nsequence:  {}",
        member.kind, member.name, modifiers, body, member.label, member.shape.sequence
    )
}

fn format_member_line(member: &MemberSignature) -> String {
    format!(
        "{:<12} {:<10} {}",
        member.kind.to_string(),
        member.shape.sequence,
        member.label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_skips_blank_and_comment_lines() {
        let content = "// members of Breakpoint\n\nfinal int id;\n   \nbool get isReachable;\n";
        let lines: Vec<&str> = batch_declarations(content).collect();
        assert_eq!(lines, vec!["final int id;", "bool get isReachable;"]);
    }

    #[test]
    fn test_output_format_from_report_format() {
        assert_eq!(OutputFormat::from(ReportFormat::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(ReportFormat::Text), OutputFormat::Text);
    }

    #[test]
    fn test_member_line_is_aligned() {
        let member = dartshape_core::classify("bool isValid() {  }");
        assert_eq!(format_member_line(&member), "method       (){}       isValid()");
    }

    #[test]
    fn test_explicit_declaration_wins_over_input() {
        let text = read_declaration(Some("int x;".to_string()), Some(Path::new("missing.dart")))
            .unwrap();
        assert_eq!(text, "int x;");
    }
}
