use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "framer")]
#[command(author, version, about = "OpenAPI to Rust types, DTOs and mock factories")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an API description
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate types.rs, dto.rs, dto_mocker.rs and mod.rs from an API description
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
#[command(group = clap::ArgGroup::new("source").required(true).args(["api", "directory"]))]
pub struct GenerateCommand {
  /// Path to the API description (JSON or YAML)
  #[arg(short, long, value_name = "FILE")]
  pub api: Option<PathBuf>,

  /// Directory of JSON/YAML documents merged into one description
  #[arg(short, long, value_name = "DIR")]
  pub directory: Option<PathBuf>,

  /// Directory the generated module is written to
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Also write the merged description of --directory to this file
  #[arg(long, value_name = "FILE")]
  pub combined: Option<PathBuf>,

  /// Generate every named schema, not only those used by request and response bodies
  #[arg(long, default_value_t = false)]
  pub all_schemas: bool,

  /// Visibility level for generated items (public, crate or file)
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: String,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every type definition the description resolves to
  Types {
    /// Path to the API description (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    api: PathBuf,

    /// Include named schemas no body refers to
    #[arg(long, default_value_t = false)]
    all_schemas: bool,
  },
}
