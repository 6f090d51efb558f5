use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::Visibility,
    document::ApiDescription,
    metrics::GenerationStats,
    pipeline::{GenerationOptions, Pipeline, PipelineOutput, ProcessorContext},
  },
  ui::{Colors, GenerateCommand},
  utils::{
    combine::{combine_directory, write_combined},
    spec::{decode_description, load_description},
  },
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Where the API description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionSource {
  File(PathBuf),
  Directory { path: PathBuf, combined: Option<PathBuf> },
}

impl DescriptionSource {
  fn path(&self) -> &PathBuf {
    match self {
      Self::File(path) | Self::Directory { path, .. } => path,
    }
  }
}

#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  pub source: DescriptionSource,
  pub output: PathBuf,
  pub visibility: Visibility,
  pub all_schemas: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      api,
      directory,
      output,
      combined,
      all_schemas,
      visibility,
      verbose,
      quiet,
    } = command;

    let Some(visibility) = Visibility::parse(&visibility) else {
      anyhow::bail!("Invalid visibility '{visibility}': expected public, crate or file");
    };

    let source = match (api, directory) {
      (Some(_), None) if combined.is_some() => anyhow::bail!("--combined requires --directory (-d)"),
      (Some(api), None) => DescriptionSource::File(api),
      (None, Some(path)) => DescriptionSource::Directory { path, combined },
      _ => anyhow::bail!("Exactly one of --api (-a) or --directory (-d) is required"),
    };

    Ok(Self {
      source,
      output,
      visibility,
      all_schemas,
      verbose,
      quiet,
    })
  }

  fn options(&self) -> GenerationOptions {
    GenerationOptions {
      visibility: self.visibility,
      all_schemas: self.all_schemas,
    }
  }

  async fn read_description(&self, logger: &GenerateLogger<'_>) -> anyhow::Result<ApiDescription> {
    match &self.source {
      DescriptionSource::File(path) => Ok(load_description(path).await?),
      DescriptionSource::Directory { path, combined } => {
        let document = combine_directory(path).await?;
        if let Some(combined) = combined {
          write_combined(combined, &document).await?;
          logger.log_combined(combined);
        }
        Ok(decode_description(&document)?)
      }
    }
  }

  async fn write_output(&self, output: &PipelineOutput) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.output).await?;
    for (name, contents) in output.files() {
      let path = self.output.join(name);
      if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
      }
      tokio::fs::write(path, contents).await?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    let message = match &self.config.source {
      DescriptionSource::File(path) => format!("Loading API description from: {}", path.display()),
      DescriptionSource::Directory { path, .. } => format!("Combining API descriptions in: {}", path.display()),
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn log_combined(&self, path: &std::path::Path) {
    self.info(
      &format!("Wrote combined description to: {}", path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, stages: &[&str]) {
    self.info(
      &format!("Running stages: {}", stages.join(" -> "))
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} structs", stats.structs_generated));
    self.stat("", format!("{} enums", stats.enums_generated));
    self.stat("", format!("{} type aliases", stats.type_aliases_generated));
    self.stat("Bodies discovered:", stats.bodies_discovered.to_string());
    self.stat("DTOs generated:", stats.dtos_generated.to_string());
    self.stat("Factories generated:", stats.factories_generated.to_string());
    self.stat("Files generated:", stats.files_generated.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || !self.config.verbose {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.warning()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated types, DTOs and mock factories".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let api = config.read_description(&logger).await?;

  let pipeline = Pipeline::standard(config.options()).with_source(config.source.path().display().to_string());
  logger.log_generating(&pipeline.stage_names());
  let output = pipeline.run(&api, ProcessorContext::new())?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(&output).await?;

  logger.log_success();
  Ok(())
}
