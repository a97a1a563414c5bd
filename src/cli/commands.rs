//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::AnalysisService;
use crate::cli::args::{AnalysisOverrides, Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{parse_records, HierarchyBuilder};
use crate::infrastructure::{CsvFileSource, RecordSource};
use crate::tree_traits::HierarchyConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Some(Commands::Analyze { file, overrides }) => cmd_analyze(file, config, overrides),
        Some(Commands::Tree { file }) => cmd_tree(file),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(config),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| CliError::InvalidArgs(e.to_string()))?;
            Ok(())
        }
    }
}

/// Command line flags win over every settings layer.
pub fn apply_overrides(mut settings: Settings, overrides: &AnalysisOverrides) -> CliResult<Settings> {
    if let Some(lower) = overrides.lower_pct {
        settings.salary_band.lower_pct = lower;
    }
    if let Some(upper) = overrides.upper_pct {
        settings.salary_band.upper_pct = upper;
    }
    if let Some(max_depth) = overrides.max_depth {
        settings.reporting_line.max_depth = max_depth;
    }
    settings
        .validate()
        .map_err(|e| CliError::InvalidArgs(e.to_string()))?;
    Ok(settings)
}

#[instrument]
fn cmd_analyze(file: &Path, config: Option<&Path>, overrides: &AnalysisOverrides) -> CliResult<()> {
    let settings = apply_overrides(Settings::load(config)?, overrides)?;
    debug!(?settings, "effective settings");

    let input = CsvFileSource::new(file).read_records()?;
    let report = AnalysisService::new(&settings).run(&input.header, &input.rows)?;

    output::report_section(output::SALARY_REPORT_HEADING, &report.salary);
    output::report_section(output::REPORTING_LINE_REPORT_HEADING, &report.reporting_lines);
    Ok(())
}

#[instrument]
fn cmd_tree(file: &Path) -> CliResult<()> {
    let input = CsvFileSource::new(file).read_records()?;
    let registry = parse_records(&input.header, &input.rows)?;
    let hierarchy = HierarchyBuilder::new().build(&registry)?;

    output::info(&hierarchy.to_tree_string());
    let unreachable = hierarchy.node_count() - hierarchy.reachable_count();
    if unreachable > 0 {
        debug!(unreachable, "employees not reachable from the CEO");
    }
    Ok(())
}

fn cmd_config_show(config: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(config)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::info("no global config directory on this platform"),
    }
    Ok(())
}
