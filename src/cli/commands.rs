//! Command dispatch

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::services::query::{find_by_name, top};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands, SourceArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::global_config_path;
use crate::domain::Region;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { source, depth }) => _tree(container, source, *depth),
        Some(Commands::Show { source, name }) => _show(container, source, name),
        Some(Commands::Top { source, count }) => {
            _top(container, source, count.unwrap_or(container.settings.top_count))
        }
        Some(Commands::Export { source, output }) => _export(container, source, output),
        Some(Commands::Config { command }) => _config(container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "corona", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

/// Resolve data files from arguments and settings, then assemble the world.
fn load_world(container: &ServiceContainer, source: &SourceArgs) -> CliResult<Region> {
    let file = source
        .file
        .clone()
        .or_else(|| container.settings.data_file.clone())
        .ok_or_else(|| {
            CliError::Usage("no data file: pass --file or set data_file".to_string())
        })?;
    ensure_exists(container, "data", &file)?;
    let series = source
        .series
        .clone()
        .or_else(|| container.settings.series_file.clone());
    if let Some(series) = &series {
        ensure_exists(container, "series", series)?;
    }
    debug!("load_world: file={:?}, series={:?}", file, series);

    Ok(container
        .region_service
        .load_world(&file, series.as_deref())?)
}

fn ensure_exists(container: &ServiceContainer, kind: &str, path: &Path) -> CliResult<()> {
    if container.fs.exists(path) {
        Ok(())
    } else {
        Err(CliError::InvalidArgs(format!(
            "{} file not found: {}",
            kind,
            path.display()
        )))
    }
}

pub fn region_label(region: &Region) -> String {
    format!(
        "{}  {}  {}",
        region.long_name(),
        output::format_count(region.confirmed_count()),
        output::format_change(region.daily_change())
    )
}

/// Render `region` and its descendants down to `depth` levels.
pub fn region_tree(region: &Region, depth: usize) -> Tree<String> {
    let leaves: Vec<Tree<String>> = if depth == 0 {
        Vec::new()
    } else {
        region
            .sub_regions()
            .iter()
            .map(|child| region_tree(child, depth - 1))
            .collect()
    };
    Tree::new(region_label(region)).with_leaves(leaves)
}

#[instrument(skip(container))]
fn _tree(container: &ServiceContainer, source: &SourceArgs, depth: usize) -> CliResult<()> {
    let world = load_world(container, source)?;
    output::info(&region_tree(&world, depth));
    Ok(())
}

#[instrument(skip(container))]
fn _show(container: &ServiceContainer, source: &SourceArgs, name: &str) -> CliResult<()> {
    let world = load_world(container, source)?;
    let region = find_by_name(&world, name)
        .ok_or_else(|| ApplicationError::RegionNotFound(name.to_string()))?;

    output::header(&region.long_name());
    output::field("level", &region.level());
    output::field("location", &region.location());
    match region.report() {
        Some(report) => {
            let stat = &report.stat;
            output::field("confirmed", &output::format_count(stat.confirmed_count));
            output::field(
                "recovered",
                &format!(
                    "{} ({:.1}%)",
                    output::format_count(stat.recovered_count),
                    stat.recovered_percent()
                ),
            );
            output::field(
                "deaths",
                &format!(
                    "{} ({:.1}%)",
                    output::format_count(stat.death_count),
                    stat.death_percent()
                ),
            );
            output::field("existing", &output::format_count(stat.existing_count()));
            output::field("updated", &report.last_update.format("%Y-%m-%d %H:%M UTC"));
        }
        None => output::field("report", &"n/a"),
    }
    match region.daily_change() {
        Some(change) => {
            output::field(
                "new confirmed",
                &output::format_delta(change.new_confirmed, change.confirmed_growth_percent),
            );
            output::field(
                "new recovered",
                &output::format_delta(change.new_recovered, change.recovered_growth_percent),
            );
            output::field(
                "new deaths",
                &output::format_delta(change.new_deaths, change.deaths_growth_percent),
            );
        }
        None => output::field("daily change", &"n/a"),
    }
    if let Some(ts) = region.time_series() {
        if let Some((date, _)) = ts.latest() {
            output::field("history", &format!("{} days, latest {}", ts.len(), date));
        }
    }
    if !region.is_leaf() {
        output::field("sub-regions", &region.sub_regions().len());
    }
    Ok(())
}

#[instrument(skip(container))]
fn _top(container: &ServiceContainer, source: &SourceArgs, count: usize) -> CliResult<()> {
    let world = load_world(container, source)?;
    output::header(&format!("{}  {}", world.name(), output::format_count(world.confirmed_count())));
    for (rank, region) in top(&world, count).into_iter().enumerate() {
        output::info(&format!(
            "{:>3}. {:<32} {:>12}  {}",
            rank + 1,
            region.long_name(),
            output::format_count(region.confirmed_count()),
            output::format_change(region.daily_change())
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _export(
    container: &ServiceContainer,
    source: &SourceArgs,
    output_path: &Path,
) -> CliResult<()> {
    let world = load_world(container, source)?;
    if output_path.as_os_str() == "-" {
        let json = serde_json::to_string_pretty(&world).map_err(|e| {
            ApplicationError::OperationFailed {
                context: "encode world".to_string(),
                source: Box::new(e),
            }
        })?;
        io::stdout()
            .write_all(json.as_bytes())
            .map_err(|e| InfraError::output("stdout", e))?;
        return Ok(());
    }
    container.region_service.save_region(&world, output_path)?;
    output::info(&format!("Exported: {}", output_path.display()));
    Ok(())
}

fn _config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory on this platform"),
        },
    }
    Ok(())
}
