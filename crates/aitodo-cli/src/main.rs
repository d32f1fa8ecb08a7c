//! aitodo - command-line view adapter over `aitodo-core`.
//!
//! Parses user intent, calls exactly one `TodoService` operation and renders
//! the result. All presentation text lives in `view`.

mod cli;
mod view;

use std::process::ExitCode;

use aitodo_core::app::BuildError;
use aitodo_core::impls::TracingEventSink;
use aitodo_core::{
    Category, ErrorKind, Priority, TaskId, TodoAppBuilder, TodoConfig, TodoError, TodoService,
};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(err.kind()))
        }
    }
}

/// 既定は warn（壊れたスナップショットの破棄などは常に表示する）。
/// RUST_LOG で上書きでき、`--verbose` は debug を強制する。
fn init_tracing(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(verbose, rust_log.as_deref());
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

const DEFAULT_FILTER: &str = "warn";

fn filter_directive(verbose: bool, rust_log: Option<&str>) -> &str {
    if verbose {
        return "debug";
    }
    match rust_log.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => DEFAULT_FILTER,
    }
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Validation | ErrorKind::NotFound => 2,
        ErrorKind::Persistence | ErrorKind::Internal => 4,
    }
}

fn load_config(cli: &Cli) -> Result<TodoConfig, TodoError> {
    let mut config = match &cli.config {
        Some(path) => TodoConfig::load(path)?,
        None => match TodoConfig::default_path() {
            Some(path) => TodoConfig::load_or_default(&path)?,
            None => TodoConfig::default(),
        },
    };
    if let Some(snapshot) = &cli.snapshot {
        config.snapshot_path = Some(snapshot.clone());
    }
    Ok(config)
}

fn build_service(config: &TodoConfig) -> Result<TodoService, TodoError> {
    TodoAppBuilder::from_config(config)
        .and_then(|builder| builder.event_sink(TracingEventSink).build())
        .map_err(|err| match err {
            BuildError::Config(inner) => inner,
            other => TodoError::Config(other.to_string()),
        })
}

fn parse_id(raw: &str) -> Result<TaskId, TodoError> {
    TaskId::parse(raw).ok_or_else(|| TodoError::Validation("task id must not be empty".into()))
}

fn run(cli: Cli) -> Result<(), TodoError> {
    let config = load_config(&cli)?;
    let mut service = build_service(&config)?;
    let as_json = cli.json;

    match cli.command {
        Commands::Add {
            text,
            category,
            priority,
            plain,
        } => {
            let text = text.join(" ");
            let category = category.as_deref().map(str::parse::<Category>).transpose()?;
            let priority = priority.as_deref().map(str::parse::<Priority>).transpose()?;

            let applied = if plain || category.is_some() {
                service.add_task(&text, category, priority)?
            } else {
                service.add_classified(&text, priority)?
            };
            view::warn_if_unsaved(&applied);

            let Some(task) = service.get(&applied.value) else {
                return Err(TodoError::NotFound(applied.value));
            };
            if as_json {
                println!("{}", serde_json::to_string_pretty(task)?);
            } else {
                println!("Task added\n{}", view::task_line(task));
            }
        }

        Commands::Suggest { seed, add } => {
            let suggestion = service.suggest(&seed.join(" "));
            if add {
                let applied = service.add_task(
                    &suggestion.text,
                    Some(suggestion.category),
                    Some(suggestion.priority),
                )?;
                view::warn_if_unsaved(&applied);
                if !as_json {
                    println!("Added suggestion as {}", applied.value);
                }
            }
            if as_json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                println!("{}", view::suggestion(&suggestion));
            }
        }

        Commands::Toggle { id } => {
            let id = parse_id(&id)?;
            let applied = service.toggle_complete(&id)?;
            view::warn_if_unsaved(&applied);
            if as_json {
                println!("{}", json!({ "id": id, "completed": applied.value }));
            } else if applied.value {
                println!("Marked done: {id}");
            } else {
                println!("Marked active: {id}");
            }
        }

        Commands::Edit { id, text } => {
            let id = parse_id(&id)?;
            let applied = service.edit_text(&id, &text.join(" "))?;
            view::warn_if_unsaved(&applied);
            if as_json {
                println!("{}", json!({ "id": id, "changed": applied.value }));
            } else if applied.value {
                println!("Task updated: {id}");
            } else {
                println!("Blank text ignored, task unchanged: {id}");
            }
        }

        Commands::Reclassify { id } => {
            let id = parse_id(&id)?;
            let applied = service.reclassify(&id)?;
            view::warn_if_unsaved(&applied);
            let (category, priority) = applied.value;
            if as_json {
                println!(
                    "{}",
                    json!({ "id": id, "category": category, "priority": priority })
                );
            } else {
                println!("{id}: {category} • {priority}");
            }
        }

        Commands::Delete { id } => {
            let id = parse_id(&id)?;
            let applied = service.delete_task(&id)?;
            view::warn_if_unsaved(&applied);
            if as_json {
                println!("{}", serde_json::to_string_pretty(&applied.value)?);
            } else {
                println!("Task deleted: {}", applied.value.text);
            }
        }

        Commands::ClearCompleted => {
            let applied = service.clear_completed();
            view::warn_if_unsaved(&applied);
            if as_json {
                println!("{}", json!({ "removed": applied.value }));
            } else {
                println!("Removed {} completed", applied.value);
            }
        }

        Commands::List { filter } => {
            let tasks: Vec<_> = service.filter(&filter)?.collect();
            if as_json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("{}", view::empty_list());
            } else {
                for task in tasks {
                    println!("{}", view::task_line(task));
                }
                println!("{}", view::stats_line(&service.stats()));
            }
        }

        Commands::Export { dir, stdout } => {
            if stdout {
                println!("{}", service.export_snapshot()?);
            } else {
                let dir = dir.unwrap_or_else(|| config.resolved_export_dir());
                let path = service.export_to_dir(&dir)?;
                if as_json {
                    println!("{}", json!({ "path": path }));
                } else {
                    println!("Exported to {}", path.display());
                }
            }
        }

        Commands::Stats => {
            let stats = service.stats();
            if as_json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", view::stats_line(&stats));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_shown_when_rust_log_is_unset() {
        assert_eq!(filter_directive(false, None), "warn");
        assert_eq!(filter_directive(false, Some("  ")), "warn");
    }

    #[test]
    fn rust_log_and_verbose_override_the_default() {
        assert_eq!(filter_directive(false, Some("aitodo_core=info")), "aitodo_core=info");
        assert_eq!(filter_directive(true, Some("off")), "debug");
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        assert_eq!(exit_code(ErrorKind::Validation), 2);
        assert_eq!(exit_code(ErrorKind::NotFound), 2);
        assert_eq!(exit_code(ErrorKind::Persistence), 4);
        assert_eq!(exit_code(ErrorKind::Internal), 4);
    }
}
