use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::{AppConfig, Condition, Field, FilterSpec, SortSpec, SpecError};
use crate::model::spec::{parse_predicate, parse_sort_rule};
use crate::ops::view::{self, ActiveView, ViewMode};
use crate::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = load_config(cli.config.as_deref())?;
    let store = TaskStore::sample();

    match cli.command {
        None => {
            eprintln!("no command given (try `tg --help`, or run `tg` alone for the table view)");
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(&store, &config, args, json),
            Commands::Show(args) => cmd_show(&store, args, json),
            Commands::Fields => cmd_fields(json),
            Commands::Values(args) => cmd_values(&store, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn load_config(path: Option<&str>) -> Result<AppConfig, config_io::ConfigError> {
    config_io::load_config_cwd(path.map(Path::new))
}

/// Build the filter spec from `--where` arguments. A later predicate on the
/// same field replaces an earlier one.
pub fn build_filter(filters: &[String], any: bool) -> Result<FilterSpec, SpecError> {
    let condition = if any { Condition::Or } else { Condition::And };
    let mut spec = FilterSpec::new(condition);
    for raw in filters {
        let (field, predicate) = parse_predicate(raw)?;
        spec.insert(field, predicate.operator, predicate.value);
    }
    Ok(spec)
}

pub fn build_sort(rules: &[String]) -> Result<SortSpec, SpecError> {
    let rules = rules
        .iter()
        .map(|raw| parse_sort_rule(raw))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SortSpec::new(rules))
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_list(
    store: &TaskStore,
    config: &AppConfig,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = match args.view.as_deref() {
        Some(v) => v.parse::<ViewMode>()?,
        None => config.view.mode,
    };
    let active = ActiveView {
        filter: build_filter(&args.filters, args.any)?,
        sort: build_sort(&args.sort)?,
        mode,
    };

    let result = view::compute(store.records(), &active);
    if json {
        print_json(&list_to_json(
            mode,
            &active.filter,
            &active.sort,
            &result,
            store.len(),
        ))
    } else {
        print_lines(&format_view(&result, store.len()));
        Ok(())
    }
}

fn cmd_show(store: &TaskStore, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let task = store
        .find(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;
    if json {
        print_json(task)
    } else {
        print_lines(&format_task_detail(task));
        Ok(())
    }
}

fn cmd_fields(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let fields: Vec<FieldJson> = Field::ALL.iter().map(|&f| field_to_json(f)).collect();
        print_json(&fields)
    } else {
        print_lines(&format_field_table());
        Ok(())
    }
}

fn cmd_values(
    store: &TaskStore,
    args: ValuesArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let field = Field::parse(&args.field).ok_or_else(|| SpecError::UnknownField(args.field.clone()))?;
    let values = store.distinct_values(field);
    if json {
        print_json(&values)
    } else {
        print_lines(&values);
        Ok(())
    }
}
