use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tg", about = concat!("taskgrid v", env!("CARGO_PKG_VERSION"), " - filter, sort and group obligation tasks"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of discovering taskgrid.toml
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks through the filter → sort → group pipeline
    List(ListArgs),
    /// Show every field of one task
    Show(ShowArgs),
    /// List the fields filters and sort rules can address
    Fields,
    /// List the distinct values of a field
    Values(ValuesArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter predicate FIELD:OPERATOR:VALUE (repeatable), e.g. openTasks:gt:3
    #[arg(long = "where", short = 'w', value_name = "FIELD:OP:VALUE")]
    pub filters: Vec<String>,
    /// Keep tasks matching any predicate (default: all)
    #[arg(long)]
    pub any: bool,
    /// Sort rule FIELD[:asc|desc] (repeatable, first is primary)
    #[arg(long, short = 's', value_name = "FIELD[:DIR]")]
    pub sort: Vec<String>,
    /// View mode: flat, contract or hierarchy (default from config)
    #[arg(long)]
    pub view: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID to show
    pub id: String,
}

#[derive(Args)]
pub struct ValuesArgs {
    /// Field name (e.g. owner, criticality)
    pub field: String,
}
