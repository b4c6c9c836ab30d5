use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Project listing and site chrome renderer
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Render the project listing and site chrome", long_about = None)]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error (debug in debug builds, info otherwise)
    #[arg(long, global = true, default_value = folio_core::default_log_level())]
    pub log_level: String,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the project list once for a query
    Render(RenderArgs),
    /// Re-render the project list for each query line read from stdin
    Search(FeedArgs),
    /// Print authoring warnings for the feed
    Lint(FeedArgs),
    /// Render the site header for a page path
    Header(HeaderArgs),
    /// Render the site footer
    Footer(FooterArgs),
    /// Print the core library version
    Version,
}

#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Feed URL (http/https) or path to projects.json
    #[arg(long, value_name = "URL|PATH")]
    pub feed: String,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Search box text
    #[arg(long, short, default_value = "")]
    pub query: String,
}

#[derive(Args, Debug)]
pub struct SiteArgs {
    /// Site config JSON (built-in owner config when omitted)
    #[arg(long, value_name = "PATH")]
    pub site: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HeaderArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Current page path, e.g. /projects/tone-sandhi/
    #[arg(long, default_value = "/")]
    pub path: String,
}

#[derive(Args, Debug)]
pub struct FooterArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Copyright year (current UTC year when omitted)
    #[arg(long)]
    pub year: Option<i32>,
}
