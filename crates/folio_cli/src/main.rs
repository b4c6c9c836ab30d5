//! `folio` command-line entry point.
//!
//! # Responsibility
//! - Map subcommands onto `folio_core` page and chrome APIs.
//! - Keep stdout limited to rendered markup; diagnostics go to stderr/logs.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, FeedArgs, FooterArgs, HeaderArgs, RenderArgs, SiteArgs};
use folio_core::render::current_year;
use folio_core::{
    core_version, init_logging, render_footer, render_header, FeedSource, LogSettings, PageView,
    ProjectCatalog, ProjectsPage, SiteConfig,
};
use log::error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const EMPTY_STATE_MARKER: &str = "<!-- projects-empty: visible -->";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match LogSettings::parse(&cli.log_level, cli.log_dir.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("folio: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = init_logging(&settings) {
        eprintln!("folio: {err}");
        return ExitCode::from(2);
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_exit module=cli status=error error={message}");
            eprintln!("folio: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Render(args) => render_once(&args, &mut out),
        Commands::Search(args) => {
            let stdin = io::stdin();
            search(&args, stdin.lock(), &mut out)
        }
        Commands::Lint(args) => lint(&args, &mut out),
        Commands::Header(args) => header(&args, &mut out),
        Commands::Footer(args) => footer(&args, &mut out),
        Commands::Version => {
            writeln!(out, "folio_core {}", core_version()).map_err(|err| err.to_string())
        }
    }
}

fn render_once(args: &RenderArgs, out: &mut impl Write) -> Result<(), String> {
    let page = ProjectsPage::load(&FeedSource::parse(&args.feed.feed));
    let view = page.render(&args.query);
    write_view(&view, out).map_err(|err| err.to_string())?;
    match view.load_error {
        Some(message) => Err(message),
        None => Ok(()),
    }
}

/// Loads the feed once, then runs [`search_loop`]. A failed load still
/// prints the static failure markup before reporting the error.
fn search(args: &FeedArgs, input: impl BufRead, out: &mut impl Write) -> Result<(), String> {
    let page = ProjectsPage::load(&FeedSource::parse(&args.feed));
    if let Some(message) = page.load_error() {
        write_view(&page.render(""), out).map_err(|err| err.to_string())?;
        return Err(message.to_string());
    }
    search_loop(&page, input, out).map_err(|err| err.to_string())
}

/// Treats every input line as the new search box value and re-renders.
fn search_loop(page: &ProjectsPage, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    write_view(&page.render(""), out)?;
    for line in input.lines() {
        let query = line?;
        writeln!(out, "<!-- query: {} -->", folio_core::escape_html(query.trim()))?;
        write_view(&page.render(&query), out)?;
        out.flush()?;
    }
    Ok(())
}

fn write_view(view: &PageView, out: &mut impl Write) -> io::Result<()> {
    out.write_all(view.list_html.as_bytes())?;
    if view.empty_state_visible {
        writeln!(out, "{EMPTY_STATE_MARKER}")?;
    }
    Ok(())
}

fn lint(args: &FeedArgs, out: &mut impl Write) -> Result<(), String> {
    let catalog =
        ProjectCatalog::load(&FeedSource::parse(&args.feed)).map_err(|err| err.to_string())?;
    for warning in catalog.warnings() {
        writeln!(out, "{warning}").map_err(|err| err.to_string())?;
    }
    writeln!(
        out,
        "records={} warnings={}",
        catalog.len(),
        catalog.warnings().len()
    )
    .map_err(|err| err.to_string())
}

fn site_config(args: &SiteArgs) -> Result<SiteConfig, String> {
    match &args.site {
        Some(path) => SiteConfig::load(path).map_err(|err| err.to_string()),
        None => Ok(SiteConfig::default()),
    }
}

fn header(args: &HeaderArgs, out: &mut impl Write) -> Result<(), String> {
    let config = site_config(&args.site)?;
    out.write_all(render_header(&config, &args.path).as_bytes())
        .map_err(|err| err.to_string())
}

fn footer(args: &FooterArgs, out: &mut impl Write) -> Result<(), String> {
    let config = site_config(&args.site)?;
    let year = args.year.unwrap_or_else(current_year);
    out.write_all(render_footer(&config, year).as_bytes())
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{search, search_loop, EMPTY_STATE_MARKER};
    use crate::cli::FeedArgs;
    use folio_core::render::LOAD_FAILED_HTML;
    use folio_core::{ProjectCatalog, ProjectsPage};

    fn page() -> ProjectsPage {
        let catalog = ProjectCatalog::from_json_str(
            r#"[
                {"slug":"b","title":"B","year":2020},
                {"slug":"a","title":"A","year":2021},
                {"slug":"c","title":"C","year":2020}
            ]"#,
        )
        .unwrap();
        ProjectsPage::new(&catalog)
    }

    #[test]
    fn search_loop_renders_once_per_line() {
        let mut out = Vec::new();
        search_loop(&page(), "b\nzzz\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("<article class=\"project-card\">").count(), 3 + 1);
        assert!(text.contains("<!-- query: b -->"));
        assert!(text.contains("<!-- query: zzz -->"));
        assert_eq!(text.matches(EMPTY_STATE_MARKER).count(), 1);
    }

    #[test]
    fn search_with_unloadable_feed_prints_failure_markup() {
        let dir = tempfile::tempdir().unwrap();
        let args = FeedArgs {
            feed: dir
                .path()
                .join("projects.json")
                .to_str()
                .unwrap()
                .to_string(),
        };

        let mut out = Vec::new();
        let err = search(&args, "b\n".as_bytes(), &mut out).unwrap_err();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, LOAD_FAILED_HTML);
        assert!(err.contains("failed to load"));
    }
}
