use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context as _};
use clap::Parser;
use rsweb_pager::pagination::{
    NavIntent, PaginationModel, TokenView, MAXIMUM_PAGE_NEIGHBOURS,
};
use rsweb_pager::utils::logging::init_tracing;
use rsweb_pager::{unhandled_error, PagerSettings};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive page-number control")]
struct Cli {
    /// Number of records being paged
    #[arg(short, long)]
    total_records: u64,
    /// Rows per page (overrides the settings file)
    #[arg(short, long)]
    page_limit: Option<u64>,
    /// Page links on each side of the current page, 0 to 2 (overrides the settings file)
    #[arg(short = 'n', long)]
    page_neighbours: Option<i64>,
    /// TOML file with pager defaults
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Navigate(NavIntent),
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some("goto" | "g") => {
                let page = parts
                    .next()
                    .ok_or(anyhow!("goto needs a page number"))?
                    .parse::<i64>()
                    .context("page number must be an integer")?;
                Command::Navigate(NavIntent::GotoPage(page))
            }
            Some("prev" | "p") => Command::Navigate(NavIntent::Previous),
            Some("next" | "n") => Command::Navigate(NavIntent::Next),
            Some("left" | "l") => Command::Navigate(NavIntent::SkipLeftBlock),
            Some("right" | "r") => Command::Navigate(NavIntent::SkipRightBlock),
            Some("quit" | "q") => Command::Quit,
            Some(other) => return Err(anyhow!("unknown command: {other}")),
            None => return Err(anyhow!("empty command")),
        };
        if parts.next().is_some() {
            return Err(anyhow!("unexpected trailing input"));
        }
        Ok(command)
    }
}

fn render(model: &PaginationModel) -> String {
    if !model.is_visible() {
        return String::new();
    }
    let status = model.status();
    let links: Vec<String> = model
        .token_views()
        .iter()
        .map(|TokenView { token, active, .. }| {
            if *active {
                format!("[{token}]")
            } else {
                token.to_string()
            }
        })
        .collect();
    let previous = if model.is_previous_disabled() {
        "(Previous)"
    } else {
        "Previous"
    };
    format!(
        "Rows per page {} out of {} | {} {} Next",
        status.page_limit,
        status.total_records,
        previous,
        links.join(" ")
    )
}

fn build_model(cli: &Cli) -> anyhow::Result<PaginationModel> {
    let mut settings = match &cli.settings {
        Some(path) => PagerSettings::load(path)?,
        None => PagerSettings::default(),
    };
    if let Some(page_limit) = cli.page_limit {
        settings.page_limit = page_limit;
    }
    if let Some(page_neighbours) = cli.page_neighbours {
        settings.page_neighbours =
            page_neighbours.clamp(0, i64::from(MAXIMUM_PAGE_NEIGHBOURS)) as u8;
    }
    let model = settings.model_for(cli.total_records);
    Ok(model.with_observer(|change| match serde_json::to_string(change) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(e = ?e, "serialize page change error"),
    }))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut model = build_model(&cli)?;
    info!(model = ?model, "pager ready");

    unhandled_error!(model.initialize(), "initialize pagination error");
    println!("{}", render(&model));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Navigate(intent)) => {
                unhandled_error!(model.dispatch(intent), "navigation error");
                writeln!(stdout, "{}", render(&model))?;
            }
            Err(e) => writeln!(stdout, "error: {e}")?,
        }
        stdout.flush()?;
    }
    Ok(())
}
