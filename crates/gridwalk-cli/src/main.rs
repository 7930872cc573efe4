//! `gridwalk` — find a route across a text grid map.
//!
//! Run: cargo run -- demos/maps/detour.txt

mod map;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use gridwalk_core::Point;
use gridwalk_paths::{Search, Step};

use map::TextMap;
use report::Report;

#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(about = "Weighted best-first search across a text grid map")]
struct Cli {
    /// Map file; `-` reads standard input
    map: PathBuf,

    /// Start cell as `x,y`, overriding the map's `S`
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// End cell as `x,y`, overriding the map's `E`
    #[arg(long, value_parser = parse_point)]
    end: Option<Point>,

    /// Stop after this many frontier pops
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_map(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("reading map from stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("reading map {}", path.display()))
}

fn run(cli: &Cli) -> Result<Report> {
    let text = read_map(&cli.map)?;
    let mut map = TextMap::parse(&text).context("parsing map")?;
    let (start, end) = map.endpoints(cli.start, cli.end)?;
    let size = map.grid.range().size();
    log::info!("loaded {}x{} map, {start} -> {end}", size.x, size.y);
    if cli.max_steps == Some(0) {
        bail!("--max-steps must be at least 1");
    }

    let mut search = Search::new(&mut map.grid, start, end)?;
    let state = loop {
        // An empty frontier finishes without a pop, so the limit never hides it.
        if search.remaining() > 0 && cli.max_steps.is_some_and(|max| search.pops() >= max) {
            log::warn!("stopped after {} pops", search.pops());
            return Ok(Report::interrupted(start, end, search.pops(), search.visited()));
        }
        match search.step() {
            Step::Skipped(p) => log::debug!("skip wall {p}"),
            Step::Expanded(p) => log::debug!("expand {p}"),
            Step::Done(state) => break state,
        }
    };
    log::info!("search ended {state:?}");

    let pops = search.pops();
    let outcome = search.run();
    Ok(Report::finished(&map.grid, start, end, pops, &outcome))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = run(&cli)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(if report.path.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
