// src/cli.rs
//
// Command-line front end. Loads the dataset once, runs one command, prints
// plain text to stdout. Status lines go to stderr.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::config::consts::TOP_N;
use crate::config::options::{AppOptions, DataSource};
use crate::core::{MarketValue, MonthlySeries, generate_monthly_series, parse_market_value};
use crate::data::{self, Filter, FilteredView, PlayerMetrics, Totals};
use crate::error::{DashError, Result};
use crate::format::{format_euros, format_large_number, format_percent, format_value};
use crate::progress::Progress;
use crate::store::{DataStore, Dataset};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Football player market values from the command line")]
pub struct Args {
    /// Dataset URL (overrides MV_DASH_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Local CSV instead of the remote dataset (overrides MV_DASH_FILE)
    #[arg(long, global = true, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Network timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Evaluation date for monthly series, YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    pub now: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dataset totals and overall change
    Summary,
    /// Players with the highest current value
    Top {
        #[arg(short, long, default_value_t = TOP_N)]
        n: usize,
    },
    /// Metrics and monthly evolution for one player
    Player { name: String },
    /// Monthly evolution of two players side by side
    Compare { first: String, second: String },
    /// Filtered table of all players
    List {
        #[arg(long, default_value_t = 0)]
        min: i64,
        #[arg(long)]
        max: Option<i64>,
        /// Case-insensitive name fragment
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Interpolate between two values without loading any data.
    /// Values are whole euros or value text ("1,5 mill. €")
    Series { start: String, end: String },
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::from_env();
        if let Some(url) = &self.url {
            opts.source = DataSource::Url(url.clone());
        }
        if let Some(file) = &self.file {
            opts.source = DataSource::File(file.clone());
        }
        if let Some(t) = self.timeout.filter(|t| *t > 0) {
            opts.timeout_secs = t;
        }
        opts
    }

    fn today(&self) -> NaiveDate {
        self.now.unwrap_or_else(|| Local::now().date_naive())
    }
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, source: &str) {
        eprintln!("Loading {}", source);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn finish(&mut self, players: Option<usize>) {
        if let Some(n) = players {
            eprintln!("Loaded {} players", n);
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let now = args.today();

    if let Command::Series { start, end } = &args.command {
        let series = generate_monthly_series(now, parse_operand(start), parse_operand(end))?;
        print_series(&series);
        return Ok(());
    }

    let opts = args.options();
    let store = DataStore::new();
    let ds = store.get_or_load(&opts, &mut CliProgress)?;
    logf!("CLI: {:?} on {} players", args.command, ds.len());

    match &args.command {
        Command::Summary => print_summary(&ds),
        Command::Top { n } => print_top(&ds, *n),
        Command::Player { name } => print_player(&ds, name, now)?,
        Command::Compare { first, second } => print_compare(&ds, first, second, now)?,
        Command::List { min, max, search } => {
            let filter = Filter {
                min: *min,
                max: max.or_else(|| ds.max_current()),
                search: search.clone(),
            };
            print_list(&ds, &filter);
        }
        Command::Series { .. } => {}
    }
    Ok(())
}

/// Whole euros, or value text through the parser.
fn parse_operand(s: &str) -> MarketValue {
    match s.trim().parse::<i64>() {
        Ok(v) => MarketValue::Known(v),
        Err(_) => parse_market_value(s),
    }
}

fn print_series(series: &MonthlySeries) {
    for p in series.iter() {
        println!("{:<16} {:>16}", p.label, format_euros(p.value));
    }
}

fn print_summary(ds: &Dataset) {
    let t = Totals::of(ds);
    println!("Players:        {}", ds.len());
    println!("Initial total:  {}", format_euros(t.initial as f64));
    println!("Current total:  {}", format_euros(t.current as f64));
    println!("Change:         {}", format_euros(t.change as f64));
    match t.change_pct {
        Some(p) => println!("Change %:       {}", format_percent(p)),
        None => println!("Change %:       N/A"),
    }
}

fn print_top(ds: &Dataset, n: usize) {
    for (rank, p) in data::top_by_current(ds, n).iter().enumerate() {
        println!("{:>2}. {:<30} {:>16}", rank + 1, p.name, format_value(p.value_current));
    }
}

fn print_player(ds: &Dataset, name: &str, now: NaiveDate) -> Result<()> {
    let p = ds.player(name).ok_or_else(|| DashError::PlayerNotFound(s!(name)))?;
    let m = PlayerMetrics::for_player(p);

    let big = |v: MarketValue| v.known().map_or(s!("N/A"), |n| format_large_number(n as f64));
    println!("{}", p.name);
    println!("  Initial value:  {}", big(m.initial));
    println!(
        "  Current value:  {} ({})",
        big(m.current),
        m.change.map_or(s!("N/A"), |c| format_large_number(c as f64))
    );
    println!("  Change %:       {}", m.change_pct.map_or(s!("N/A"), format_percent));
    println!();

    print_series(&data::evolution(ds, name, now)?);
    Ok(())
}

fn print_compare(ds: &Dataset, first: &str, second: &str, now: NaiveDate) -> Result<()> {
    let [(na, sa), (nb, sb)] = data::comparison(ds, first, second, now)?;
    println!("{:<16} {:>18} {:>18}", "Month", na, nb);
    for (a, b) in sa.iter().zip(sb.iter()) {
        println!("{:<16} {:>18} {:>18}", a.label, format_euros(a.value), format_euros(b.value));
    }
    Ok(())
}

fn print_list(ds: &Dataset, filter: &Filter) {
    let view = FilteredView::new(ds, filter);
    println!("{:<30} {:>16} {:>16}", "Name", "Initial", "Current");
    for p in view.players() {
        println!(
            "{:<30} {:>16} {:>16}",
            p.name,
            format_value(p.value_start),
            format_value(p.value_current)
        );
    }
    eprintln!("{} of {} players", view.len(), ds.len());
}
