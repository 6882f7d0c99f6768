use clap::{Parser, ValueEnum};
use colored::Colorize;
use newyear::{CelebrationReport, Celebrator, Strategy, TravelerConfig, YearOutcome};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitCode, Stdio};
use tabled::Tabled;
use tabled::settings::Style;
use tracing::info;

mod logging;

/// Moscow time at which a westbound traveler, forever alternating flights
/// and rest, sees each new year arrive.
#[derive(Parser)]
#[command(name = "newyear", version)]
struct Args {
    /// Years to look up. Without years or a range an interactive shell starts.
    years: Vec<i32>,

    /// First year of a range
    #[arg(long, requires = "to")]
    from: Option<i32>,

    /// Last year of a range, inclusive
    #[arg(long, requires = "from")]
    to: Option<i32>,

    /// Search strategy. The iterative walk slows down linearly with the
    /// distance from the base year; prefer closed-form for distant years.
    #[arg(short, long, value_enum, default_value_t = Strategy::ClosedForm)]
    strategy: Strategy,

    /// Path to a JSON traveler config; missing fields use the defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run both strategies and report a disagreement as an error
    #[arg(long)]
    check: bool,

    /// Print reports as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

/// Table row for one year. Skipped or failed years keep their row with a
/// `--:--` time and the reason.
#[derive(Tabled)]
struct Row {
    year: i32,
    #[tabled(rename = "moscow time")]
    moscow_time: String,
    #[tabled(rename = "elapsed hours")]
    elapsed_hours: String,
    zone: String,
    offset: String,
    #[tabled(rename = "phase at midnight")]
    phase: String,
    note: String,
}

impl Row {
    fn from_outcome(outcome: &YearOutcome) -> Row {
        match &outcome.result {
            Ok(report) => Row {
                year: report.year,
                moscow_time: report.moscow_time.clone(),
                elapsed_hours: report.elapsed_hours.to_string(),
                zone: report.zone.to_string(),
                offset: report.offset.to_string(),
                phase: report.phase.to_string(),
                note: String::new(),
            },
            Err(err) => Row {
                year: outcome.year,
                moscow_time: "--:--".red().to_string(),
                elapsed_hours: String::new(),
                zone: String::new(),
                offset: String::new(),
                phase: String::new(),
                note: err.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonRow<'a> {
    Celebrated(&'a CelebrationReport),
    Failed { year: i32, error: String },
}

impl<'a> JsonRow<'a> {
    fn from_outcome(outcome: &'a YearOutcome) -> JsonRow<'a> {
        match &outcome.result {
            Ok(report) => JsonRow::Celebrated(report),
            Err(err) => JsonRow::Failed {
                year: outcome.year,
                error: err.to_string(),
            },
        }
    }
}

fn render(outcomes: &[YearOutcome]) -> String {
    let mut table = tabled::Table::new(outcomes.iter().map(Row::from_outcome));
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    table.to_string()
}

fn all_succeeded(outcomes: &[YearOutcome]) -> bool {
    outcomes.iter().all(|o| o.result.is_ok())
}

fn print_error(err: impl std::fmt::Display) {
    eprintln!("{} {}", "error:".red().bold(), err);
}

fn batch(celebrator: &Celebrator, years: Vec<i32>, check: bool, json: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let outcomes = celebrator.outcomes(years, check);
    if json {
        let rows = outcomes.iter().map(JsonRow::from_outcome).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", render(&outcomes));
    }
    if all_succeeded(&outcomes) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn show(outcomes: &[YearOutcome]) {
    if outcomes.len() > 20 {
        paginate(render(outcomes));
    } else {
        println!("{}", render(outcomes));
    }
}

fn shell(mut celebrator: Celebrator) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!(
        "Traveler ready. Base year {}, strategy {}. Type 'help' for commands.",
        celebrator.config().base_year,
        celebrator.strategy()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "year".to_string(),
            "range".to_string(),
            "strategy".to_string(),
            "check".to_string(),
            "config".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                let year_at = |i: usize| parts.get(i).and_then(|s| s.parse::<i32>().ok());
                match parts[0] {
                    "year" | "y" => {
                        if let Some(year) = year_at(1) {
                            match celebrator.celebrate(year) {
                                Ok(clock) => println!("{} {}", year, clock.green()),
                                Err(err) => print_error(err),
                            }
                        } else {
                            println!("Usage: year <year>");
                        }
                    },
                    "range" | "r" => {
                        if let (Some(from), Some(to)) = (year_at(1), year_at(2)) {
                            let outcomes = celebrator.outcomes(from..=to, false);
                            if outcomes.is_empty() {
                                println!("Empty range.");
                            } else {
                                show(&outcomes);
                            }
                        } else {
                            println!("Usage: range <from> <to>");
                        }
                    },
                    "strategy" | "s" => {
                        match parts.get(1).and_then(|s| Strategy::from_str(s, true).ok()) {
                            Some(strategy) => {
                                celebrator = celebrator.with_strategy(strategy);
                                println!("Strategy set to {}.", strategy);
                            },
                            None => println!("Usage: strategy <iterative|closed-form> (current: {})", celebrator.strategy()),
                        }
                    },
                    "check" | "c" => {
                        if let Some(year) = year_at(1) {
                            match celebrator.cross_check(year) {
                                Ok(report) => println!("{} {} {}", year, report.moscow_time.green(), "(strategies agree)".dimmed()),
                                Err(err) => print_error(err),
                            }
                        } else {
                            println!("Usage: check <year>");
                        }
                    },
                    "config" => {
                        println!("{}", serde_json::to_string_pretty(celebrator.config())?);
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  year <y>            - Moscow time at which year <y> is celebrated");
                        println!("  range <a> <b>       - Table of celebrations for years <a> through <b>");
                        println!("  strategy <name>     - Switch search strategy: iterative or closed-form");
                        println!("  check <y>           - Run both strategies for year <y> and compare");
                        println!("  config              - Show the traveler configuration");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit the shell\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading traveler config");
            TravelerConfig::load_from_file(path)?
        }
        None => TravelerConfig::default(),
    };
    let celebrator = Celebrator::new(config, args.strategy)?;

    let mut years = args.years;
    if let (Some(from), Some(to)) = (args.from, args.to) {
        years.extend(from..=to);
    }

    if years.is_empty() {
        shell(celebrator)
    } else {
        info!(count = years.len(), strategy = %args.strategy, "computing celebrations");
        batch(&celebrator, years, args.check, args.json)
    }
}
