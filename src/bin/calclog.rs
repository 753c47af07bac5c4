//! Line-oriented terminal front end for a calculator session.
//!
//! Reads whitespace-separated tokens from stdin, forwards them to the
//! session and prints a snapshot after every line.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use calclog::{
    config::CalcConfig,
    export::export_file_name,
    input::Input,
    persist::{Storage, memory::MemoryStorage, sqlite::SqliteStorage},
    session::{CalculatorSession, SessionView},
    types::{Action, EntryId, MemoryOp, OperatorKind, ScientificFn},
};
use chrono::Local;
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calclog", version, about = "Immediate-evaluation calculator with history")]
struct Cli {
    /// SQLite file holding history and theme; in-memory when omitted.
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Inputs(Vec<Input>),
    History,
    Stats,
    ClearHistory,
    Theme,
    Reuse(EntryId),
    Export(PathBuf),
    Quit,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match CalcConfig::from_json_file(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => CalcConfig::default(),
    };

    let storage: Box<dyn Storage> = match &cli.db {
        Some(path) => match SqliteStorage::open(path) {
            Ok(s) => Box::new(s),
            Err(err) => {
                eprintln!("error: failed to open {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(MemoryStorage::new()),
    };

    let mut session = CalculatorSession::open(storage, config);
    match run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn run(session: &mut CalculatorSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_view(&mut stdout, &session.view(&Local))?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(token) => {
                writeln!(stdout, "! unknown token {token:?}")?;
                continue;
            }
        };

        match command {
            Command::Inputs(inputs) => {
                for input in inputs {
                    if let Err(err) = session.dispatch(input) {
                        writeln!(stdout, "! {err}")?;
                    }
                }
            }
            Command::History => {
                for row in session.view(&Local).history {
                    writeln!(stdout, "  [{}] {}  {} = {}", row.id, row.time, row.expression, row.result)?;
                }
            }
            Command::Stats => {
                let stats = session.view(&Local).stats;
                writeln!(
                    stdout,
                    "  count {}  max {}  min {}  mean {}",
                    stats.count, stats.max, stats.min, stats.mean
                )?;
            }
            Command::ClearHistory => session.clear_history(),
            Command::Theme => {
                let theme = session.toggle_theme();
                writeln!(stdout, "  theme {}", theme.as_str())?;
            }
            Command::Reuse(id) => {
                if let Err(err) = session.reuse_result(id) {
                    writeln!(stdout, "! {err}")?;
                }
            }
            Command::Export(path) => match session.export_csv(&Local) {
                Ok(bytes) => {
                    let path = if path.is_dir() {
                        path.join(export_file_name(Local::now().date_naive()))
                    } else {
                        path
                    };
                    std::fs::write(&path, bytes)?;
                    writeln!(stdout, "  exported to {}", path.display())?;
                }
                Err(err) => writeln!(stdout, "! {err}")?,
            },
            Command::Quit => break,
        }

        print_view(&mut stdout, &session.view(&Local))?;
    }
    Ok(())
}

fn print_view(out: &mut impl Write, view: &SessionView) -> io::Result<()> {
    writeln!(out, "{:>24}  {:>16}  {}", view.preview, view.display, view.memory)
}

fn parse_line(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.clone().next() else {
        return Ok(Command::Inputs(Vec::new()));
    };

    match first {
        "history" => return Ok(Command::History),
        "stats" => return Ok(Command::Stats),
        "clear-history" => return Ok(Command::ClearHistory),
        "theme" => return Ok(Command::Theme),
        "quit" | "exit" => return Ok(Command::Quit),
        "reuse" => {
            let id = tokens
                .nth(1)
                .and_then(|t| t.parse().ok())
                .ok_or_else(|| line.to_string())?;
            return Ok(Command::Reuse(EntryId(id)));
        }
        "export" => {
            let path = tokens.nth(1).unwrap_or(".");
            return Ok(Command::Export(PathBuf::from(path)));
        }
        _ => {}
    }

    let mut inputs = Vec::new();
    for token in tokens {
        inputs.extend(parse_token(token).ok_or_else(|| token.to_string())?);
    }
    Ok(Command::Inputs(inputs))
}

fn parse_token(token: &str) -> Option<Vec<Input>> {
    if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Some(token.chars().map(Input::Digit).collect());
    }

    let input = match token {
        "+" => Input::Operator(OperatorKind::Add),
        "-" => Input::Operator(OperatorKind::Subtract),
        "*" | "x" => Input::Operator(OperatorKind::Multiply),
        "/" => Input::Operator(OperatorKind::Divide),
        "=" => Input::Action(Action::Equals),
        "c" => Input::Action(Action::Clear),
        "ce" => Input::Action(Action::ClearEntry),
        "bs" => Input::Action(Action::Backspace),
        "sqrt" => Input::Function(ScientificFn::Sqrt),
        "sq" => Input::Function(ScientificFn::Square),
        "%" => Input::Function(ScientificFn::Percent),
        "neg" => Input::Function(ScientificFn::Negate),
        "mc" => Input::Memory(MemoryOp::Clear),
        "mr" => Input::Memory(MemoryOp::Recall),
        "m+" => Input::Memory(MemoryOp::Add),
        "m-" => Input::Memory(MemoryOp::Subtract),
        _ => return None,
    };
    Some(vec![input])
}
