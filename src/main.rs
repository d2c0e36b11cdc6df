mod app;
mod command;
mod config;
mod consts;
mod game;
mod page;
mod schedule;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use lexopt::{Arg, Parser};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: greeting-snake [options]

A birthday greeting page with a game of snake in the middle

Options:
  -c, --config <FILE>   Read the profile from <FILE>
      --log-file <FILE> Write debug logs to <FILE>
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run { config, log_file })
    }

    fn run(self) -> ExitCode {
        match self {
            Invocation::Run { config, log_file } => {
                exit(run(config.as_deref(), log_file.as_deref()))
            }
            Invocation::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Invocation::Version => {
                println!("greeting-snake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

fn main() -> ExitCode {
    match Invocation::from_parser(Parser::from_env()) {
        Ok(invocation) => invocation.run(),
        Err(e) => {
            eprintln!("greeting-snake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<&Path>, log_file: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = log_file {
        let file = fs_err::File::create(path)?;
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
            .context("failed to initialize logging")?;
    }
    let config = Config::locate_and_load(config_path).context("failed to load configuration")?;
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(config.profile).run(terminal));
    let _ = execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    r.map_err(Into::into)
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("greeting-snake: {e:?}");
            ExitCode::from(2)
        }
    }
}
