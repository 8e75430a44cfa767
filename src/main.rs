mod app;
mod board;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::{Game, Tuning};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [options]

Options:
  -c, --config <PATH>  Read configuration from PATH
      --seed <N>       Seed the food placement RNG with N
      --no-log         Do not write a log file
  -h, --help           Show this message and exit
  -V, --version        Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("no-log") => args.no_log = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    seed: Option<u64>,
    no_log: bool,
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        let config = match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::default_path().and_then(|path| Config::load(&path, true)),
        }
        .context("failed to load configuration")?;
        if !self.no_log {
            init_logging(&config)?;
        }
        let tuning = config.game.tuning;
        log_startup(tuning, self.seed);
        match self.seed {
            Some(seed) => play(Game::new_with_rng(tuning, StdRng::seed_from_u64(seed)))?,
            None => play(Game::new(tuning))?,
        }
        Ok(())
    }
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let path = config
        .log_file()
        .context("failed to determine path to log file")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&*path)?;
    WriteLogger::init(config.files.log_level, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn log_startup(tuning: Tuning, seed: Option<u64>) {
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    log::info!(
        "Speed curve: start at {:?}, {:?} faster every {} points, down to {:?}",
        tuning.start_speed(),
        tuning.speed_step(),
        tuning.points_per_speed(),
        tuning.min_speed()
    );
    if let Some(seed) = seed {
        log::info!("Seeding food placement with {seed}");
    }
}

fn play<R: Rng>(game: Game<R>) -> io::Result<()> {
    let terminal = ratatui::init();
    let r = App::new(game).run(terminal);
    ratatui::restore();
    r
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(Cli::Run(args)) => match args.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e)
                if e.downcast_ref::<io::Error>()
                    .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
            {
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e:#}");
                eprintln!("gridsnake: {e:#}");
                ExitCode::from(2)
            }
        },
        Ok(Cli::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Cli::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}
