use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mingli_rs::{BirthInfo, DestinyEngine, EngineConfig, Gender, SolarDateTime};
use serde::Serialize;
use tracing::debug;

mod logger;
mod render;

#[derive(Parser)]
#[command(name = "mingli", about = "Lunisolar calendar and destiny-chart CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Engine config file (falls back to $MINGLI_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(clap::Args)]
struct Person {
    /// Birth time (YYYY-MM-DD HH:MM)
    birth: String,
    #[arg(long, value_enum, default_value = "male")]
    gender: GenderArg,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    place: String,
}

impl Person {
    fn info(&self) -> BirthInfo {
        BirthInfo::new(self.name.as_str(), self.gender.into(), self.place.as_str())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Lunar date and four pillars of a solar time
    Lunar {
        /// Solar time (YYYY-MM-DD[ HH:MM])
        date: String,
    },
    /// Solar date of a lunar date
    Solar {
        year: i32,
        month: u8,
        day: u8,
        /// Select the leap duplicate of the month
        #[arg(long)]
        leap: bool,
    },
    /// BaZi chart with strength and favorable elements
    Bazi {
        /// Birth time (YYYY-MM-DD HH:MM)
        birth: String,
    },
    /// Ziwei Doushu chart
    Ziwei(Person),
    /// Domain fortune scores
    Fortune(Person),
    /// Daily fortune against a birth chart
    Daily {
        #[command(flatten)]
        person: Person,
        /// Day to read (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Full report
    Report(Person),
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn parse_time(s: &str) -> SolarDateTime {
    or_exit(s.parse::<SolarDateTime>())
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value)));
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = EngineConfig::load_or_default(cli.config.as_deref());
    debug!(?config, "engine config");
    let engine = DestinyEngine::new(config);

    match cli.command {
        Commands::Lunar { date } => {
            let s = or_exit(mingli_rs::lunar(parse_time(&date)));
            if cli.json {
                print_json(&s);
            } else {
                render::sexagenary(&s);
            }
        }

        Commands::Solar {
            year,
            month,
            day,
            leap,
        } => {
            let dt = or_exit(mingli_rs::solar(year, month, day, leap));
            if cli.json {
                print_json(&dt);
            } else {
                render::solar(&dt);
            }
        }

        Commands::Bazi { birth } => {
            let (chart, strength, favorable) = or_exit(engine.bazi(parse_time(&birth)));
            if cli.json {
                print_json(&serde_json::json!({
                    "chart": chart,
                    "strength": strength,
                    "favorable": favorable,
                }));
            } else {
                render::bazi(&chart, &strength);
            }
        }

        Commands::Ziwei(person) => {
            let report = or_exit(engine.report(&person.info(), parse_time(&person.birth)));
            if cli.json {
                print_json(&report.ziwei);
            } else {
                render::ziwei(&report.ziwei);
            }
        }

        Commands::Fortune(person) => {
            let report = or_exit(engine.report(&person.info(), parse_time(&person.birth)));
            if cli.json {
                print_json(&report.fortune);
            } else {
                render::fortune(&report.fortune);
            }
        }

        Commands::Daily { person, date } => {
            let daily = or_exit(engine.daily(
                &person.info(),
                parse_time(&person.birth),
                parse_time(&date),
            ));
            if cli.json {
                print_json(&daily);
            } else {
                render::daily(&daily);
            }
        }

        Commands::Report(person) => {
            let report = or_exit(engine.report(&person.info(), parse_time(&person.birth)));
            if cli.json {
                print_json(&report);
            } else {
                render::report(&report);
            }
        }
    }
}
