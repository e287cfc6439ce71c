//! rabu-retta CLI: round setup and the companion demos.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rabu_retta::cards::INFO;
use rabu_retta::core::{RoundConfig, ServerConfig};
use rabu_retta::fleet::{default_roster, load_roster, save_roster};
use rabu_retta::net::{run_multiplexed, EchoClient, EchoServer};
use rabu_retta::storage::{read_crew_or_report, write_mirror_crew};
use rabu_retta::Round;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rabu-retta")]
#[command(about = "Rabu Retta round setup and companion demos")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print information about the game
    Info,

    /// Set up a round and draw one card
    Round {
        /// Number of players (1-4)
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        players: i64,

        /// RNG seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the echo server
    Serve {
        #[arg(long, default_value = "127.0.0.1:12000")]
        addr: SocketAddr,

        /// Serve several clients at once on one thread
        #[arg(long)]
        multi: bool,

        /// Seconds to wait before retrying a busy address
        #[arg(long, default_value_t = 60)]
        retry_secs: u64,
    },

    /// Interactive echo client on stdin/stdout
    Connect {
        #[arg(long, default_value = "127.0.0.1:12000")]
        addr: SocketAddr,
    },

    /// Print the crew listed in a text file
    Crew {
        path: PathBuf,

        /// Also write the mirrored crew here
        #[arg(long)]
        mirror: Option<PathBuf>,
    },

    /// Save the demo starship roster as JSON and read it back
    Fleet { path: PathBuf },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> rabu_retta::Result<()> {
    match command {
        Command::Info => println!("{}", INFO),

        Command::Round { players, seed } => {
            let mut config = RoundConfig::new(players);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let mut round = Round::new(config)?;
            println!("{}", round);
            println!("You got the card from the deck:\n\t{}", round.draw()?);
        }

        Command::Serve { addr, multi, retry_secs } => {
            let config = ServerConfig::new(addr).with_bind_retry(Duration::from_secs(retry_secs));
            if multi {
                run_multiplexed(&config)?;
            } else {
                EchoServer::bind(&config)?.serve_forever()?;
            }
        }

        Command::Connect { addr } => {
            let mut client = EchoClient::connect(addr)?;
            let stdin = std::io::stdin();
            client.run_session(stdin.lock(), std::io::stdout())?;
        }

        Command::Crew { path, mirror } => {
            let crew = read_crew_or_report(&path)?;
            if !crew.is_empty() {
                println!("Crew members are:");
                for name in &crew {
                    println!("\t* {}", name);
                }
            }
            if let Some(out) = mirror {
                write_mirror_crew(&out, &crew)?;
            }
        }

        Command::Fleet { path } => {
            save_roster(&path, &default_roster())?;
            println!("Starship list:");
            for ship in load_roster(&path)? {
                println!("\t* {}", ship);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // No command: a two-player round, like `round` with defaults
    let command = args.command.unwrap_or(Command::Round { players: 2, seed: None });

    if let Err(e) = run(command) {
        error!(error = %e, "command failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
