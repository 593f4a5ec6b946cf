//! Pig Binary
//!
//! Hotseat Pig for two players at one terminal.
//!
//! Options: --seed <u64>, -v (repeat for more log output)

use clap::Parser;
use pig::dice::Fair;
use pig::gameplay::Engine;
use pig::players::Human;
use pig::players::Terminal;
use std::io::IsTerminal;

#[derive(Debug, Parser)]
#[command(name = "pig", about = "Play Pig, the dice game, at the terminal")]
struct Args {
    /// Seed the die for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    fn dice(&self) -> Fair {
        self.seed.map(Fair::seeded).unwrap_or_default()
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    pig::log(args.level())?;
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("pig is interactive and needs a terminal on stdin");
    }
    println!("{}", pig::RULES);
    let mut engine = Engine::new(Human::new(Terminal), args.dice());
    engine.seat(pig::N);
    let winner = engine.play();
    log::info!("game over, P{} won", winner);
    Ok(())
}
