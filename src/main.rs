//! Bunny Tag headless runner
//!
//! Plays one round at fixed steps with the human agent idle and reports
//! who was left "it".
//!
//! Usage: `bunny-tag [settings.json] [--json]`

use std::path::PathBuf;
use std::process::ExitCode;

use bunny_tag::consts::*;
use bunny_tag::sim::{GameEvent, RoundPhase};
use bunny_tag::{MapCatalog, RoundDriver, RoundSettings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bunny Tag (headless) starting...");

    let mut settings_path = None;
    let mut print_json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => print_json = true,
            _ => settings_path = Some(PathBuf::from(arg)),
        }
    }

    let settings = match &settings_path {
        Some(path) => RoundSettings::load_from(path),
        None => RoundSettings::default(),
    };

    let mut driver = RoundDriver::new(settings, MapCatalog::builtin());

    // Countdown plus the round, with slack for the final second
    let budget = u64::from(COUNTDOWN_SECONDS + driver.state().settings.round_secs + 1)
        * u64::from(TICK_RATE_HZ);
    let mut tags = 0;
    for _ in 0..budget {
        for event in driver.advance(SIM_DT) {
            match event {
                GameEvent::Tagged { tagger, tagee } => {
                    tags += 1;
                    log::debug!("Agent {} tagged agent {}", tagger, tagee);
                }
                GameEvent::RoundStarted => log::info!("Go!"),
                GameEvent::TimeTick { remaining } if remaining % 10 == 0 => {
                    log::info!("{} s left", remaining);
                }
                _ => {}
            }
        }
        if driver.phase() == RoundPhase::GameOver {
            break;
        }
    }

    let frame = driver.frame();
    let Some(outcome) = frame.outcome.as_ref() else {
        log::error!("Round did not finish within {} steps", budget);
        return ExitCode::FAILURE;
    };

    let name_of = |id: u32| {
        frame
            .agents
            .iter()
            .find(|a| a.id == id)
            .map_or("?", |a| a.name.as_str())
    };
    match outcome.loser {
        Some(id) => println!("{} is it! ({} tags this round)", name_of(id), tags),
        None => println!("Nobody is it ({} tags this round)", tags),
    }
    let winners: Vec<&str> = outcome.winners.iter().map(|&id| name_of(id)).collect();
    println!("Winners: {}", winners.join(", "));

    if print_json {
        match serde_json::to_string_pretty(&frame) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize final frame: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
