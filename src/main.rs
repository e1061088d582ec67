//! The `greed` binary: reads settings, runs one game, reports the score.

#![deny(unused)]

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser as _;
use rand::rngs::StdRng;
use rand::SeedableRng as _;

use greed::cli::Args;
use greed::director::Director;
use greed::director::GameState;
use greed::geo::Point;
use greed::input::UserInput;
use greed::logging;
use greed::service::TerminalDisplay;
use greed::service::TerminalKeyboard;
use greed::setup;

fn run(args: &Args) -> greed::Result<GameState> {
  let config = args.config()?;
  if let Some(path) = &args.log_file {
    logging::init(path)?;
  }
  tracing::info!(?config, "starting game");

  let mut rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  let mut cast = setup::build_cast(&config, &mut rng);

  let input = Rc::new(RefCell::new(UserInput::new()));
  let keyboard =
    TerminalKeyboard::new(Rc::clone(&input), config.cell_size.into());
  let display = TerminalDisplay::new(
    input,
    config.columns,
    config.rows,
    config.cell_size,
    config.frame_rate,
    config.debug,
  );
  let fall = Point::new(0, i64::from(config.fall_speed));

  let mut director = Director::new(keyboard, display, fall);
  director.start_game(&mut cast, GameState::new(config.score))
}

fn main() -> ExitCode {
  let args = Args::parse();
  match run(&args) {
    Ok(state) => {
      if state.is_over() {
        println!("Game over!");
      }
      println!("Final score: {}", state.score());
      ExitCode::SUCCESS
    }
    Err(e) => {
      tracing::error!(error = %e, "game failed");
      eprintln!("greed: {}", e);
      ExitCode::FAILURE
    }
  }
}
