//! The director, which runs the game one frame at a time.

use crate::cast::groups;
use crate::cast::Cast;
use crate::error::GameError;
use crate::error::Result;
use crate::geo::Point;
use crate::service::DisplayService;
use crate::service::KeyboardService;

/// The mutable state of a game in progress.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GameState {
  score: i64,
  game_over: bool,
}

impl GameState {
  /// Creates a new game with the given starting score.
  pub fn new(score: i64) -> Self {
    Self {
      score,
      game_over: false,
    }
  }

  /// Returns the current score.
  pub fn score(&self) -> i64 {
    self.score
  }

  /// Returns whether the game has ended.
  pub fn is_over(&self) -> bool {
    self.game_over
  }

  /// Records the robot picking up an artifact. The score saturates at
  /// `i64::MAX`.
  pub fn collect_artifact(&mut self) {
    self.score = self.score.saturating_add(1);
  }

  /// Records the robot running into a rock. The game ends once the score is
  /// used up.
  pub fn hit_rock(&mut self) {
    self.score = self.score.saturating_sub(1);
    if self.score <= 0 {
      self.game_over = true;
    }
  }

  /// Returns the text the score banner should show.
  pub fn banner(&self) -> String {
    format!("Score: {}", self.score)
  }
}

/// Sequences play: input, then updates, then output, every frame.
pub struct Director<K, D> {
  keyboard: K,
  display: D,
  fall_velocity: Point,
}

impl<K: KeyboardService, D: DisplayService> Director<K, D> {
  /// Creates a new `Director` that moves artifacts and rocks by
  /// `fall_velocity` every frame.
  pub fn new(keyboard: K, display: D, fall_velocity: Point) -> Self {
    Self {
      keyboard,
      display,
      fall_velocity,
    }
  }

  /// Runs the game loop over `cast` until the window is closed, returning
  /// the final state.
  ///
  /// The game closes the window itself once `state` is over. On error, the
  /// window is closed before returning.
  pub fn start_game(
    &mut self,
    cast: &mut Cast,
    mut state: GameState,
  ) -> Result<GameState> {
    self.display.open_window()?;
    match self.run(cast, &mut state) {
      Ok(()) => Ok(state),
      Err(e) => {
        tracing::error!(error = %e, "game stopped");
        if let Err(close) = self.display.close_window() {
          tracing::warn!(error = %close, "failed to close window after error");
        }
        Err(e)
      }
    }
  }

  fn run(&mut self, cast: &mut Cast, state: &mut GameState) -> Result<()> {
    while self.display.is_window_open()? {
      self.get_inputs(cast)?;
      self.do_updates(cast, state)?;
      self.do_outputs(cast)?;
      if self.is_over(state) {
        tracing::info!(score = state.score(), "game over");
        self.display.close_window()?;
      }
    }
    Ok(())
  }

  /// Steers the robot with the keyboard.
  fn get_inputs(&mut self, cast: &mut Cast) -> Result<()> {
    let robot = cast
      .get_first_actor_mut(groups::ROBOTS)
      .ok_or_else(|| GameError::missing(groups::ROBOTS))?;
    robot.set_velocity(self.keyboard.get_direction());
    Ok(())
  }

  /// Moves everything and resolves collisions with the robot.
  fn do_updates(
    &mut self,
    cast: &mut Cast,
    state: &mut GameState,
  ) -> Result<()> {
    set_banner(cast, state)?;

    let max_x = self.display.get_width();
    let max_y = self.display.get_height();

    let robot = cast
      .get_first_actor_mut(groups::ROBOTS)
      .ok_or_else(|| GameError::missing(groups::ROBOTS))?;
    robot.move_next(max_x, max_y);
    let robot_pos = robot.position();

    let mut fall = |group: &str| {
      let mut hits = Vec::new();
      for (id, actor) in cast.get_actors_mut(group) {
        actor.set_velocity(self.fall_velocity);
        actor.move_next(max_x, max_y);
        if actor.position() == robot_pos {
          hits.push(id);
        }
      }
      for &id in &hits {
        cast.remove_actor(group, id);
      }
      hits.len()
    };

    let collected = fall(groups::ARTIFACTS);
    let crashed = fall(groups::ROCKS);
    for _ in 0..collected {
      state.collect_artifact();
    }
    for _ in 0..crashed {
      state.hit_rock();
    }
    if collected + crashed > 0 {
      tracing::debug!(
        collected,
        crashed,
        score = state.score(),
        "robot collided"
      );
    }

    set_banner(cast, state)
  }

  fn is_over(&self, state: &GameState) -> bool {
    state.is_over()
  }

  /// Draws the whole cast.
  fn do_outputs(&mut self, cast: &Cast) -> Result<()> {
    self.display.clear_buffer()?;
    self.display.draw_actors(cast.get_all_actors())?;
    self.display.flush_buffer()
  }
}

fn set_banner(cast: &mut Cast, state: &GameState) -> Result<()> {
  let banner = cast
    .get_first_actor_mut(groups::BANNERS)
    .ok_or_else(|| GameError::missing(groups::BANNERS))?;
  banner.set_text(state.banner());
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;

  use super::*;
  use crate::actor::Actor;

  const CELL: i64 = 15;
  const FALL: Point = Point::new(0, 5);

  #[derive(Default)]
  struct FakeKeyboard {
    directions: VecDeque<Point>,
  }

  impl KeyboardService for FakeKeyboard {
    fn get_direction(&mut self) -> Point {
      self.directions.pop_front().unwrap_or_default()
    }
  }

  /// Records what was drawn in each frame; closes itself after a fixed number
  /// of frames.
  struct FakeDisplay {
    open: bool,
    frames_left: usize,
    frames: Vec<Vec<(String, Point)>>,
    closed_by_game: bool,
  }

  impl FakeDisplay {
    fn new(frames: usize) -> Self {
      Self {
        open: false,
        frames_left: frames,
        frames: Vec::new(),
        closed_by_game: false,
      }
    }
  }

  impl DisplayService for FakeDisplay {
    fn open_window(&mut self) -> Result<()> {
      self.open = true;
      Ok(())
    }

    fn is_window_open(&mut self) -> Result<bool> {
      if self.frames_left == 0 {
        self.open = false;
      }
      self.frames_left = self.frames_left.saturating_sub(1);
      Ok(self.open)
    }

    fn get_width(&self) -> i64 {
      60 * CELL
    }

    fn get_height(&self) -> i64 {
      40 * CELL
    }

    fn clear_buffer(&mut self) -> Result<()> {
      self.frames.push(Vec::new());
      Ok(())
    }

    fn draw_actor(&mut self, actor: &Actor) -> Result<()> {
      let frame = self.frames.last_mut().expect("draw before clear");
      frame.push((actor.text().to_string(), actor.position()));
      Ok(())
    }

    fn flush_buffer(&mut self) -> Result<()> {
      Ok(())
    }

    fn close_window(&mut self) -> Result<()> {
      if self.open {
        self.closed_by_game = true;
      }
      self.open = false;
      Ok(())
    }
  }

  fn director(frames: usize) -> Director<FakeKeyboard, FakeDisplay> {
    Director::new(FakeKeyboard::default(), FakeDisplay::new(frames), FALL)
  }

  /// A cast with a banner and a robot at `robot`.
  fn cast_with_robot(robot: Point) -> Cast {
    let mut cast = Cast::new();
    cast.add_actor(
      groups::BANNERS,
      Actor::new("").with_position(Point::new(CELL, 0)),
    );
    cast.add_actor(groups::ROBOTS, Actor::new("#").with_position(robot));
    cast
  }

  fn banner(cast: &Cast) -> &str {
    cast.get_first_actor(groups::BANNERS).unwrap().text()
  }

  #[test]
  fn artifact_landing_on_robot_scores() {
    let robot = Point::new(30 * CELL, 39 * CELL);
    let mut cast = cast_with_robot(robot);
    cast.add_actor(
      groups::ARTIFACTS,
      Actor::new("*").with_position(robot - FALL),
    );
    cast.add_actor(groups::ARTIFACTS, Actor::new("*"));

    let mut state = GameState::new(600);
    let mut d = director(1);
    d.do_updates(&mut cast, &mut state).unwrap();

    assert_eq!(state.score(), 601);
    assert!(!state.is_over());
    assert_eq!(cast.count(groups::ARTIFACTS), 1);
    assert_eq!(banner(&cast), "Score: 601");
  }

  #[test]
  fn rock_landing_on_robot_costs_a_point() {
    let robot = Point::new(10 * CELL, 20 * CELL);
    let mut cast = cast_with_robot(robot);
    cast.add_actor(groups::ROCKS, Actor::new("o").with_position(robot - FALL));

    let mut state = GameState::new(600);
    let mut d = director(1);
    d.do_updates(&mut cast, &mut state).unwrap();

    assert_eq!(state.score(), 599);
    assert!(!state.is_over());
    assert_eq!(cast.count(groups::ROCKS), 0);
    assert_eq!(banner(&cast), "Score: 599");
  }

  #[test]
  fn last_point_lost_ends_the_game() {
    let robot = Point::new(10 * CELL, 20 * CELL);
    let mut cast = cast_with_robot(robot);
    cast.add_actor(groups::ROCKS, Actor::new("o").with_position(robot - FALL));

    let mut state = GameState::new(1);
    let mut d = director(1);
    d.do_updates(&mut cast, &mut state).unwrap();

    assert_eq!(state.score(), 0);
    assert!(state.is_over());
    assert!(d.is_over(&state));
  }

  #[test]
  fn simultaneous_rocks_cannot_skip_game_over() {
    let robot = Point::new(10 * CELL, 20 * CELL);
    let mut cast = cast_with_robot(robot);
    for _ in 0..3 {
      let rock = Actor::new("o").with_position(robot - FALL);
      cast.add_actor(groups::ROCKS, rock);
    }

    let mut state = GameState::new(2);
    director(1).do_updates(&mut cast, &mut state).unwrap();

    assert_eq!(state.score(), -1);
    assert!(state.is_over());
    assert_eq!(cast.count(groups::ROCKS), 0);
  }

  #[test]
  fn quiet_frame_only_moves_things() {
    let mut cast = cast_with_robot(Point::new(0, 0));
    cast.add_actor(
      groups::ARTIFACTS,
      Actor::new("*").with_position(Point::new(5 * CELL, 2 * CELL)),
    );
    cast.add_actor(
      groups::ROCKS,
      Actor::new("o").with_position(Point::new(7 * CELL, 40 * CELL - 5)),
    );

    let mut d = director(1);
    d.keyboard.directions.push_back(Point::new(-CELL, 0));
    let mut state = GameState::new(600);
    d.get_inputs(&mut cast).unwrap();
    d.do_updates(&mut cast, &mut state).unwrap();

    assert_eq!(state, GameState::new(600));
    assert_eq!(cast.count(groups::ARTIFACTS), 1);
    assert_eq!(cast.count(groups::ROCKS), 1);
    assert_eq!(
      cast.get_first_actor(groups::ROBOTS).unwrap().position(),
      Point::new(59 * CELL, 0)
    );
    assert_eq!(
      cast.get_first_actor(groups::ARTIFACTS).unwrap().position(),
      Point::new(5 * CELL, 2 * CELL + 5)
    );
    assert_eq!(
      cast.get_first_actor(groups::ROCKS).unwrap().position(),
      Point::new(7 * CELL, 0)
    );
    assert_eq!(banner(&cast), "Score: 600");
  }

  #[test]
  fn score_saturates_at_the_extremes() {
    let mut state = GameState::new(i64::MAX);
    state.collect_artifact();
    assert_eq!(state.score(), i64::MAX);
    assert!(!state.is_over());

    let mut state = GameState::new(i64::MIN);
    state.hit_rock();
    assert_eq!(state.score(), i64::MIN);
    assert!(state.is_over());
  }

  #[test]
  fn missing_robot_or_banner_fails_fast() {
    let mut cast = Cast::new();
    cast.add_actor(groups::ROBOTS, Actor::new("#"));
    let err = director(1)
      .do_updates(&mut cast, &mut GameState::new(600))
      .unwrap_err();
    assert!(
      matches!(err, GameError::MissingActor { ref group } if group == "banners")
    );

    let mut cast = Cast::new();
    cast.add_actor(groups::BANNERS, Actor::new(""));
    let mut d = director(5);
    let err = d.start_game(&mut cast, GameState::new(600)).unwrap_err();
    assert!(
      matches!(err, GameError::MissingActor { ref group } if group == "robots")
    );
    assert!(d.display.closed_by_game);
  }

  #[test]
  fn game_runs_until_the_window_closes() {
    let mut cast = cast_with_robot(Point::new(0, 0));
    cast.add_actor(groups::ROCKS, Actor::new("o"));

    let mut d = director(3);
    let state = d.start_game(&mut cast, GameState::new(600)).unwrap();

    assert_eq!(state.score(), 600);
    assert!(!d.display.closed_by_game);
    assert_eq!(d.display.frames.len(), 3);

    let last = d.display.frames.last().unwrap();
    let texts: Vec<_> = last.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts, ["Score: 600", "#", "o"]);
    assert_eq!(last[2].1, Point::new(0, 15));
  }

  #[test]
  fn game_over_closes_the_window() {
    let robot = Point::new(0, 0);
    let mut cast = cast_with_robot(robot);
    cast.add_actor(groups::ROCKS, Actor::new("o").with_position(robot - FALL));

    let mut d = director(100);
    let state = d.start_game(&mut cast, GameState::new(1)).unwrap();

    assert!(state.is_over());
    assert_eq!(state.score(), 0);
    assert!(d.display.closed_by_game);
    assert_eq!(d.display.frames.len(), 1);
    assert_eq!(d.display.frames[0][0].0, "Score: 0");
  }
}
