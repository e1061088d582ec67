//! Building the opening cast.

use rand::Rng;

use crate::actor::Actor;
use crate::cast::groups;
use crate::cast::Cast;
use crate::config::Config;
use crate::geo::Point;
use crate::gfx::texel::colors;
use crate::gfx::texel::Rgb;

/// What artifacts are drawn as.
pub const ARTIFACT_GLYPH: &str = "*";
/// What rocks are drawn as.
pub const ROCK_GLYPH: &str = "o";
/// What the robot is drawn as.
pub const ROBOT_GLYPH: &str = "#";

fn random_color(rng: &mut impl Rng) -> Rgb {
  // Keep channels away from black so everything shows on a dark terminal.
  Rgb::new(
    rng.gen_range(64..=255),
    rng.gen_range(64..=255),
    rng.gen_range(64..=255),
  )
}

/// Builds the cast a new game starts with.
///
/// The banner sits in the top row and the robot in the middle of the bottom
/// row. Artifacts and rocks are scattered over the remaining rows, on cell
/// boundaries, so that once they fall into the robot's row they land exactly
/// on one of its positions.
///
/// `config` is expected to have passed [`Config::validate`].
pub fn build_cast(config: &Config, rng: &mut impl Rng) -> Cast {
  let cell = i64::from(config.cell_size);
  let columns = i64::from(config.columns);
  let rows = i64::from(config.rows);

  let mut cast = Cast::new();
  cast.add_actor(
    groups::BANNERS,
    Actor::new("").with_position(Point::new(cell, 0)),
  );
  cast.add_actor(
    groups::ROBOTS,
    Actor::new(ROBOT_GLYPH)
      .with_position(Point::new(columns / 2, rows - 1) * cell)
      .with_color(colors::WHITE)
      .bold(),
  );

  // Rows strictly between the banner and the robot. A field of two rows has
  // none, so falling actors share the banner's row instead.
  let bottom = (rows - 1).max(1);
  let top = (bottom - 1).min(1);
  let falling = [
    (groups::ARTIFACTS, ARTIFACT_GLYPH, config.artifacts),
    (groups::ROCKS, ROCK_GLYPH, config.rocks),
  ];
  for (group, glyph, count) in falling {
    for _ in 0..count {
      let cell_pos =
        Point::new(rng.gen_range(0..columns), rng.gen_range(top..bottom));
      let actor = Actor::new(glyph)
        .with_position(cell_pos * cell)
        .with_color(random_color(rng));
      cast.add_actor(group, actor);
    }
  }

  tracing::debug!(
    artifacts = config.artifacts,
    rocks = config.rocks,
    "built opening cast"
  );
  cast
}
