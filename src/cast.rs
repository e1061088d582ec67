//! The cast: every actor in play, grouped by role.

use crate::actor::Actor;

/// Well-known group names.
pub mod groups {
  /// The player-controlled actor. Exactly one is expected during play.
  pub const ROBOTS: &str = "robots";
  /// Falling actors worth a point each.
  pub const ARTIFACTS: &str = "artifacts";
  /// Falling actors that cost a point each.
  pub const ROCKS: &str = "rocks";
  /// Text actors; the first one shows the score.
  pub const BANNERS: &str = "banners";
}

/// A stable handle to an actor in a [`Cast`].
///
/// Ids are never reused within a single `Cast`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct ActorId(u64);

#[derive(Clone, Debug)]
struct Group {
  name: String,
  members: Vec<(ActorId, Actor)>,
}

/// A collection of actors, organized into named groups.
///
/// Groups are kept in the order they were first added to, and actors within a
/// group in the order they were added; "first actor" lookups and drawing order
/// both follow this ordering.
#[derive(Clone, Debug, Default)]
pub struct Cast {
  groups: Vec<Group>,
  next_id: u64,
}

impl Cast {
  /// Creates a new, empty `Cast`.
  pub fn new() -> Self {
    Self::default()
  }

  fn group(&self, name: &str) -> Option<&Group> {
    self.groups.iter().find(|g| g.name == name)
  }

  fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
    self.groups.iter_mut().find(|g| g.name == name)
  }

  /// Adds `actor` to the end of `group`, creating the group if needed.
  pub fn add_actor(&mut self, group: &str, actor: Actor) -> ActorId {
    let id = ActorId(self.next_id);
    self.next_id += 1;

    let idx = match self.groups.iter().position(|g| g.name == group) {
      Some(idx) => idx,
      None => {
        self.groups.push(Group {
          name: group.to_string(),
          members: Vec::new(),
        });
        self.groups.len() - 1
      }
    };
    self.groups[idx].members.push((id, actor));
    id
  }

  /// Removes the actor `id` from `group`, returning it.
  ///
  /// Returns `None` if no such actor is in that group. Empty groups are kept
  /// around, so they retain their place in the drawing order.
  pub fn remove_actor(&mut self, group: &str, id: ActorId) -> Option<Actor> {
    let members = &mut self.group_mut(group)?.members;
    let idx = members.iter().position(|(i, _)| *i == id)?;
    Some(members.remove(idx).1)
  }

  /// Returns the first actor in `group`, if there is one.
  pub fn get_first_actor(&self, group: &str) -> Option<&Actor> {
    self.group(group)?.members.first().map(|(_, a)| a)
  }

  /// Returns the first actor in `group` mutably, if there is one.
  pub fn get_first_actor_mut(&mut self, group: &str) -> Option<&mut Actor> {
    self.group_mut(group)?.members.first_mut().map(|(_, a)| a)
  }

  /// Returns every actor in `group` in insertion order, along with its id.
  pub fn get_actors(
    &self,
    group: &str,
  ) -> impl Iterator<Item = (ActorId, &Actor)> + '_ {
    self
      .group(group)
      .into_iter()
      .flat_map(|g| g.members.iter().map(|(id, a)| (*id, a)))
  }

  /// Returns every actor in `group` mutably, in insertion order.
  pub fn get_actors_mut(
    &mut self,
    group: &str,
  ) -> impl Iterator<Item = (ActorId, &mut Actor)> + '_ {
    self
      .group_mut(group)
      .into_iter()
      .flat_map(|g| g.members.iter_mut().map(|(id, a)| (*id, a)))
  }

  /// Returns the number of actors in `group`.
  pub fn count(&self, group: &str) -> usize {
    self.group(group).map(|g| g.members.len()).unwrap_or(0)
  }

  /// Returns every actor in every group, group by group.
  pub fn get_all_actors(&self) -> impl Iterator<Item = &Actor> + '_ {
    self
      .groups
      .iter()
      .flat_map(|g| g.members.iter().map(|(_, a)| a))
  }
}
