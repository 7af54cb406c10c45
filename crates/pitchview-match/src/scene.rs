use std::collections::{HashMap, HashSet};

use crate::data::{Frame, Player};
use crate::pitch::PositionMapper;

/// Role of a tracked person on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Outfield player.
    Player,
    /// Goalkeeper.
    Goalkeeper,
}

/// A player or goalkeeper placed on the pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Track id.
    pub id: u32,
    /// Team the actor belongs to.
    pub team_id: u32,
    /// Player or goalkeeper.
    pub role: Role,
    /// Position on the pitch as `[x, height, z]`.
    pub position: [f64; 3],
}

/// Changes produced by applying one frame to the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameUpdate {
    /// Index of the applied frame.
    pub frame_index: usize,
    /// Ids that appeared in this frame, sorted.
    pub spawned: Vec<u32>,
    /// Ids that disappeared in this frame, sorted.
    pub despawned: Vec<u32>,
    /// Number of detections skipped because of malformed positions.
    pub skipped: usize,
}

/// Everything that is currently placed on the pitch.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    actors: HashMap<u32, Actor>,
    referees: Vec<[f64; 3]>,
    balls: Vec<[f64; 3]>,
    frame_index: Option<usize>,
}

impl SceneState {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an actor by its track id.
    pub fn actor(&self, id: u32) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Iterate over the actors on the pitch in no particular order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// The number of actors on the pitch.
    pub fn num_actors(&self) -> usize {
        self.actors.len()
    }

    /// Referee positions.
    pub fn referees(&self) -> &[[f64; 3]] {
        &self.referees
    }

    /// Ball positions.
    pub fn balls(&self) -> &[[f64; 3]] {
        &self.balls
    }

    /// Index of the last applied frame.
    pub fn frame_index(&self) -> Option<usize> {
        self.frame_index
    }

    /// Remove everything from the scene.
    pub fn clear(&mut self) {
        self.actors.clear();
        self.referees.clear();
        self.balls.clear();
        self.frame_index = None;
    }

    /// Apply the detections of a frame to the scene.
    ///
    /// Players also listed as goalkeepers are placed by the goalkeeper pass.
    /// Actors missing from the frame are removed. Referees and balls are
    /// resized to the frame counts, new slots start at the origin.
    /// Detections with malformed positions are skipped and keep their
    /// previous placement.
    pub fn apply_frame(&mut self, frame: &Frame, mapper: &PositionMapper) -> FrameUpdate {
        let mut update = FrameUpdate {
            frame_index: frame.frame_index,
            ..Default::default()
        };
        let mut present = HashSet::new();

        let outfield = frame
            .players
            .iter()
            .filter(|p| !frame.is_goalkeeper(p.id))
            .map(|p| (p, Role::Player));
        let goalkeepers = frame.goalkeepers.iter().map(|p| (p, Role::Goalkeeper));

        for (player, role) in outfield.chain(goalkeepers) {
            present.insert(player.id);
            if !self.place_actor(player, role, mapper, &mut update) {
                update.skipped += 1;
            }
        }

        let mut despawned = self
            .actors
            .keys()
            .filter(|id| !present.contains(*id))
            .copied()
            .collect::<Vec<_>>();
        for id in despawned.iter() {
            self.actors.remove(id);
        }
        despawned.sort_unstable();
        update.despawned = despawned;
        update.spawned.sort_unstable();

        let referee_positions = frame.referees.iter().map(|r| r.position.as_slice());
        update.skipped += place_markers(&mut self.referees, referee_positions, mapper);

        let ball_positions = frame.balls.iter().map(|b| b.position.as_slice());
        update.skipped += place_markers(&mut self.balls, ball_positions, mapper);

        self.frame_index = Some(frame.frame_index);
        update
    }

    // returns false if the position could not be mapped
    fn place_actor(
        &mut self,
        player: &Player,
        role: Role,
        mapper: &PositionMapper,
        update: &mut FrameUpdate,
    ) -> bool {
        let position = match mapper.map(&player.position) {
            Ok(position) => position,
            Err(e) => {
                log::warn!("skipping player {}: {}", player.id, e);
                return false;
            }
        };

        match self.actors.get_mut(&player.id) {
            Some(actor) => {
                actor.position = position;
                actor.role = role;
                actor.team_id = player.team_id;
            }
            None => {
                self.actors.insert(
                    player.id,
                    Actor {
                        id: player.id,
                        team_id: player.team_id,
                        role,
                        position,
                    },
                );
                update.spawned.push(player.id);
            }
        }
        true
    }
}

fn place_markers<'a>(
    slots: &mut Vec<[f64; 3]>,
    positions: impl ExactSizeIterator<Item = &'a [f64]>,
    mapper: &PositionMapper,
) -> usize {
    slots.resize(positions.len(), [0.0; 3]);
    let mut skipped = 0;
    for (slot, position) in slots.iter_mut().zip(positions) {
        match mapper.map(position) {
            Ok(mapped) => *slot = mapped,
            Err(e) => {
                log::warn!("skipping marker: {}", e);
                skipped += 1;
            }
        }
    }
    skipped
}
