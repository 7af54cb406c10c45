use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MatchError;

/// A tracked player or goalkeeper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Track id, stable across frames.
    pub id: u32,
    /// Team the player belongs to.
    pub team_id: u32,
    /// Position as `[x, y]` in the tracking coordinate system.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: Vec<f64>,
}

/// A tracked referee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referee {
    /// Position as `[x, y]` in the tracking coordinate system.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: Vec<f64>,
}

/// A tracked ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Position as `[x, y]` in the tracking coordinate system.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: Vec<f64>,
}

/// All detections of a single video frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Index of the frame in the source video.
    #[serde(default)]
    pub frame_index: usize,
    /// Outfield players. May also list the goalkeepers.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub players: Vec<Player>,
    /// Goalkeepers.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goalkeepers: Vec<Player>,
    /// Referees.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub referees: Vec<Referee>,
    /// Balls.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub balls: Vec<Ball>,
}

impl Frame {
    /// Whether the given track id is one of the goalkeepers of this frame.
    pub fn is_goalkeeper(&self, id: u32) -> bool {
        self.goalkeepers.iter().any(|gk| gk.id == id)
    }
}

/// The tracking data of a whole match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchData {
    /// Frames in playback order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub frames: Vec<Frame>,
}

impl MatchData {
    /// Parse match data from a json string.
    pub fn from_json_str(json: &str) -> Result<Self, MatchError> {
        let data: MatchData = serde_json::from_str(json)?;
        log::debug!("Number of frames loaded: {}", data.frames.len());
        Ok(data)
    }

    /// Read match data from a json file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MatchError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get a frame by its playback position.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
