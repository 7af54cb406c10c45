#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Camera to pitch calibration from four correspondences.
pub mod calibration;

/// Keyed model lookup with fallbacks.
pub mod catalog;

/// Match tracking data model.
pub mod data;

/// Error types for the match module.
pub mod error;

/// Mapping of tracked positions onto the pitch.
pub mod pitch;

/// Frame rate paced playback.
pub mod playback;

/// Scene state updated frame by frame.
pub mod scene;

pub use calibration::Calibration;
pub use catalog::ModelCatalog;
pub use data::{Ball, Frame, MatchData, Player, Referee};
pub use error::MatchError;
pub use pitch::{PitchMapping, PositionMapper};
pub use playback::{Playback, PlaybackClock};
pub use scene::{Actor, FrameUpdate, Role, SceneState};
