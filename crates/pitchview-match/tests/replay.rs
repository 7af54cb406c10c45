use std::time::Duration;

use approx::assert_relative_eq;
use pitchview_match::{
    Calibration, MatchData, PitchMapping, Playback, PlaybackClock, PositionMapper, Role,
    SceneState,
};

const CALIBRATION_JSON: &str = r#"{
    "image_points": [{"x": 0.0, "y": 0.0}, {"x": 200.0, "y": 0.0}, {"x": 200.0, "y": 100.0}, {"x": 0.0, "y": 100.0}],
    "pitch_points": [{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 0.0}, {"x": 100.0, "y": 50.0}, {"x": 0.0, "y": 50.0}]
}"#;

const MATCH_JSON: &str = r#"{
    "frames": [
        {
            "frame_index": 0,
            "players": [
                {"id": 1, "team_id": 0, "position": [20.0, 40.0]},
                {"id": 2, "team_id": 1, "position": [180.0, 60.0]}
            ],
            "goalkeepers": [{"id": 2, "team_id": 1, "position": [180.0, 60.0]}],
            "referees": [{"position": [100.0, 50.0]}],
            "balls": [{"position": [22.0, 40.0]}]
        },
        {
            "frame_index": 1,
            "players": [{"id": 1, "team_id": 0, "position": [40.0, 40.0]}],
            "goalkeepers": [],
            "referees": null,
            "balls": [{"position": [44.0, 40.0]}]
        }
    ]
}"#;

#[test]
fn replay_through_calibrated_mapping() -> Result<(), Box<dyn std::error::Error>> {
    let calibration = Calibration::from_json_str(CALIBRATION_JSON)?;
    let homography = calibration.image_to_pitch()?;
    let mapper = PositionMapper::new(PitchMapping::default()).with_homography(homography);

    let data = MatchData::from_json_str(MATCH_JSON)?;
    let mut playback = Playback::new(PlaybackClock::new(25.0)?, data.len());
    let mut scene = SceneState::new();

    let mut elapsed = Duration::ZERO;
    let mut updates = Vec::new();
    while !playback.is_finished() {
        if let Some(index) = playback.advance(elapsed) {
            updates.push(scene.apply_frame(&data.frames[index], &mapper));
        }
        elapsed += Duration::from_millis(10);
    }

    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].spawned, vec![1, 2]);
    assert_eq!(updates[1].despawned, vec![2]);
    assert_eq!(scene.frame_index(), Some(1));

    // image (40, 40) -> pitch (20, 20) -> scene (12 - 2, 0.1, 2)
    let player = scene.actor(1).map(|a| a.position).unwrap_or_default();
    assert_relative_eq!(player[0], 10.0, epsilon = 1e-6);
    assert_relative_eq!(player[1], 0.1, epsilon = 1e-12);
    assert_relative_eq!(player[2], 2.0, epsilon = 1e-6);

    assert!(scene.referees().is_empty());
    assert_eq!(scene.balls().len(), 1);
    assert_relative_eq!(scene.balls()[0][0], 12.0 - 2.2, epsilon = 1e-6);
    Ok(())
}

#[test]
fn goalkeeper_role_follows_frame() -> Result<(), Box<dyn std::error::Error>> {
    let data = MatchData::from_json_str(MATCH_JSON)?;
    let mapper = PositionMapper::default();
    let mut scene = SceneState::new();

    scene.apply_frame(&data.frames[0], &mapper);
    assert_eq!(scene.actor(2).map(|a| a.role), Some(Role::Goalkeeper));
    assert_eq!(scene.actor(1).map(|a| a.role), Some(Role::Player));
    assert_eq!(scene.referees().len(), 1);
    Ok(())
}
