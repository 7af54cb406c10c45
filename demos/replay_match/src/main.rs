use argh::FromArgs;
use std::path::PathBuf;
use std::time::Duration;

use pitchview_match::{
    catalog, Calibration, MatchData, ModelCatalog, PitchMapping, Playback, PlaybackClock,
    PositionMapper, SceneState,
};

#[derive(FromArgs)]
/// Replay football tracking data on the pitch plane
struct Args {
    /// path to the match data json file
    #[argh(option)]
    match_data: PathBuf,

    /// path to the camera calibration json file
    #[argh(option)]
    calibration: Option<PathBuf>,

    /// playback frame rate
    #[argh(option, default = "25.0")]
    fps: f64,

    /// maximum number of frames to replay
    #[argh(option)]
    max_frames: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let data = MatchData::from_path(&args.match_data)?;
    println!("Loaded #{} frames", data.len());

    let mut mapper = PositionMapper::new(PitchMapping::default());
    if let Some(path) = args.calibration {
        let homography = Calibration::from_path(path)?.image_to_pitch()?;
        println!("Image to pitch homography: {:?}", homography.as_array());
        mapper = mapper.with_homography(homography);
    }

    // placeholder models, one per team variant plus the referee
    let mut models = ModelCatalog::new();
    for team_id in 0..2 {
        for variant in 0..catalog::NUM_DEFAULT_VARIANTS {
            models.insert(
                catalog::player_key(team_id, variant),
                format!("team{team_id}-kit{variant}"),
            );
        }
    }
    models.insert(catalog::REFEREE_KEY, "referee".to_string());

    let num_frames = args.max_frames.map_or(data.len(), |n| n.min(data.len()));
    let clock = PlaybackClock::new(args.fps)?;
    let mut playback = Playback::new(clock, num_frames);
    let mut scene = SceneState::new();
    let mut rng = rand::rng();

    // simulated clock ticking twice per frame
    let tick = (clock.frame_interval() / 2).max(Duration::from_nanos(1));
    let mut elapsed = Duration::ZERO;
    while !playback.is_finished() {
        if let Some(index) = playback.advance(elapsed) {
            let update = scene.apply_frame(&data.frames[index], &mapper);
            for id in update.spawned.iter() {
                let Some(actor) = scene.actor(*id) else {
                    continue;
                };
                let model = models
                    .player_model(actor.team_id, actor.id, &mut rng)
                    .map_or("default", |m| m.as_str());
                log::info!("spawn player {} ({:?}) with model {}", id, actor.role, model);
            }
            println!(
                "[{:>8.3}s] frame {:>5}: {} actors (+{} -{}), {} referees, {} balls, {} skipped",
                elapsed.as_secs_f64(),
                update.frame_index,
                scene.num_actors(),
                update.spawned.len(),
                update.despawned.len(),
                scene.referees().len(),
                scene.balls().len(),
                update.skipped,
            );
        }
        elapsed += tick;
    }

    if let Some(model) = models.referee_model() {
        log::debug!("referee model: {}", model);
    }

    Ok(())
}
