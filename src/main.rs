//! Headless demo harness
//!
//! Runs the physics core with a scripted input sequence at a fixed 60 Hz
//! timestep and logs player state. A rendering host would replace the
//! scripted loop with measured frame times and real key state, reading the
//! same accessors to draw.
//!
//! Pass a JSON file as the first argument to override the default tuning.

use sweepbox::Tuning;
use sweepbox::sim::{Extent2, FrameInput, Map, Player, Point2, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let tuning = Tuning::from_json_str(&json)?;
            log::info!("loaded tuning from {path}");
            tuning
        }
        None => Tuning::default(),
    };

    // World proportions from a 100-unit-wide view: the map is ten views
    // wide, the floor sits a third of the way up, the player is a tenth of
    // a view on each side.
    let map = Map::new(1000.0, 100.0, 100.0 / 3.0);
    let player = Player::new(Extent2::new(10.0, 10.0), Point2::new(50.0, 60.0));
    let mut sim = Simulation::new(map, player, tuning);

    let dt = 1.0 / 60.0;
    for frame in 0..300u32 {
        let input = FrameInput {
            right: frame < 120,
            up: (30..40).contains(&frame),
            ..FrameInput::default()
        };

        sim.advance(dt, input);

        if frame % 60 == 0 {
            let p = sim.player();
            log::info!(
                "frame {frame}: pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) accel=({:.2}, {:.2})",
                p.position.x,
                p.position.y,
                p.velocity.x,
                p.velocity.y,
                p.acceleration.x,
                p.acceleration.y
            );
        }
    }

    let p = sim.player();
    println!(
        "final position after 300 frames: ({:.2}, {:.2})",
        p.position.x, p.position.y
    );

    Ok(())
}
