//! Drives a dot row through a simulated 60fps frame loop and prints each frame.
//!
//! Run with `RUST_LOG=debug` to see the engine's own log output.

use std::time::Duration;

use pagedots::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let strategy = std::env::args()
        .nth(1)
        .map(AnimationStrategy::from)
        .unwrap_or_default();

    let config = PaginationConfig::new()
        .animation_type(strategy)
        .easing(TimingFunction::EaseInOut)
        .duration(250.0);
    let mut engine = DotsEngine::new(config);

    engine.update(5, 0);
    print_frame(&engine, 0);

    for active in [2, 4, 1] {
        log::info!("moving to page {}", active + 1);
        engine.update(5, active);

        let mut frame = 1;
        while engine.advance(FRAME) {
            print_frame(&engine, frame);
            frame += 1;
        }
        print_frame(&engine, frame);
    }

    engine.teardown();
}

fn print_frame(engine: &DotsEngine, frame: usize) {
    let nodes = engine.render_default();
    let row: Vec<String> = nodes
        .iter()
        .map(|n| format!("{:5.1}w {:.2}a {:+.1}y", n.width, n.opacity, n.translate_y))
        .collect();
    println!("{frame:3} | {}", row.join(" | "));
}
