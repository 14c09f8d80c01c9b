// Headless animation: run the pendulum on a tokio task and log its frames.

use futures::StreamExt;
use pendulum::prelude::*;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> pendulum::Result<()> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(LevelFilter::DEBUG)
            .finish(),
    )
    .unwrap();

    let animator = Animator::spawn(Simulation::default());
    animator.toggle();

    let frames = animator.frames();
    tokio::pin!(frames);

    let mut is_driven_hard = false;
    while let Some(frame) = frames.next().await {
        info!(
            tick = frame.tick,
            t = frame.state.t,
            theta = frame.state.theta,
            bob = ?frame.projection.bob
        );

        // Push into the chaotic regime halfway through.
        if !is_driven_hard && frame.tick >= 100 {
            let stored = animator.set("driveAmp", 1.15)?;
            info!(stored, "increased drive amplitude");
            is_driven_hard = true;
        }

        if frame.tick >= 200 {
            break;
        }
    }

    let simulation = animator.shutdown().await?;
    info!(
        energy = simulation.state().energy(),
        t = simulation.state().t,
        "done"
    );

    Ok(())
}
