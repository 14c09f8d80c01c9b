use futures::StreamExt;
use pendulum::prelude::*;
use std::time::Duration;
use tokio::time;

#[tokio::test(start_paused = true)]
async fn it_holds_still_until_started() {
    let animator = Animator::spawn(Simulation::default());
    time::sleep(Duration::from_millis(100)).await;

    let frame = animator.frame();
    assert!(!animator.is_running());
    assert_eq!(frame.tick, 0);
    assert_eq!(frame.state, PendulumState::default());

    let simulation = animator.shutdown().await.unwrap();
    assert_eq!(*simulation.state(), PendulumState::default());
}

#[tokio::test(start_paused = true)]
async fn it_advances_once_per_frame_period() {
    let animator = Animator::spawn(Simulation::default());
    animator.toggle();
    assert!(animator.is_running());

    time::sleep(Duration::from_millis(105)).await;
    let simulation = animator.shutdown().await.unwrap();

    let ticks = simulation.frame().tick;
    assert!((9..=12).contains(&ticks), "ticks = {ticks}");

    let mut expected = Simulation::builder().running(true).build().unwrap();
    for _ in 0..ticks {
        expected.tick();
    }
    assert_eq!(simulation.state(), expected.state());
}

#[tokio::test(start_paused = true)]
async fn it_clamps_parameters() {
    let animator = Animator::spawn(Simulation::default());

    assert_eq!(animator.set("damping", 5.).unwrap(), 1.);
    assert_eq!(animator.get("damping").unwrap(), 1.);
    assert_eq!(animator.parameters().damping, 1.);
    assert!(matches!(
        animator.set("mass", 1.),
        Err(Error::InvalidParameter { .. })
    ));

    time::sleep(Duration::from_millis(20)).await;
    assert_eq!(animator.frame().params.damping, 1.);

    let simulation = animator.shutdown().await.unwrap();
    assert_eq!(simulation.params().parameter(Parameter::Damping), 1.);
}

#[tokio::test(start_paused = true)]
async fn it_streams_frames() {
    let animator = Animator::spawn(Simulation::builder().running(true).build().unwrap());

    let frames = animator.frames();
    tokio::pin!(frames);

    let first = frames.next().await.unwrap();
    let second = frames.next().await.unwrap();
    assert!(second.tick > first.tick);
    assert!(second.state.t > first.state.t);

    animator.shutdown().await.unwrap();
    while frames.next().await.is_some() {}
}

#[tokio::test(start_paused = true)]
async fn it_pauses_and_resumes() {
    let animator = Animator::spawn(Simulation::builder().running(true).build().unwrap());
    time::sleep(Duration::from_millis(45)).await;

    animator.toggle();
    time::sleep(Duration::from_millis(15)).await;
    let paused = animator.frame();

    time::sleep(Duration::from_millis(100)).await;
    assert_eq!(animator.frame().state, paused.state);
    assert_eq!(animator.frame().run_state, RunState::Paused);

    animator.toggle();
    time::sleep(Duration::from_millis(50)).await;
    assert!(animator.frame().tick > paused.tick);

    animator.shutdown().await.unwrap();
}
