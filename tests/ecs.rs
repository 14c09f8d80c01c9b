use bevy::{app::FixedUpdate, prelude::*};
use pendulum::prelude::*;
use std::time::Duration;

fn app(simulation: Simulation) -> App {
    let mut app = App::new();
    app.add_plugins(PendulumPlugin::new(simulation));
    app
}

#[test]
fn it_sets_the_fixed_timestep() {
    let app = app(
        Simulation::builder()
            .frame_period(Duration::from_millis(20))
            .build()
            .unwrap(),
    );

    assert_eq!(
        app.world().resource::<Time<Fixed>>().timestep(),
        Duration::from_millis(20)
    );
}

#[test]
fn it_ticks_in_fixed_update() {
    let mut app = app(Simulation::builder().running(true).build().unwrap());

    for _ in 0..3 {
        app.world_mut().run_schedule(FixedUpdate);
    }

    let frame = app.world().resource::<PendulumFrame>().0;
    assert_eq!(frame.tick, 3);
    assert_eq!(frame, app.world().resource::<Pendulum>().frame());
}

#[test]
fn it_toggles_through_the_resource() {
    let mut app = app(Simulation::default());

    app.world_mut().run_schedule(FixedUpdate);
    assert_eq!(app.world().resource::<PendulumFrame>().0.tick, 0);

    app.world_mut().resource_mut::<Pendulum>().toggle();
    app.world_mut()
        .resource_mut::<Pendulum>()
        .params_mut()
        .set_parameter(Parameter::DriveFreq, 0.25);
    app.world_mut().run_schedule(FixedUpdate);

    let frame = app.world().resource::<PendulumFrame>().0;
    assert_eq!(frame.tick, 1);
    assert_eq!(frame.run_state, RunState::Running);
    assert_eq!(frame.params.drive_freq, 0.25);
}
