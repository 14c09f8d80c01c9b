// Interactive pendulum.
//
// Space starts and stops the animation, 1/2/3 select a parameter and the left/right
// arrow keys adjust it by one step.

use bevy::{color::palettes::css, math::Isometry2d, prelude::*};
use pendulum::{
    ecs::{Pendulum, PendulumFrame, PendulumPlugin},
    Parameter, Point,
};

#[derive(Resource)]
struct Selected(Parameter);

#[derive(Component)]
struct Readout;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Driven, damped pendulum".into(),
                    resolution: (400., 400.).into(),
                    ..default()
                }),
                ..default()
            }),
            PendulumPlugin::default(),
        ))
        .insert_resource(Selected(Parameter::Damping))
        .add_systems(Startup, setup)
        .add_systems(Update, (handle_input, draw_pendulum, update_readout).chain())
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.),
            left: Val::Px(8.),
            ..default()
        },
        Readout,
    ));
}

fn handle_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut pendulum: ResMut<Pendulum>,
    mut selected: ResMut<Selected>,
) {
    if keys.just_pressed(KeyCode::Space) {
        pendulum.toggle();
    }

    for (key, parameter) in [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3]
        .into_iter()
        .zip(Parameter::ALL)
    {
        if keys.just_pressed(key) {
            selected.0 = parameter;
        }
    }

    if keys.just_pressed(KeyCode::ArrowRight) {
        pendulum.params_mut().nudge(selected.0, 1);
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        pendulum.params_mut().nudge(selected.0, -1);
    }
}

fn draw_pendulum(mut gizmos: Gizmos, pendulum: Res<Pendulum>, frame: Res<PendulumFrame>) {
    let geometry = pendulum.geometry();

    // Canvas pixels have y growing downward from the top-left corner.
    let to_world = |point: Point| {
        Vec2::new(
            (point.x - geometry.width / 2) as f32,
            (geometry.height / 2 - point.y) as f32,
        )
    };

    let pivot = to_world(frame.0.projection.pivot);
    let bob = to_world(frame.0.projection.bob);

    gizmos.line_2d(pivot, bob, css::WHITE);
    gizmos.circle_2d(
        Isometry2d::from_translation(bob),
        geometry.bob_diameter as f32 / 2.,
        css::RED,
    );
    gizmos.circle_2d(
        Isometry2d::from_translation(pivot),
        geometry.pivot_diameter as f32 / 2.,
        css::WHITE,
    );
}

fn update_readout(
    pendulum: Res<Pendulum>,
    selected: Res<Selected>,
    mut readouts: Query<&mut Text, With<Readout>>,
) {
    let mut lines: Vec<_> = Parameter::ALL
        .into_iter()
        .map(|parameter| {
            let marker = if parameter == selected.0 { '>' } else { ' ' };
            format!(
                "{marker} {parameter} = {:.2}",
                pendulum.params().parameter(parameter)
            )
        })
        .collect();

    lines.push(String::from(if pendulum.is_running() {
        "[Space] Stop"
    } else {
        "[Space] Start"
    }));

    for mut text in &mut readouts {
        text.0 = lines.join("\n");
    }
}
