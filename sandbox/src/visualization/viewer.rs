use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResized};

use crate::simulation::scenario::{Command, Scenario};
use crate::simulation::states::NVec2;
use crate::visualization::color_map::{Rgb, BACKGROUND};

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Shared unit-circle mesh, scaled per particle by its radius
#[derive(Resource)]
struct UnitCircle(Handle<Mesh>);

/// Screen pixels cover this many world units at zoom 1
const WORLD_PER_PIXEL: f32 = 2.0;

fn to_color(c: Rgb) -> Color {
    Color::srgb(c.r, c.g, c.b)
}

pub fn run_2d(scenario: Scenario) {
    tracing::info!("run_2d: starting bevy 2D viewer with {} particles", scenario.system.len());

    // world spans [-half_width, half_width]; one pixel is two world units
    let width = (scenario.parameters.half_width as f32 * 2.0) / WORLD_PER_PIXEL;
    let height = (scenario.parameters.half_height as f32 * 2.0) / WORLD_PER_PIXEL;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(to_color(BACKGROUND)))
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Particle Sandbox".into(),
                        resolution: (width, height).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                keyboard_system,
                spawn_click_system,
                resize_system,
                physics_step_system,
                sync_particles_system,
                zoom_system,
            )
                .chain(),
        )
        .run();
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.spawn(Camera2dBundle::default());
    commands.insert_resource(UnitCircle(meshes.add(Circle::new(1.0))));
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        tracing::info!("exiting");
        exit.send(AppExit::Success);
        return;
    }

    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    let mut pending = Vec::new();
    if keys.just_pressed(KeyCode::KeyR) {
        pending.push(if shift { Command::Reset } else { Command::Clear });
    }
    if keys.just_pressed(KeyCode::Backspace) {
        pending.push(Command::Clear);
    }
    if keys.just_pressed(KeyCode::Space) {
        pending.push(Command::TogglePause);
    }
    if keys.just_pressed(KeyCode::KeyP) {
        pending.push(Command::ToggleElasticCollisions);
    }
    if keys.just_pressed(KeyCode::KeyC) {
        pending.push(Command::ToggleColorMap);
    }
    if keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        pending.push(Command::ZoomIn);
    }
    if keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        pending.push(Command::ZoomOut);
    }

    for command in pending {
        if let Err(e) = scenario.apply(command) {
            tracing::warn!("{command:?} rejected: {e}");
        }
    }
}

fn spawn_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut scenario: ResMut<Scenario>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else { return };
    let Ok((camera, camera_transform)) = cameras.get_single() else { return };
    let Some(world) = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor))
    else {
        return;
    };

    let position = NVec2::new(world.x as f64, world.y as f64);
    if let Err(e) = scenario.apply(Command::SpawnAt { position, radius: None }) {
        tracing::warn!("spawn rejected: {e}");
    }
}

/// The window edges are the walls: a resize moves them
fn resize_system(mut events: EventReader<WindowResized>, mut scenario: ResMut<Scenario>) {
    for e in events.read() {
        let half_width = (e.width * WORLD_PER_PIXEL * 0.5) as f64;
        let half_height = (e.height * WORLD_PER_PIXEL * 0.5) as f64;
        if let Err(err) = scenario.apply(Command::ResizeWorld { half_width, half_height }) {
            tracing::warn!("resize ignored: {err}");
        }
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.step(time.delta_seconds() as f64);
}

/// Keep one circle entity per particle; rebuild the set when the count changes
fn sync_particles_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    circle: Res<UnitCircle>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &ParticleIndex, &mut Transform, &Handle<ColorMaterial>)>,
) {
    let views = scenario.snapshot();

    if query.iter().count() != views.len() {
        for (entity, ..) in &query {
            commands.entity(entity).despawn();
        }
        for (i, view) in views.iter().enumerate() {
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(circle.0.clone()),
                    material: materials.add(ColorMaterial::from(to_color(view.color))),
                    transform: Transform::from_xyz(view.position.x as f32, view.position.y as f32, 0.0)
                        .with_scale(Vec3::splat(view.radius as f32)),
                    ..Default::default()
                },
                ParticleIndex(i),
            ));
        }
        return;
    }

    for (_, ParticleIndex(i), mut transform, material) in &mut query {
        let Some(view) = views.get(*i) else { continue };
        transform.translation.x = view.position.x as f32;
        transform.translation.y = view.position.y as f32;
        transform.scale = Vec3::splat(view.radius as f32);
        if let Some(m) = materials.get_mut(material) {
            m.color = to_color(view.color);
        }
    }
}

/// Zoom is a view transform only
fn zoom_system(scenario: Res<Scenario>, mut projections: Query<&mut OrthographicProjection>) {
    let scale = WORLD_PER_PIXEL / scenario.parameters.zoom as f32;
    for mut projection in &mut projections {
        if projection.scale != scale {
            projection.scale = scale;
        }
    }
}
