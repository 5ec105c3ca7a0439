use std::thread;
use std::time::{Duration, Instant};

use bevy::log::{debug, error};
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::configuration::config::ViewerConfig;
use crate::simulation::params::AU;
use crate::simulation::scenario::Simulation;
use crate::simulation::states::{NVec2, Rgb};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance readout attached to a non-reference body
#[derive(Component)]
struct DistanceLabel(pub usize);

/// World-to-screen scale, owned by the viewer
#[derive(Resource)]
struct Viewport {
    pixels_per_meter: f64,
}

impl Viewport {
    fn to_screen(&self, x: &NVec2) -> Vec2 {
        world_to_screen(x, self.pixels_per_meter)
    }
}

/// Map a world position to window coordinates centered on the origin.
/// World +y is drawn downward, as on a raster screen, so orbits keep the
/// same handedness as the classic top-left-origin picture.
pub fn world_to_screen(x: &NVec2, pixels_per_meter: f64) -> Vec2 {
    Vec2::new((x.x * pixels_per_meter) as f32, (-x.y * pixels_per_meter) as f32)
}

/// Caps the frame rate by sleeping out the rest of each frame period,
/// so exactly one physics step runs per rendered frame
#[derive(Resource, Debug)]
pub struct FrameClock {
    period: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: f64) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / fps.max(1.0)),
            last: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current frame at `now`, zero once the frame ran long
    pub fn remaining(&self, now: Instant) -> Duration {
        self.period.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Start the next frame at `now`
    pub fn restart(&mut self, now: Instant) {
        self.last = now;
    }
}

/// Set once a step faults; the last good frame stays on screen
#[derive(Resource, Default)]
struct Halted(bool);

const LABEL_FONT_SIZE: f32 = 16.0;

pub fn run_2d(simulation: Simulation, viewer: ViewerConfig) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", simulation.bodies().len());

    App::new()
        .insert_resource(simulation)
        .insert_resource(Viewport {
            pixels_per_meter: viewer.pixels_per_au as f64 / AU,
        })
        .insert_resource(Halted::default())
        .insert_resource(ClearColor(Color::BLACK))
        // one physics step per frame, frames capped at `fps`
        .insert_resource(FrameClock::new(viewer.fps))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar Sim".into(),
                resolution: WindowResolution::new(viewer.width, viewer.height),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, (sync_transforms_system, sync_labels_system, draw_trails_system)).chain())
        .add_systems(Last, frame_limit_system)
        .run();
}

fn color_of(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

fn distance_text(distance: Option<f64>) -> String {
    match distance {
        Some(d) => format!("{:.2} KM", d / 1000.0),
        None => String::new(),
    }
}

fn setup_bodies_system(mut commands: Commands, simulation: Res<Simulation>, viewport: Res<Viewport>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    for (i, body) in simulation.bodies().iter().enumerate() {
        let pos = viewport.to_screen(&body.position());

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius() as f32))),
                material: materials.add(ColorMaterial::from(color_of(body.color()))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if simulation.is_reference(i) {
            continue;
        }

        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    distance_text(body.distance_to_reference()),
                    TextStyle {
                        font_size: LABEL_FONT_SIZE,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ),
                transform: Transform::from_xyz(pos.x, pos.y, 2.0),
                ..Default::default()
            },
            DistanceLabel(i),
        ));
    }

    debug!("spawned {} bodies", simulation.bodies().len());
}

fn physics_step_system(mut simulation: ResMut<Simulation>, mut halted: ResMut<Halted>) {
    if halted.0 {
        return;
    }

    if let Err(e) = simulation.step() {
        error!("simulation halted after {} steps: {e}", simulation.steps());
        halted.0 = true;
    }
}

fn frame_limit_system(mut clock: ResMut<FrameClock>) {
    let wait = clock.remaining(Instant::now());
    if !wait.is_zero() {
        thread::sleep(wait);
    }
    clock.restart(Instant::now());
}

fn sync_transforms_system(simulation: Res<Simulation>, viewport: Res<Viewport>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = simulation.body(*i) {
            let pos = viewport.to_screen(&b.position());
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn sync_labels_system(simulation: Res<Simulation>, viewport: Res<Viewport>, mut query: Query<(&DistanceLabel, &mut Text, &mut Transform)>) {
    for (DistanceLabel(i), mut text, mut transform) in &mut query {
        if let Some(b) = simulation.body(*i) {
            let pos = viewport.to_screen(&b.position());
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
            text.sections[0].value = distance_text(b.distance_to_reference());
        }
    }
}

fn draw_trails_system(simulation: Res<Simulation>, viewport: Res<Viewport>, mut gizmos: Gizmos) {
    for b in simulation.bodies() {
        // a path needs a few points before it reads as a line
        if b.trail().len() <= 2 {
            continue;
        }
        gizmos.linestrip_2d(b.trail().iter().map(|p| viewport.to_screen(p)), color_of(b.color()));
    }
}
