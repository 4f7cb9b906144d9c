use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::playback::driver::{FrameSink, Playback};
use crate::trajectory::states::NVec2;

/// World-space → screen-space scaling factor (the pendulum spans ±2 units)
const SCALE: f32 = 150.0;

/// Screen radius of each pendulum bulb, in pixels
const BULB_RADIUS: f32 = 9.0;

/// Latest frame handed over by the playback machine
///
/// Gizmos are immediate-mode, so the draw system repaints this every
/// render frame; after playback parks in Done the last frame stays up
#[derive(Resource, Default)]
struct CurrentFrame {
    points: Option<[NVec2; 3]>,
    label: String,
}

impl FrameSink for CurrentFrame {
    fn render(&mut self, points: [NVec2; 3], label: &str) {
        self.points = Some(points);
        self.label = label.to_string();
    }
}

/// Marker for the elapsed-time text node
#[derive(Component)]
struct TimeLabel;

/// Run the Bevy 2D viewer over an armed playback sequence
///
/// One fixed-schedule tick advances exactly one frame; closing the window
/// simply stops delivering ticks. The caller is expected to have called
/// `Playback::start` already
pub fn run_viewer(playback: Playback) {
    println!("run_viewer: starting Bevy 2D viewer with {} frames", playback.len());

    let dt = playback.dt();

    App::new()
        .insert_resource(Time::<Fixed>::from_seconds(dt))
        .insert_resource(playback)
        .init_resource::<CurrentFrame>()
        // the binary owns logging (env_logger), so drop bevy's LogPlugin
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_viewer)
        .add_systems(FixedUpdate, advance_playback)
        .add_systems(Update, (draw_pendulum, update_time_label))
        .run();
}

/// Startup system: 2D camera plus the elapsed-time label in the top-left
fn setup_viewer(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 28.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(14.0),
            ..Default::default()
        }),
        TimeLabel,
    ));
}

/// One fixed tick = one playback frame; ticks after Done are no-ops
fn advance_playback(mut playback: ResMut<Playback>, mut frame: ResMut<CurrentFrame>) {
    playback.tick(&mut *frame);
}

/// Repaint rods and bulbs from the latest frame
fn draw_pendulum(frame: Res<CurrentFrame>, mut gizmos: Gizmos) {
    let Some(points) = frame.points else {
        return;
    };
    let [origin, bulb1, bulb2] = points.map(to_screen);

    gizmos.line_2d(origin, bulb1, Color::WHITE);
    gizmos.line_2d(bulb1, bulb2, Color::WHITE);
    gizmos.circle_2d(bulb1, BULB_RADIUS, Color::srgb(1.0, 0.85, 0.2));
    gizmos.circle_2d(bulb2, BULB_RADIUS, Color::srgb(1.0, 0.85, 0.2));
}

/// Keep the time label in sync with the latest frame
fn update_time_label(frame: Res<CurrentFrame>, mut query: Query<&mut Text, With<TimeLabel>>) {
    for mut text in &mut query {
        text.sections[0].value = frame.label.clone();
    }
}

fn to_screen(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE)
}
