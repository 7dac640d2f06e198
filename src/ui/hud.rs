//! In-game HUD - status text, minimap, and crosshair.

use bevy::prelude::*;

use crate::enemies::EnemyKind;
use crate::rendering::VisualConfig;
use crate::world::{GameWorld, HudSnapshot, MinimapBlip};

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the status text block.
#[derive(Component)]
pub struct StatusText;

/// Marker for the minimap panel.
#[derive(Component)]
pub struct MinimapPanel;

/// Marker for one enemy dot on the minimap, rebuilt every frame.
#[derive(Component)]
pub struct MinimapDot;

const BLIP_SIZE: f32 = 4.0;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(Update, (update_status_text, update_minimap));
}

/// Lines of the status block, top to bottom.
pub fn status_lines(hud: &HudSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("Score: {}", hud.score),
        format!("Lives: {}", hud.lives),
        format!("Wave: {}", hud.wave),
        format!("Weapon: {}", hud.weapon.name()),
        format!("Aim: {}", hud.aim_mode.label()),
    ];

    if let Some(health) = hud.boss_health {
        lines.push(format!("Boss: {}", health.max(0)));
    }

    lines.push(if hud.super_active {
        "Super Power: ACTIVE".to_string()
    } else if hud.super_ready {
        "Super Power: READY (F)".to_string()
    } else {
        format!("Super Power: {:.1}s", hud.super_cooldown)
    });

    if hud.combo > 1 {
        lines.push(format!("Combo x{}", hud.combo));
    }
    if hud.cheat_mode {
        lines.push("CHEAT MODE".to_string());
    }
    lines
}

/// Pixel position of a blip inside a square minimap of `size`, or None when
/// it falls off the map. Screen y grows downward.
pub fn blip_pixel(offset: Vec2, size: f32) -> Option<Vec2> {
    let half = size / 2.0;
    if offset.x.abs() > half || offset.y.abs() > half {
        return None;
    }
    Some(Vec2::new(half + offset.x, half - offset.y))
}

fn blip_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Boss => Color::srgb(1.0, 0.5, 0.0),
        _ => Color::srgb(1.0, 0.2, 0.2),
    }
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, visual: Res<VisualConfig>) {
    // Status block (top-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(12.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                StatusText,
            ));
        });

    // Minimap (top-right corner)
    let size = visual.minimap_size;
    commands
        .spawn((
            Node {
                width: Val::Px(size),
                height: Val::Px(size),
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                top: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            HudRoot,
            MinimapPanel,
        ))
        .with_children(|panel| {
            // The player always sits in the middle
            panel.spawn((
                Node {
                    width: Val::Px(BLIP_SIZE + 2.0),
                    height: Val::Px(BLIP_SIZE + 2.0),
                    position_type: PositionType::Absolute,
                    left: Val::Px(size / 2.0 - (BLIP_SIZE + 2.0) / 2.0),
                    top: Val::Px(size / 2.0 - (BLIP_SIZE + 2.0) / 2.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.0, 1.0, 0.0)),
            ));
        });

    // Crosshair (center of screen)
    let arm = visual.crosshair_size;
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            for (width, height) in [(arm, 2.0), (2.0, arm)] {
                parent.spawn((
                    Node {
                        width: Val::Px(width),
                        height: Val::Px(height),
                        position_type: PositionType::Absolute,
                        ..default()
                    },
                    BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
                ));
            }
        });
}

fn update_status_text(world: Res<GameWorld>, mut query: Query<&mut Text, With<StatusText>>) {
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };
    **text = status_lines(&world.hud()).join("\n");
}

/// Rebuild the minimap dots from the current enemy positions.
fn update_minimap(
    mut commands: Commands,
    world: Res<GameWorld>,
    visual: Res<VisualConfig>,
    panel_query: Query<Entity, With<MinimapPanel>>,
    dot_query: Query<Entity, With<MinimapDot>>,
) {
    let Ok(panel) = panel_query.get_single() else {
        return;
    };
    for dot in dot_query.iter() {
        commands.entity(dot).despawn_recursive();
    }

    let blips: Vec<MinimapBlip> = world.minimap_blips(visual.minimap_scale);
    commands.entity(panel).with_children(|parent| {
        for blip in blips {
            let Some(pixel) = blip_pixel(blip.offset, visual.minimap_size) else {
                continue;
            };
            parent.spawn((
                Node {
                    width: Val::Px(BLIP_SIZE),
                    height: Val::Px(BLIP_SIZE),
                    position_type: PositionType::Absolute,
                    left: Val::Px(pixel.x - BLIP_SIZE / 2.0),
                    top: Val::Px(pixel.y - BLIP_SIZE / 2.0),
                    ..default()
                },
                BackgroundColor(blip_color(blip.kind)),
                MinimapDot,
            ));
        }
    });
}
