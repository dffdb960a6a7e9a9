//! One-time scene construction: background, static geometry, the bank
//! trigger and the player body with its sensors.
//!
//! Layout lives in screen space (see [`crate::core::coords`]); sizes are
//! native asset sizes so sprites and colliders stay in lockstep.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BankZone, FootSensor, Grounded, PickupSensor, Platform, Player};
use crate::core::config::GameConfig;
use crate::core::coords::{screen_to_world, WORLD_HEIGHT, WORLD_WIDTH};
use crate::gameplay::animation::PlayerAnimation;
use crate::physics::{
    player_groups, sensor_groups, world_groups, GROUP_MONEY, GROUP_PLAYER, GROUP_WORLD,
};

/// Native cell size of the player sprite sheet.
pub const PLAYER_FRAME: Vec2 = Vec2::new(290.0, 298.0);
pub const PLAYER_FRAME_COUNT: u32 = 9;

const GROUND_SIZE: Vec2 = Vec2::new(800.0, 64.0);
const PLATFORM_SIZE: Vec2 = Vec2::new(400.0, 32.0);

const PLAYER_START: Vec2 = Vec2::new(520.0, 500.0);
const GROUND_POS: Vec2 = Vec2::new(400.0, 590.0);
const PLATFORM_POS: [Vec2; 3] = [
    Vec2::new(200.0, 450.0),
    Vec2::new(600.0, 300.0),
    Vec2::new(200.0, 150.0),
];

#[derive(Resource, Default, Clone)]
pub struct GameAssets {
    pub sky: Handle<Image>,
    pub platform: Handle<Image>,
    pub ground: Handle<Image>,
    pub bank: Handle<Image>,
    pub money: Handle<Image>,
    pub player_sheet: Handle<Image>,
    pub player_layout: Handle<TextureAtlasLayout>,
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_assets, setup_level).chain());
    }
}

pub fn load_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let layout = TextureAtlasLayout::from_grid(
        UVec2::new(PLAYER_FRAME.x as u32, PLAYER_FRAME.y as u32),
        PLAYER_FRAME_COUNT,
        1,
        None,
        None,
    );
    commands.insert_resource(GameAssets {
        sky: asset_server.load("sky.png"),
        platform: asset_server.load("platform.png"),
        ground: asset_server.load("ground.png"),
        bank: asset_server.load("bank.png"),
        money: asset_server.load("money.png"),
        player_sheet: asset_server.load("gccool.png"),
        player_layout: layouts.add(layout),
    });
}

fn setup_level(mut commands: Commands, assets: Res<GameAssets>, cfg: Res<GameConfig>) {
    // Background, behind everything.
    commands.spawn((
        Sprite {
            image: assets.sky.clone(),
            custom_size: Some(Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)),
            ..default()
        },
        Transform::from_translation(screen_to_world(400.0, 300.0).extend(-10.0)),
        Name::new("Sky"),
    ));

    spawn_platform(&mut commands, assets.ground.clone(), GROUND_POS, GROUND_SIZE, "Ground");
    for pos in PLATFORM_POS {
        spawn_platform(&mut commands, assets.platform.clone(), pos, PLATFORM_SIZE, "Platform");
    }
    spawn_world_walls(&mut commands);

    // Bank trigger: static sensor, physical response suppressed by groups.
    commands.spawn((
        BankZone,
        Sprite {
            image: assets.bank.clone(),
            custom_size: Some(Vec2::splat(cfg.bank.half_extent * 2.0)),
            ..default()
        },
        Transform::from_translation(screen_to_world(cfg.bank.x, cfg.bank.y).extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(cfg.bank.half_extent, cfg.bank.half_extent),
        Sensor,
        sensor_groups(GROUP_PLAYER),
        ActiveEvents::COLLISION_EVENTS,
        Name::new("Bank"),
    ));

    spawn_player(&mut commands, &assets, &cfg);
}

fn spawn_platform(commands: &mut Commands, image: Handle<Image>, pos: Vec2, size: Vec2, name: &'static str) {
    commands.spawn((
        Platform,
        Sprite {
            image,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(screen_to_world(pos.x, pos.y).extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(size.x * 0.5, size.y * 0.5),
        world_groups(),
        Name::new(name),
    ));
}

/// Invisible bounds so the player (and stray money) stay inside the screen.
fn spawn_world_walls(commands: &mut Commands) {
    let thickness = 20.0;
    let half_w = WORLD_WIDTH * 0.5;
    let half_h = WORLD_HEIGHT * 0.5;
    let walls = [
        (Vec2::new(0.0, half_h + thickness), Vec2::new(half_w + thickness * 2.0, thickness)),
        (Vec2::new(0.0, -half_h - thickness), Vec2::new(half_w + thickness * 2.0, thickness)),
        (Vec2::new(-half_w - thickness, 0.0), Vec2::new(thickness, half_h + thickness * 2.0)),
        (Vec2::new(half_w + thickness, 0.0), Vec2::new(thickness, half_h + thickness * 2.0)),
    ];
    for (center, half_extents) in walls {
        commands.spawn((
            Platform,
            Transform::from_translation(center.extend(0.0)),
            GlobalTransform::default(),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            world_groups(),
            Name::new("WorldBound"),
        ));
    }
}

fn spawn_player(commands: &mut Commands, assets: &GameAssets, cfg: &GameConfig) {
    let half = PLAYER_FRAME * cfg.player.scale * 0.5;

    commands
        .spawn((
            Player,
            Grounded::default(),
            PlayerAnimation::default(),
            Sprite {
                image: assets.player_sheet.clone(),
                texture_atlas: Some(TextureAtlas {
                    layout: assets.player_layout.clone(),
                    index: 4, // idle "turn" frame
                }),
                custom_size: Some(half * 2.0),
                ..default()
            },
            Transform::from_translation(screen_to_world(PLAYER_START.x, PLAYER_START.y).extend(1.0)),
            RigidBody::Dynamic,
            Collider::cuboid(half.x, half.y),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            Restitution::coefficient(cfg.player.bounce),
            player_groups(),
            Name::new("Player"),
        ))
        .with_children(|parent| {
            // Pickup overlap volume matching the body.
            parent.spawn((
                PickupSensor,
                Transform::default(),
                Collider::cuboid(half.x, half.y),
                Sensor,
                sensor_groups(GROUP_MONEY),
                ActiveEvents::COLLISION_EVENTS,
                Name::new("PickupSensor"),
            ));
            // Thin strip under the feet; "touching down" while it overlaps world geometry.
            parent.spawn((
                FootSensor,
                Transform::from_xyz(0.0, -half.y, 0.0),
                Collider::cuboid(half.x * 0.9, 2.0),
                Sensor,
                sensor_groups(GROUP_WORLD),
                ActiveEvents::COLLISION_EVENTS,
                Name::new("FootSensor"),
            ));
        });
}
