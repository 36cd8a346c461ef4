//! Setup logic for color_cubes: the persistent environment and the cubes of a round.
use bevy::prelude::*;

use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_FAR, CAMERA_3D_FOV_DEG, CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y,
    CAMERA_3D_INITIAL_Z, CAMERA_3D_NEAR,
};
use crate::utils::constants::cube_constants::{
    CUBE_SIZE, CUBE_SPACING, GRID_ORIGIN_X, GRID_ORIGIN_Y,
};
use crate::utils::constants::game_constants::GRID_COLUMNS;
use crate::utils::constants::lighting_constants::{
    AMBIENT_LIGHT_BRIGHTNESS, DIRECTIONAL_LIGHT_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION,
};
use crate::utils::game_state::GameState;
use crate::utils::objects::{CubeEntity, GameEntity, Spin};

/// Camera and lights, which persist across resets.
pub fn setup_environment(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_3D_FOV_DEG.to_radians(),
            near: CAMERA_3D_NEAR,
            far: CAMERA_3D_FAR,
            ..default()
        }),
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let [x, y, z] = DIRECTIONAL_LIGHT_POSITION;
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            ..default()
        },
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });

    info!("Environment setup complete");
}

/// Grid slot of the cube at `index`: three columns, rows growing downwards.
pub fn grid_position(index: usize) -> Vec3 {
    let row = (index / GRID_COLUMNS) as f32;
    let col = (index % GRID_COLUMNS) as f32;
    Vec3::new(
        col * CUBE_SPACING + GRID_ORIGIN_X,
        -row * CUBE_SPACING + GRID_ORIGIN_Y,
        0.0,
    )
}

/// One freshly spawned cube per palette entry. All of them are marked with GameEntity.
pub fn spawn_cubes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    game_state: &GameState,
) {
    let mesh = meshes.add(Cuboid::from_length(CUBE_SIZE));

    for (slot, color) in game_state.palette.iter().enumerate() {
        let material = materials.add(StandardMaterial {
            base_color: color.to_color(),
            ..default()
        });
        let translation = grid_position(slot);

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(translation),
            Spin::default(),
            CubeEntity {
                slot,
                color: color.clone(),
            },
            GameEntity,
        ));
        log::debug!("cube {slot} {color} at {translation}");
    }

    info!(
        "Round {} started with {} cubes",
        game_state.round,
        game_state.palette.len()
    );
}

/// Cubes of the first round.
pub fn setup_round(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    game_state: Res<GameState>,
) {
    spawn_cubes(&mut commands, &mut meshes, &mut materials, &game_state);
}
