//! Resolves a point on the screen to the cube under it.
use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

use crate::utils::constants::cube_constants::{CUBE_SIZE, MIN_PICKABLE_SCALE};

/// Distance along `ray` (world units) to the surface of a cube with the given transform.
/// Cubes shrunk to (almost) nothing are never hit.
pub fn ray_hits_cube(ray: Ray3d, cube: &GlobalTransform) -> Option<f32> {
    if cube.compute_transform().scale.abs().min_element() < MIN_PICKABLE_SCALE {
        return None;
    }

    // Test against the unit box in the cube's local space
    let world_to_local = cube.affine().inverse();
    let origin = world_to_local.transform_point3(ray.origin);
    let direction = Dir3::new(world_to_local.transform_vector3(*ray.direction)).ok()?;

    let half_size = Vec3::splat(CUBE_SIZE / 2.0);
    let cast = RayCast3d::new(origin, direction, f32::MAX);
    let t = cast.aabb_intersection_at(&Aabb3d::new(Vec3::ZERO, half_size))?;

    let local_hit = origin + *direction * t;
    Some(cube.transform_point(local_hit).distance(ray.origin))
}

/// The cube closest to the ray origin among those the ray hits.
pub fn pick_cube<'a>(
    ray: Ray3d,
    cubes: impl IntoIterator<Item = (Entity, &'a GlobalTransform)>,
) -> Option<Entity> {
    cubes
        .into_iter()
        .filter_map(|(entity, transform)| ray_hits_cube(ray, transform).map(|d| (entity, d)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(entity, _)| entity)
}
