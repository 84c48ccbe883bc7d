use glam::Vec3;
use rayon::prelude::*;

use crate::ports::RayQuery;

/// Result of one projectile's naive advance step, before any hit from
/// the same frame's raycast pulls it up short.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub pos: Vec3,
    pub travelled: f32,
}

/// Advances every row by its full distance budget. Rows are independent,
/// so this runs as a data-parallel batch alongside the raycast.
pub fn advance_batch(rays: &[RayQuery], travelled: &[f32]) -> Vec<Advance> {
    rays.par_iter()
        .zip(travelled.par_iter())
        .map(|(ray, dist)| {
            let movement = ray.dir * ray.max_dist;
            Advance {
                pos: ray.origin + movement,
                travelled: dist + movement.length(),
            }
        })
        .collect()
}
