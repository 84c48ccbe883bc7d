// Shared fakes for integration tests: a deterministic analytic scene
// and an in-memory combat world.

use std::collections::HashMap;

use glam::Vec3;

use combat_sim::health::CharacterHealth;
use combat_sim::ports::{CombatTarget, CombatWorld, RayHit, RayQuery, RayScene};
use combat_sim::protocol::EffectSpec;
use combat_sim::state::{EntityId, HitRecord};

/// An infinite plane at `x`, facing -X. Rays travelling along +X hit it.
pub struct Wall {
    pub x: f32,
    pub layer: u32,
    pub entity: Option<EntityId>,
}

/// Scene made of walls perpendicular to the X axis. Intersections are
/// computed analytically, so results are exactly reproducible.
#[derive(Default)]
pub struct WallScene {
    pub walls: Vec<Wall>,
    pub fail: bool,
}

impl WallScene {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_walls(walls: Vec<Wall>) -> Self {
        Self { walls, fail: false }
    }
}

impl RayScene for WallScene {
    fn cast_batch(&self, rays: &[RayQuery], max_hits: usize) -> Result<Vec<Vec<RayHit>>, String> {
        if self.fail {
            return Err("scene offline".to_string());
        }

        Ok(rays
            .iter()
            .map(|ray| {
                let mut hits: Vec<RayHit> = self
                    .walls
                    .iter()
                    .filter(|w| w.layer & ray.layer_mask != 0 && ray.dir.x > 1e-6)
                    .filter_map(|w| {
                        let t = (w.x - ray.origin.x) / ray.dir.x;
                        if t > 0.0 && t <= ray.max_dist {
                            Some(RayHit {
                                distance: t,
                                point: ray.origin + ray.dir * t,
                                normal: -Vec3::X,
                                layer: w.layer,
                                entity: w.entity,
                            })
                        } else {
                            None
                        }
                    })
                    .collect();
                hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
                hits.truncate(max_hits);
                hits
            })
            .collect())
    }
}

/// World with character targets by id, recording every effect spawn.
#[derive(Default)]
pub struct TestWorld {
    pub targets: HashMap<EntityId, CharacterHealth>,
    pub effects: Vec<(EffectSpec, HitRecord)>,
}

impl TestWorld {
    pub fn with_target(mut self, id: EntityId, target: CharacterHealth) -> Self {
        self.targets.insert(id, target);
        self
    }

    pub fn health_of(&self, id: EntityId) -> i32 {
        self.targets[&id].status.current
    }
}

impl CombatWorld for TestWorld {
    fn target_mut(&mut self, id: EntityId) -> Option<&mut dyn CombatTarget> {
        self.targets
            .get_mut(&id)
            .map(|t| t as &mut dyn CombatTarget)
    }

    fn spawn_effect(&mut self, spec: &EffectSpec, hit: &HitRecord) {
        self.effects.push((*spec, *hit));
    }
}
