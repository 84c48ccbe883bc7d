use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc;

use tracing::{debug, warn};

use crate::config;
use crate::errors::CombatError;
use crate::ports::{CombatWorld, RayHit, RayQuery, RayScene};
use crate::protocol::{FinishedProjectile, SpawnRequest};
use crate::state::{ProjectileSnapshot, ProjectileState};
use crate::systems::hits;
use crate::systems::movement::{self, Advance};

/// Results of one dispatched frame batch.
struct FrameOutput {
    advances: Vec<Advance>,
    hits: Vec<Vec<RayHit>>,
}

/// A batch in flight between `begin_frame` and `complete_frame`.
/// `rows[i]` is the pool slot the i-th batch row belongs to.
struct FrameJob {
    rows: Vec<usize>,
    rx: mpsc::Receiver<Result<FrameOutput, String>>,
}

/// Owns every live projectile and drives the per-frame pipeline:
/// drain spawns, dispatch the parallel raycast + movement batch, join,
/// resolve hits, drain despawns.
pub struct ProjectileScheduler {
    scene: Arc<dyn RayScene>,
    slots: Vec<Option<ProjectileState>>,
    free: Vec<usize>,
    live: usize,
    spawn_queue: VecDeque<SpawnRequest>,
    job: Option<FrameJob>,
}

impl ProjectileScheduler {
    pub fn new(scene: Arc<dyn RayScene>) -> Self {
        Self {
            scene,
            slots: (0..config::MAX_PROJECTILES).map(|_| None).collect(),
            // Reversed so fresh pools hand out slot 0 first.
            free: (0..config::MAX_PROJECTILES).rev().collect(),
            live: 0,
            spawn_queue: VecDeque::with_capacity(config::MAX_SPAWN_QUEUE),
            job: None,
        }
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Queues a projectile for creation at the next frame start. Never
    /// blocks: requests beyond the pool capacity or the queue bound are
    /// dropped with a warning.
    pub fn enqueue(&mut self, req: SpawnRequest) {
        if self.live >= config::MAX_PROJECTILES {
            warn!(live = self.live, "spawn dropped: projectile pool at capacity");
            return;
        }
        if self.spawn_queue.len() >= config::MAX_SPAWN_QUEUE {
            warn!(
                queued = self.spawn_queue.len(),
                "spawn dropped: spawn queue full"
            );
            return;
        }
        self.spawn_queue.push_back(req);
    }

    /// Phase A: drains the spawn queue, then dispatches this frame's
    /// raycast and movement batches. Projectiles spawned this frame are
    /// included. Returns immediately; `complete_frame` joins the work.
    pub fn begin_frame(&mut self, dt: f32) {
        debug_assert!(
            self.job.is_none(),
            "begin_frame called with a frame still in flight"
        );

        self.drain_spawns();
        if self.live == 0 {
            return;
        }

        let mut rows = Vec::with_capacity(self.live);
        let mut rays = Vec::with_capacity(self.live);
        let mut travelled = Vec::with_capacity(self.live);
        for (slot, p) in self.slots.iter().enumerate() {
            let Some(p) = p else { continue };
            rows.push(slot);
            rays.push(RayQuery {
                origin: p.pos,
                dir: p.dir,
                max_dist: p.velocity * dt,
                layer_mask: config::layers::PROJECTILE_HIT_MASK,
            });
            travelled.push(p.travelled);
        }

        let scene = Arc::clone(&self.scene);
        let (tx, rx) = mpsc::channel();
        rayon::spawn(move || {
            let (hits, advances) = rayon::join(
                || scene.cast_batch(&rays, config::MAX_RAY_HITS),
                || movement::advance_batch(&rays, &travelled),
            );
            let _ = tx.send(hits.map(|hits| FrameOutput { advances, hits }));
        });

        self.job = Some(FrameJob { rows, rx });
    }

    /// Phase B: blocks until the dispatched batch is done, resolves hits
    /// per projectile in ascending slot order, and drains despawns.
    /// Returns one finished event per projectile that left the pool.
    ///
    /// A scene failure fails the whole frame; there is no safe partial
    /// resolution for a corrupted batch result.
    pub fn complete_frame(
        &mut self,
        world: &mut dyn CombatWorld,
    ) -> Result<Vec<FinishedProjectile>, CombatError> {
        let Some(job) = self.job.take() else {
            return Ok(Vec::new());
        };

        let output = job
            .rx
            .recv()
            .map_err(|_| CombatError::FrameJobLost)?
            .map_err(CombatError::Raycast)?;
        if output.hits.len() != job.rows.len() || output.advances.len() != job.rows.len() {
            return Err(CombatError::MalformedBatch {
                expected: job.rows.len(),
                got: output.hits.len(),
            });
        }

        let mut hit_rows = output.hits;
        let mut despawn = Vec::new();
        for (row, slot) in job.rows.iter().copied().enumerate() {
            let p = self.slots[slot]
                .as_mut()
                .expect("frame row refers to a despawned slot");
            let advance = output.advances[row];

            let outcome = hits::resolve_hits(p, &mut hit_rows[row], world);

            p.pos = outcome.stop_point.unwrap_or(advance.pos);
            p.travelled = advance.travelled;

            let terminal = (p.first_hit.is_some() && (p.penetration <= 0 || p.damage <= 0))
                || p.travelled > config::MAX_PROJECTILE_TRAVEL;
            if terminal {
                despawn.push(slot);
            }
        }

        Ok(self.drain_despawns(despawn))
    }

    pub fn snapshot(&self) -> Vec<ProjectileSnapshot> {
        self.slots
            .iter()
            .flatten()
            .map(ProjectileSnapshot::from)
            .collect()
    }

    fn drain_spawns(&mut self) {
        while let Some(req) = self.spawn_queue.pop_front() {
            if self.live >= config::MAX_PROJECTILES {
                warn!(live = self.live, "spawn dropped at drain: projectile pool at capacity");
                continue;
            }
            let slot = self
                .free
                .pop()
                .expect("free list empty while live count is below capacity");

            self.slots[slot] = Some(ProjectileState {
                slot,
                pos: req.origin,
                dir: req.dir.normalize_or_zero(),
                velocity: req.projectile.velocity,
                penetration: req.projectile.base_penetration + req.weapon_penetration,
                damage: req.weapon_damage,
                travelled: 0.0,
                first_hit: None,
                sender_id: req.sender_id,
                effects: req.effects,
                prefab: req.prefab,
            });
            self.live += 1;
        }
    }

    fn drain_despawns(&mut self, despawn: Vec<usize>) -> Vec<FinishedProjectile> {
        let mut finished = Vec::with_capacity(despawn.len());
        for slot in despawn {
            let Some(p) = self.slots[slot].take() else {
                continue;
            };
            self.live -= 1;
            self.free.push(slot);
            debug!(slot, travelled = p.travelled, "projectile finished");
            finished.push(FinishedProjectile {
                slot,
                prefab: p.prefab,
                pos: p.pos,
                travelled: p.travelled,
                first_hit: p.first_hit,
            });
        }
        finished
    }
}
