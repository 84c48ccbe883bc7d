use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, broadcast, mpsc};
use tracing::{error, info};

use crate::ports::CombatWorld;
use crate::protocol::{CombatUpdate, SpawnRequest};
use crate::scheduler::ProjectileScheduler;

/// Fixed-tick combat loop. Each tick drains pending spawn requests into
/// the scheduler, runs one frame of the pipeline, and broadcasts the
/// resulting state.
///
/// Ends on shutdown notification, or immediately on a frame-fatal
/// error: a corrupted batch has no safe partial recovery, so the loop
/// fails loudly rather than resolving a subset of projectiles.
pub async fn combat_task<W: CombatWorld>(
    mut scheduler: ProjectileScheduler,
    mut world: W,
    mut spawn_rx: mpsc::Receiver<SpawnRequest>,
    update_tx: broadcast::Sender<CombatUpdate>,
    shutdown: Arc<Notify>,
    tick_interval: Duration,
) {
    let mut tick: u64 = 0;
    let dt = tick_interval.as_secs_f32();

    let mut interval = tokio::time::interval(tick_interval);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(tick, "combat task shutting down");
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(req) = spawn_rx.try_recv() {
            scheduler.enqueue(req);
        }

        scheduler.begin_frame(dt);
        let finished = match scheduler.complete_frame(&mut world) {
            Ok(finished) => finished,
            Err(err) => {
                error!(%err, tick, "combat frame failed, stopping simulation");
                break;
            }
        };

        tick += 1;
        let _ = update_tx.send(CombatUpdate {
            tick,
            projectiles: scheduler.snapshot(),
            finished,
        });
    }
}
