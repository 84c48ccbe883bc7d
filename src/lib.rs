pub mod config;
pub mod errors;
pub mod game;
pub mod health;
pub mod ports;
pub mod protocol;
pub mod scheduler;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::CombatError;
pub use game::combat_task;
pub use protocol::{CombatUpdate, SpawnHandle, SpawnRequest};
pub use scheduler::ProjectileScheduler;
