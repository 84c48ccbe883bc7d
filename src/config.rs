use std::time::Duration;

// Runtime/simulation constants (not gameplay tuning).

/// Hard cap on simultaneously live projectiles.
pub const MAX_PROJECTILES: usize = 512;

/// Spawn requests buffered between frames before drops start.
pub const MAX_SPAWN_QUEUE: usize = 64;

/// Hit slots returned per ray in a frame batch.
pub const MAX_RAY_HITS: usize = 4;

/// Flight-distance safety cutoff for projectiles that never hit anything.
pub const MAX_PROJECTILE_TRAVEL: f32 = 300.0;

/// Minimum spacing between consecutive hits of one ray; anything closer
/// is folded into a single surface by the scene.
pub const MULTI_HIT_MIN_STEP: f32 = 0.1;

pub const SPAWN_CHANNEL_CAPACITY: usize = 1024;
pub const UPDATE_BROADCAST_CAPACITY: usize = 128;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);

/// Collision layer bits. Hits are classified by these masks; anything
/// outside both classes passes through untouched.
pub mod layers {
    pub const GROUND: u32 = 1 << 3;
    pub const CHARACTER: u32 = 1 << 6;
    pub const INDESTRUCTIBLE: u32 = 1 << 7;
    pub const DESTRUCTIBLE: u32 = 1 << 8;

    /// Surfaces that absorb a projectile outright.
    pub const HARD: u32 = GROUND | INDESTRUCTIBLE;
    /// Surfaces with armor and a health sink.
    pub const SOFT: u32 = CHARACTER | DESTRUCTIBLE;

    /// Layer filter used for every projectile ray.
    pub const PROJECTILE_HIT_MASK: u32 = HARD | SOFT;
}
