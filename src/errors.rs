use thiserror::Error;

// Frame-fatal failures. Capacity overflows are not errors; they degrade
// to warn-logged drops instead.
#[derive(Debug, Error)]
pub enum CombatError {
    /// The batch raycast capability failed; the frame cannot be resolved
    /// for any subset of projectiles without corrupting their state.
    #[error("batch raycast failed: {0}")]
    Raycast(String),

    /// The scene returned a result set that does not line up with the
    /// dispatched rays.
    #[error("malformed raycast batch: expected {expected} rows, got {got}")]
    MalformedBatch { expected: usize, got: usize },

    /// The dispatched frame job died before delivering results.
    #[error("frame job was lost before completion")]
    FrameJobLost,
}
