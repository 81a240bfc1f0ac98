// src/progress.rs
/// Lightweight status reporting for the ingestion cycle.
/// Frontends (CLI today) implement this to surface progress to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Current cascade position (which source via which endpoint).
    fn update_status(&mut self, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
