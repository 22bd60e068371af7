// src/progress.rs
/// Status reporting for the dataset load (and anything else slow).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once with a short description of where data comes from.
    fn begin(&mut self, _source: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end with the number of players loaded (None on failure).
    fn finish(&mut self, _players: Option<usize>) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
