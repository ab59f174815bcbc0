// src/progress.rs
/// Lightweight progress reporting for the fetch workflow.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Report a stage to both the log file and the progress sink.
pub(crate) fn stage(progress: &mut dyn Progress, msg: &str) {
    logf!("Fetch: {}", msg);
    progress.log(msg);
}
