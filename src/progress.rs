// src/progress.rs
/// Lightweight progress reporting for the load pipelines (fetch → parse →
/// normalize → match). The GUI implements this to drive its status line.
pub trait Progress {
    /// Called at the start with the number of pipeline steps.
    fn begin(&mut self, _steps: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one step completes.
    fn step_done(&mut self, _step: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
