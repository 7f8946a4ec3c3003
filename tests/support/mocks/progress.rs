// tests/support/mocks/progress.rs
use neuralpulse_core::application::ports::progress::{SubmissionProgress, SubmissionStage};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingProgress {
    stages: Mutex<Vec<SubmissionStage>>,
}

impl RecordingProgress {
    pub fn stages(&self) -> Vec<SubmissionStage> {
        self.stages.lock().unwrap().clone()
    }
}

impl SubmissionProgress for RecordingProgress {
    fn report(&self, _slug: &str, stage: SubmissionStage) {
        self.stages.lock().unwrap().push(stage);
    }
}
