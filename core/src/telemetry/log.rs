use log::info;

/// Logger scoped to one named pipeline stage.
pub struct StageLog {
    stage: &'static str,
}

impl StageLog {
    pub fn for_stage(stage: &'static str) -> Self {
        Self { stage }
    }

    pub fn record(&self, message: impl AsRef<str>) {
        info!("[{}] {}", self.stage, message.as_ref());
    }
}
