use shared::utils::is_blank;

/// Character budget for one chat input.
pub const MAX_INPUT_CHARS: usize = 500;
const CAUTION_ABOVE: usize = 400;
const CRITICAL_ABOVE: usize = 450;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterLevel {
    Normal,
    Caution,
    Critical,
}

impl MeterLevel {
    pub fn color(self) -> &'static str {
        match self {
            MeterLevel::Normal => "#6c757d",
            MeterLevel::Caution => "#ffc107",
            MeterLevel::Critical => "#dc3545",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputMeter {
    pub count: usize,
    pub level: MeterLevel,
}

impl InputMeter {
    pub fn measure(text: &str) -> Self {
        let count = text.chars().count();
        let level = if count > CRITICAL_ABOVE {
            MeterLevel::Critical
        } else if count > CAUTION_ABOVE {
            MeterLevel::Caution
        } else {
            MeterLevel::Normal
        };
        Self { count, level }
    }

    /// `"{count}/500"`
    pub fn label(&self) -> String {
        format!("{}/{}", self.count, MAX_INPUT_CHARS)
    }

    pub fn over_budget(&self) -> bool {
        self.count > MAX_INPUT_CHARS
    }
}

/// Whether the send control should be enabled.
pub fn can_send(text: &str, pending: bool) -> bool {
    !pending && !is_blank(text)
}
