use serde::Serialize;
use serde_json::Value;

pub const ANALYSIS_DIALOG_WIDTH: u32 = 640;

/// Shows an analysis result verbatim. No structure is assumed on `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisDialog {
    pub data: Value,
    pub width: u32,
    pub open: bool,
}

impl AnalysisDialog {
    pub fn open(data: Value) -> Self {
        Self {
            data,
            width: ANALYSIS_DIALOG_WIDTH,
            open: true,
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pretty JSON for text rendering; strings are shown without quotes
    pub fn render(&self) -> String {
        match &self.data {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }
}
