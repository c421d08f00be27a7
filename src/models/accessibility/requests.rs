use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "accessibility.ts")]
pub struct UpdateAccessibilityRequest {
    #[serde(default)]
    pub categories: Vec<String>,
}
