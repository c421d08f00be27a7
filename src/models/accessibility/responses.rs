use serde::Serialize;
use ts_rs::TS;

use super::entities::AccessibilityProfile;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "accessibility.ts")]
pub struct UpdateAccessibilityResponse {
    pub profile: AccessibilityProfile,
    pub confirmation_msg: String,
    pub active_features: Vec<String>,
}
