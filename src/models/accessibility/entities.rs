//! 无障碍偏好
//!
//! 用户自报的障碍类别被映射为一组布尔开关，前端据此调整呈现方式。
//! JSON 字段名沿用前端既有的印尼语约定。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabilityCategory {
    Vision,
    Hearing,
    Physical,
    Cognitive,
    Speech,
}

impl DisabilityCategory {
    /// 解析用户输入的类别，忽略大小写与首尾空白；无法识别时返回 None
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" | "vision" | "penglihatan" | "tuna netra" | "tuna_netra" => Some(Self::Vision),
            "b" | "hearing" | "pendengaran" | "tuna rungu" | "tuna_rungu" => Some(Self::Hearing),
            "c" | "physical" | "motorik" | "daksa" | "tuna daksa" | "tuna_daksa" => {
                Some(Self::Physical)
            }
            "d" | "cognitive" | "fokus" | "adhd" | "disleksia" | "kesulitan kognitif"
            | "kesulitan_kognitif" | "tuna grahita" => Some(Self::Cognitive),
            "e" | "speech" | "wicara" | "bisu" | "tuna wicara" | "tuna_wicara" => {
                Some(Self::Speech)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "accessibility.ts")]
pub struct AccessibilityProfile {
    pub user_id: i64,

    // 障碍类别
    #[serde(rename = "tuna_netra")]
    pub vision: bool,
    #[serde(rename = "tuna_rungu")]
    pub hearing: bool,
    #[serde(rename = "tuna_daksa")]
    pub physical: bool,
    #[serde(rename = "kesulitan_kognitif")]
    pub cognitive: bool,
    #[serde(rename = "tuna_wicara")]
    pub speech: bool,

    // 由类别推导出的功能开关
    #[serde(rename = "kompatibel_screen_reader")]
    pub screen_reader_compatible: bool,
    #[serde(rename = "deskripsi_audio")]
    pub audio_description: bool,
    #[serde(rename = "butuh_subtitle")]
    pub subtitles_required: bool,
    #[serde(rename = "notifikasi_visual")]
    pub visual_notifications: bool,
    #[serde(rename = "navigasi_keyboard")]
    pub keyboard_navigation: bool,
    #[serde(rename = "perintah_suara")]
    pub voice_command: bool,
    #[serde(rename = "ringkasan_ai")]
    pub ai_summary: bool,
    #[serde(rename = "mode_fokus")]
    pub focus_mode: bool,
    #[serde(rename = "pengumpulan_teks")]
    pub text_based_submission: bool,
}

impl AccessibilityProfile {
    /// 根据类别列表重新构建偏好，旧偏好被完全替换
    pub fn from_categories<S: AsRef<str>>(user_id: i64, categories: &[S]) -> Self {
        let mut profile = Self {
            user_id,
            ..Default::default()
        };
        for category in categories
            .iter()
            .filter_map(|c| DisabilityCategory::parse(c.as_ref()))
        {
            profile.apply(category);
        }
        profile
    }

    fn apply(&mut self, category: DisabilityCategory) {
        match category {
            DisabilityCategory::Vision => {
                self.vision = true;
                self.screen_reader_compatible = true;
                self.audio_description = true;
            }
            DisabilityCategory::Hearing => {
                self.hearing = true;
                self.subtitles_required = true;
                self.visual_notifications = true;
            }
            DisabilityCategory::Physical => {
                self.physical = true;
                self.keyboard_navigation = true;
                self.voice_command = true;
            }
            DisabilityCategory::Cognitive => {
                self.cognitive = true;
                self.ai_summary = true;
                self.focus_mode = true;
            }
            DisabilityCategory::Speech => {
                self.speech = true;
                self.text_based_submission = true;
            }
        }
    }

    /// 已启用功能的可读描述，顺序固定
    pub fn active_features(&self) -> Vec<String> {
        [
            (self.ai_summary, "Materi akan otomatis diringkas (Mode Fokus)"),
            (self.subtitles_required, "Video akan selalu menampilkan subtitle"),
            (self.screen_reader_compatible, "Fitur pembaca layar diaktifkan"),
            (self.keyboard_navigation, "Navigasi keyboard diaktifkan"),
            (self.text_based_submission, "Pengumpulan tugas via teks diizinkan"),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, text)| text.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_aliases() {
        assert_eq!(DisabilityCategory::parse("A"), Some(DisabilityCategory::Vision));
        assert_eq!(
            DisabilityCategory::parse("  Tuna Rungu "),
            Some(DisabilityCategory::Hearing)
        );
        assert_eq!(
            DisabilityCategory::parse("motorik"),
            Some(DisabilityCategory::Physical)
        );
        assert_eq!(
            DisabilityCategory::parse("ADHD"),
            Some(DisabilityCategory::Cognitive)
        );
        assert_eq!(DisabilityCategory::parse("bisu"), Some(DisabilityCategory::Speech));
        assert_eq!(DisabilityCategory::parse("unknown"), None);
    }

    #[test]
    fn test_profile_from_categories() {
        let profile = AccessibilityProfile::from_categories(7, &["vision", "e", "nonsense"]);
        assert_eq!(profile.user_id, 7);
        assert!(profile.vision);
        assert!(profile.screen_reader_compatible);
        assert!(profile.audio_description);
        assert!(profile.speech);
        assert!(profile.text_based_submission);
        assert!(!profile.hearing);
        assert!(!profile.ai_summary);
    }

    #[test]
    fn test_empty_categories_give_empty_profile() {
        let profile = AccessibilityProfile::from_categories::<&str>(3, &[]);
        assert_eq!(
            profile,
            AccessibilityProfile {
                user_id: 3,
                ..Default::default()
            }
        );
        assert!(profile.active_features().is_empty());
    }

    #[test]
    fn test_active_features_order() {
        let profile = AccessibilityProfile::from_categories(1, &["speech", "hearing", "d"]);
        assert_eq!(
            profile.active_features(),
            vec![
                "Materi akan otomatis diringkas (Mode Fokus)",
                "Video akan selalu menampilkan subtitle",
                "Pengumpulan tugas via teks diizinkan",
            ]
        );
    }

    #[test]
    fn test_wire_keys() {
        let profile = AccessibilityProfile::from_categories(1, &["b"]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["tuna_rungu"], true);
        assert_eq!(json["butuh_subtitle"], true);
        assert_eq!(json["tuna_netra"], false);
    }
}
