//! 无障碍偏好实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accessibility_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub vision: bool,
    pub hearing: bool,
    pub physical: bool,
    pub cognitive: bool,
    pub speech: bool,
    pub screen_reader_compatible: bool,
    pub audio_description: bool,
    pub subtitles_required: bool,
    pub visual_notifications: bool,
    pub keyboard_navigation: bool,
    pub voice_command: bool,
    pub ai_summary: bool,
    pub focus_mode: bool,
    pub text_based_submission: bool,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_profile(self) -> crate::models::accessibility::entities::AccessibilityProfile {
        crate::models::accessibility::entities::AccessibilityProfile {
            user_id: self.user_id,
            vision: self.vision,
            hearing: self.hearing,
            physical: self.physical,
            cognitive: self.cognitive,
            speech: self.speech,
            screen_reader_compatible: self.screen_reader_compatible,
            audio_description: self.audio_description,
            subtitles_required: self.subtitles_required,
            visual_notifications: self.visual_notifications,
            keyboard_navigation: self.keyboard_navigation,
            voice_command: self.voice_command,
            ai_summary: self.ai_summary,
            focus_mode: self.focus_mode,
            text_based_submission: self.text_based_submission,
        }
    }
}

impl ActiveModel {
    /// 由业务模型构建完整的 ActiveModel（用于整体替换）
    pub fn from_profile(
        profile: &crate::models::accessibility::entities::AccessibilityProfile,
        now: i64,
    ) -> Self {
        use sea_orm::Set;

        Self {
            user_id: Set(profile.user_id),
            vision: Set(profile.vision),
            hearing: Set(profile.hearing),
            physical: Set(profile.physical),
            cognitive: Set(profile.cognitive),
            speech: Set(profile.speech),
            screen_reader_compatible: Set(profile.screen_reader_compatible),
            audio_description: Set(profile.audio_description),
            subtitles_required: Set(profile.subtitles_required),
            visual_notifications: Set(profile.visual_notifications),
            keyboard_navigation: Set(profile.keyboard_navigation),
            voice_command: Set(profile.voice_command),
            ai_summary: Set(profile.ai_summary),
            focus_mode: Set(profile.focus_mode),
            text_based_submission: Set(profile.text_based_submission),
            updated_at: Set(now),
        }
    }
}
