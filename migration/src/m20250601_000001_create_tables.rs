use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Avatar).string().null())
                    .col(
                        ColumnDef::new(Users::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::CurrentStreak)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::LastActivityDate).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedById).big_integer().null())
                    .col(
                        ColumnDef::new(Users::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::VerificationToken).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::CreatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 无障碍偏好表（与用户一对一）
        manager
            .create_table(
                Table::create()
                    .table(AccessibilityProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessibilityProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(flag(AccessibilityProfiles::Vision))
                    .col(flag(AccessibilityProfiles::Hearing))
                    .col(flag(AccessibilityProfiles::Physical))
                    .col(flag(AccessibilityProfiles::Cognitive))
                    .col(flag(AccessibilityProfiles::Speech))
                    .col(flag(AccessibilityProfiles::ScreenReaderCompatible))
                    .col(flag(AccessibilityProfiles::AudioDescription))
                    .col(flag(AccessibilityProfiles::SubtitlesRequired))
                    .col(flag(AccessibilityProfiles::VisualNotifications))
                    .col(flag(AccessibilityProfiles::KeyboardNavigation))
                    .col(flag(AccessibilityProfiles::VoiceCommand))
                    .col(flag(AccessibilityProfiles::AiSummary))
                    .col(flag(AccessibilityProfiles::FocusMode))
                    .col(flag(AccessibilityProfiles::TextBasedSubmission))
                    .col(
                        ColumnDef::new(AccessibilityProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AccessibilityProfiles::Table, AccessibilityProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(id_col(Courses::Id))
                    .col(ColumnDef::new(Courses::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::Thumbnail).string().null())
                    .col(
                        ColumnDef::new(Courses::ClassCode)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程学生关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseStudents::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseStudents::CourseId)
                            .col(CourseStudents::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 模块表
        manager
            .create_table(
                Table::create()
                    .table(Modules::Table)
                    .if_not_exists()
                    .col(id_col(Modules::Id))
                    .col(ColumnDef::new(Modules::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Modules::Title).string().not_null())
                    .col(
                        ColumnDef::new(Modules::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Modules::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Modules::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Modules::Table, Modules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 材料表
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(id_col(Materials::Id))
                    .col(ColumnDef::new(Materials::ModuleId).big_integer().not_null())
                    .col(ColumnDef::new(Materials::Title).string().not_null())
                    .col(ColumnDef::new(Materials::MaterialType).string().not_null())
                    .col(ColumnDef::new(Materials::SourceUrl).string().null())
                    .col(ColumnDef::new(Materials::RawContent).text().null())
                    .col(
                        ColumnDef::new(Materials::DurationMin)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(flag(Materials::HasCaptions))
                    .col(ColumnDef::new(Materials::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Materials::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Materials::Table, Materials::ModuleId)
                            .to(Modules::Table, Modules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 智能特性表（AI 摘要等，每个材料至多一条）
        manager
            .create_table(
                Table::create()
                    .table(SmartFeatures::Table)
                    .if_not_exists()
                    .col(id_col(SmartFeatures::Id))
                    .col(
                        ColumnDef::new(SmartFeatures::MaterialId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SmartFeatures::Summary).text().null())
                    .col(ColumnDef::new(SmartFeatures::SimplifiedContent).text().null())
                    .col(ColumnDef::new(SmartFeatures::QuizData).text().null())
                    .col(flag(SmartFeatures::IsGenerated))
                    .col(
                        ColumnDef::new(SmartFeatures::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SmartFeatures::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SmartFeatures::Table, SmartFeatures::MaterialId)
                            .to(Materials::Table, Materials::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 材料完成记录表
        manager
            .create_table(
                Table::create()
                    .table(MaterialCompletions::Table)
                    .if_not_exists()
                    .col(id_col(MaterialCompletions::Id))
                    .col(
                        ColumnDef::new(MaterialCompletions::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MaterialCompletions::MaterialId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(flag(MaterialCompletions::Completed))
                    .col(
                        ColumnDef::new(MaterialCompletions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MaterialCompletions::Table, MaterialCompletions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MaterialCompletions::Table, MaterialCompletions::MaterialId)
                            .to(Materials::Table, Materials::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(id_col(Assignments::Id))
                    .col(ColumnDef::new(Assignments::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::ModuleId).big_integer().null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Instruction).text().not_null())
                    .col(ColumnDef::new(Assignments::Deadline).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::MaxPoints).integer().not_null())
                    .col(flag(Assignments::AllowText))
                    .col(flag(Assignments::AllowFile))
                    .col(flag(Assignments::AllowVoice))
                    .col(flag(Assignments::AllowLate))
                    .col(ColumnDef::new(Assignments::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::ModuleId)
                            .to(Modules::Table, Modules::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(id_col(Submissions::Id))
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Submissions::TextAnswer).text().null())
                    .col(ColumnDef::new(Submissions::FileUrl).string().null())
                    .col(ColumnDef::new(Submissions::VoiceNoteUrl).string().null())
                    .col(
                        ColumnDef::new(Submissions::Grade)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Submissions::Feedback).text().null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 好友关系表（社交功能预留）
        manager
            .create_table(
                Table::create()
                    .table(Friendships::Table)
                    .if_not_exists()
                    .col(id_col(Friendships::Id))
                    .col(
                        ColumnDef::new(Friendships::RequesterId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Friendships::AddresseeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Friendships::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Friendships::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Friendships::Table, Friendships::RequesterId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Friendships::Table, Friendships::AddresseeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 测验：科目
        manager
            .create_table(
                Table::create()
                    .table(Subtests::Table)
                    .if_not_exists()
                    .col(id_col(Subtests::Id))
                    .col(ColumnDef::new(Subtests::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subtests::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subtests::Icon).string().null())
                    .to_owned(),
            )
            .await?;

        // 测验：题目
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(id_col(Questions::Id))
                    .col(ColumnDef::new(Questions::SubtestId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::QuestionText).text().not_null())
                    .col(ColumnDef::new(Questions::ImageUrl).string().null())
                    .col(ColumnDef::new(Questions::OptionA).text().not_null())
                    .col(ColumnDef::new(Questions::OptionB).text().not_null())
                    .col(ColumnDef::new(Questions::OptionC).text().not_null())
                    .col(ColumnDef::new(Questions::OptionD).text().not_null())
                    .col(ColumnDef::new(Questions::OptionE).text().not_null())
                    .col(ColumnDef::new(Questions::CorrectAnswer).string_len(1).not_null())
                    .col(ColumnDef::new(Questions::Explanation).text().null())
                    .col(
                        ColumnDef::new(Questions::Difficulty)
                            .string()
                            .not_null()
                            .default("medium"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::SubtestId)
                            .to(Subtests::Table, Subtests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 测验：对战
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(id_col(Matches::Id))
                    .col(ColumnDef::new(Matches::Player1Id).big_integer().not_null())
                    .col(ColumnDef::new(Matches::Player2Id).big_integer().null())
                    .col(ColumnDef::new(Matches::WinnerId).big_integer().null())
                    .col(ColumnDef::new(Matches::SubtestId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Matches::Status)
                            .string()
                            .not_null()
                            .default("ongoing"),
                    )
                    .col(ColumnDef::new(Matches::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Matches::Table, Matches::Player1Id)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Matches::Table, Matches::SubtestId)
                            .to(Subtests::Table, Subtests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 测验：对战明细
        manager
            .create_table(
                Table::create()
                    .table(MatchDetails::Table)
                    .if_not_exists()
                    .col(id_col(MatchDetails::Id))
                    .col(ColumnDef::new(MatchDetails::MatchId).big_integer().not_null())
                    .col(ColumnDef::new(MatchDetails::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(MatchDetails::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchDetails::Answer).string_len(1).null())
                    .col(flag(MatchDetails::IsCorrect))
                    .col(
                        ColumnDef::new(MatchDetails::AnsweredAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MatchDetails::Table, MatchDetails::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MatchDetails::Table, MatchDetails::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_teacher_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_modules_course_id")
                    .table(Modules::Table)
                    .col(Modules::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_materials_module_id")
                    .table(Materials::Table)
                    .col(Materials::ModuleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_material_completions_user_material")
                    .table(MaterialCompletions::Table)
                    .col(MaterialCompletions::UserId)
                    .col(MaterialCompletions::MaterialId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_course_id")
                    .table(Assignments::Table)
                    .col(Assignments::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_assignment_student")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(MatchDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subtests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Friendships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MaterialCompletions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SmartFeatures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccessibilityProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

fn flag<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    Avatar,
    Points,
    CurrentStreak,
    LastActivityDate,
    CreatedById,
    IsVerified,
    VerificationToken,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AccessibilityProfiles {
    #[sea_orm(iden = "accessibility_profiles")]
    Table,
    UserId,
    Vision,
    Hearing,
    Physical,
    Cognitive,
    Speech,
    ScreenReaderCompatible,
    AudioDescription,
    SubtitlesRequired,
    VisualNotifications,
    KeyboardNavigation,
    VoiceCommand,
    AiSummary,
    FocusMode,
    TextBasedSubmission,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    TeacherId,
    Title,
    Description,
    Thumbnail,
    ClassCode,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseStudents {
    #[sea_orm(iden = "course_students")]
    Table,
    CourseId,
    UserId,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Modules {
    #[sea_orm(iden = "modules")]
    Table,
    Id,
    CourseId,
    Title,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Materials {
    #[sea_orm(iden = "materials")]
    Table,
    Id,
    ModuleId,
    Title,
    MaterialType,
    SourceUrl,
    RawContent,
    DurationMin,
    HasCaptions,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SmartFeatures {
    #[sea_orm(iden = "smart_features")]
    Table,
    Id,
    MaterialId,
    Summary,
    SimplifiedContent,
    QuizData,
    IsGenerated,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MaterialCompletions {
    #[sea_orm(iden = "material_completions")]
    Table,
    Id,
    UserId,
    MaterialId,
    Completed,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CourseId,
    ModuleId,
    Title,
    Instruction,
    Deadline,
    MaxPoints,
    AllowText,
    AllowFile,
    AllowVoice,
    AllowLate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    TextAnswer,
    FileUrl,
    VoiceNoteUrl,
    Grade,
    Feedback,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Friendships {
    #[sea_orm(iden = "friendships")]
    Table,
    Id,
    RequesterId,
    AddresseeId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subtests {
    #[sea_orm(iden = "subtests")]
    Table,
    Id,
    Name,
    Slug,
    Icon,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    SubtestId,
    QuestionText,
    ImageUrl,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    OptionE,
    CorrectAnswer,
    Explanation,
    Difficulty,
}

#[derive(DeriveIden)]
enum Matches {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    #[sea_orm(iden = "player1_id")]
    Player1Id,
    #[sea_orm(iden = "player2_id")]
    Player2Id,
    WinnerId,
    SubtestId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MatchDetails {
    #[sea_orm(iden = "match_details")]
    Table,
    Id,
    MatchId,
    UserId,
    QuestionId,
    Answer,
    IsCorrect,
    AnsweredAt,
}
