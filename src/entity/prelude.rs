//! 预导入模块，方便使用

pub use super::accessibility_profiles::{
    ActiveModel as AccessibilityProfileActiveModel, Entity as AccessibilityProfiles,
    Model as AccessibilityProfileModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::course_students::{
    ActiveModel as CourseStudentActiveModel, Entity as CourseStudents, Model as CourseStudentModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::material_completions::{
    ActiveModel as MaterialCompletionActiveModel, Entity as MaterialCompletions,
    Model as MaterialCompletionModel,
};
pub use super::materials::{
    ActiveModel as MaterialActiveModel, Entity as Materials, Model as MaterialModel,
};
pub use super::modules::{ActiveModel as ModuleActiveModel, Entity as Modules, Model as ModuleModel};
pub use super::smart_features::{
    ActiveModel as SmartFeatureActiveModel, Entity as SmartFeatures, Model as SmartFeatureModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
