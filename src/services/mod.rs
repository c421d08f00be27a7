pub(crate) mod access;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod files;
pub mod materials;
pub mod system;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use files::FileService;
pub use materials::MaterialService;
pub use system::SystemService;
pub use users::UserService;
