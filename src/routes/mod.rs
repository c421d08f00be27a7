pub mod assignments;

pub mod auth;

pub mod courses;

pub mod dashboard;

pub mod files;

pub mod materials;

pub mod system;

pub mod users;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use dashboard::configure_dashboard_routes;
pub use files::configure_file_routes;
pub use materials::configure_material_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_course_routes)
        .configure(configure_material_routes)
        .configure(configure_assignment_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_file_routes)
        .configure(configure_system_routes);
}
