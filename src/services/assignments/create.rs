use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::{CreateAssignmentRequest, NewAssignment};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{
    MSG_COURSE_NOT_FOUND, bad_request, current_user, ensure_course_owner,
};

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    course_id: i64,
    body: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let course = storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| bad_request(ErrorCode::CourseNotFound, MSG_COURSE_NOT_FOUND))?;
    ensure_course_owner(&user, &course)?;

    let title = body.title.trim().to_string();
    let instruction = body.instruction.trim().to_string();
    if title.is_empty() {
        return Err(bad_request(ErrorCode::BadRequest, "Judul tugas wajib diisi"));
    }
    if instruction.is_empty() {
        return Err(bad_request(ErrorCode::BadRequest, "Instruksi tugas wajib diisi"));
    }
    if body.max_points <= 0 {
        return Err(bad_request(
            ErrorCode::BadRequest,
            "Poin maksimal harus lebih dari 0",
        ));
    }
    let deadline = chrono::DateTime::parse_from_rfc3339(body.deadline.trim())
        .map_err(|_| {
            bad_request(
                ErrorCode::BadRequest,
                "Format deadline tidak valid (gunakan RFC3339)",
            )
        })?
        .with_timezone(&chrono::Utc);

    if let Some(module_id) = body.module_id {
        let valid = storage
            .get_module_by_id(module_id)
            .await?
            .is_some_and(|m| m.course_id == course.id);
        if !valid {
            return Err(bad_request(
                ErrorCode::ModuleNotFound,
                "modul tidak valid untuk kelas ini",
            ));
        }
    }

    let assignment = storage
        .create_assignment(NewAssignment {
            course_id: course.id,
            module_id: body.module_id,
            title,
            instruction,
            deadline,
            max_points: body.max_points,
            allow_text: body.allow_text,
            allow_file: body.allow_file,
            allow_voice: false,
            allow_late: body.allow_late,
        })
        .await?;

    tracing::info!(
        "Lecturer {} created assignment {} in course {}",
        user.id,
        assignment.id,
        course.id
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "Tugas berhasil dibuat")))
}
