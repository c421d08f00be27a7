use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentService, find_assignment};
use crate::models::assignments::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{bad_request, current_user, not_found, owned_course};

const MSG_SUBMISSION_NOT_FOUND: &str = "Pengumpulan tidak ditemukan";

pub async fn list_submissions(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let assignment = find_assignment(&storage, assignment_id).await?;
    owned_course(&storage, &user, assignment.course_id).await?;

    let submissions = storage.list_assignment_submissions(assignment.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        submissions,
        "Daftar pengumpulan berhasil diambil",
    )))
}

pub async fn grade_submission(
    service: &AssignmentService,
    request: &HttpRequest,
    submission_id: i64,
    body: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let submission = storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| not_found(ErrorCode::SubmissionNotFound, MSG_SUBMISSION_NOT_FOUND))?;
    let assignment = find_assignment(&storage, submission.assignment_id).await?;
    owned_course(&storage, &user, assignment.course_id).await?;

    if !body.grade.is_finite() || body.grade < 0.0 || body.grade > f64::from(assignment.max_points)
    {
        return Err(bad_request(
            ErrorCode::BadRequest,
            format!("Nilai harus antara 0 dan {}", assignment.max_points),
        ));
    }

    let feedback = body
        .feedback
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty());
    let graded = storage
        .grade_submission(submission.id, body.grade, feedback)
        .await?
        .ok_or_else(|| not_found(ErrorCode::SubmissionNotFound, MSG_SUBMISSION_NOT_FOUND))?;

    tracing::info!(
        "Lecturer {} graded submission {} with {}",
        user.id,
        graded.id,
        graded.grade
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "Nilai berhasil disimpan")))
}
