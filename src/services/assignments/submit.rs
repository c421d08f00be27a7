use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AssignmentService, find_assignment};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{bad_request, current_user, forbidden};
use crate::services::courses::detail::MSG_NOT_JOINED;

pub async fn submit_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    body: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let assignment = find_assignment(&storage, assignment_id).await?;
    if !storage.is_enrolled(assignment.course_id, user.id).await? {
        return Err(forbidden(ErrorCode::CoursePermissionDenied, MSG_NOT_JOINED));
    }

    let submission = normalize(body);
    check_submission(&assignment, &submission, chrono::Utc::now())
        .map_err(|msg| bad_request(ErrorCode::SubmissionRejected, msg))?;

    let (submission, created) = storage
        .upsert_submission(assignment.id, user.id, submission)
        .await?;

    tracing::info!(
        "Student {} submitted assignment {} (new: {})",
        user.id,
        assignment.id,
        created
    );

    if created {
        Ok(HttpResponse::Created().json(ApiResponse::success(
            submission,
            "Tugas berhasil dikumpulkan",
        )))
    } else {
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            submission,
            "Jawaban berhasil diperbarui",
        )))
    }
}

fn normalize(body: SubmitAssignmentRequest) -> SubmitAssignmentRequest {
    let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    SubmitAssignmentRequest {
        text_answer: clean(body.text_answer),
        file_url: clean(body.file_url),
        voice_note_url: clean(body.voice_note_url),
    }
}

/// 校验答案类型与截止时间
fn check_submission(
    assignment: &Assignment,
    submission: &SubmitAssignmentRequest,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<(), &'static str> {
    if submission.text_answer.is_some() && !assignment.allow_text {
        return Err("Jawaban teks tidak diizinkan untuk tugas ini");
    }
    if submission.file_url.is_some() && !assignment.allow_file {
        return Err("Jawaban berupa file tidak diizinkan untuk tugas ini");
    }
    if submission.voice_note_url.is_some() && !assignment.allow_voice {
        return Err("Jawaban berupa rekaman suara tidak diizinkan untuk tugas ini");
    }
    if submission.text_answer.is_none()
        && submission.file_url.is_none()
        && submission.voice_note_url.is_none()
    {
        return Err("Jawaban wajib diisi");
    }
    if assignment.is_past_deadline(now) && !assignment.allow_late {
        return Err("Batas waktu pengumpulan sudah lewat");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn assignment(allow_text: bool, allow_file: bool, allow_late: bool) -> Assignment {
        let now = Utc::now();
        Assignment {
            id: 1,
            course_id: 1,
            module_id: None,
            title: "Esai".into(),
            instruction: "Tulis esai".into(),
            deadline: now + Duration::days(1),
            max_points: 100,
            allow_text,
            allow_file,
            allow_voice: false,
            allow_late,
            created_at: now,
            updated_at: now,
            my_submission: None,
        }
    }

    fn text(answer: &str) -> SubmitAssignmentRequest {
        normalize(SubmitAssignmentRequest {
            text_answer: Some(answer.into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_text_answer_accepted() {
        assert!(check_submission(&assignment(true, false, false), &text("jawaban"), Utc::now()).is_ok());
    }

    #[test]
    fn test_blank_answer_rejected() {
        assert_eq!(
            check_submission(&assignment(true, true, false), &text("   "), Utc::now()),
            Err("Jawaban wajib diisi")
        );
    }

    #[test]
    fn test_disallowed_kind_rejected() {
        let submission = SubmitAssignmentRequest {
            file_url: Some("https://x/storage/public/1.pdf".into()),
            ..Default::default()
        };
        assert!(check_submission(&assignment(true, false, false), &submission, Utc::now()).is_err());

        let voice = SubmitAssignmentRequest {
            voice_note_url: Some("https://x/storage/public/2.mp3".into()),
            ..Default::default()
        };
        assert!(check_submission(&assignment(true, true, true), &voice, Utc::now()).is_err());
    }

    #[test]
    fn test_deadline() {
        let late = Utc::now() + Duration::days(2);
        assert_eq!(
            check_submission(&assignment(true, false, false), &text("x"), late),
            Err("Batas waktu pengumpulan sudah lewat")
        );
        assert!(check_submission(&assignment(true, false, true), &text("x"), late).is_ok());
    }
}
