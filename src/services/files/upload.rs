use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, files::responses::FileUploadResponse};
use crate::services::access::{bad_request, current_user};
use crate::utils::multipart::{FileRule, collect_form, public_url};

const FILE_RULE: FileRule<'static> = FileRule {
    field: "file",
    extensions: &[],
};

pub async fn handle_upload(req: &HttpRequest, mut payload: Multipart) -> ActixResult<HttpResponse> {
    let user = current_user(req)?;

    // 扩展名、魔术字节与大小在落盘时校验
    let form = collect_form(&mut payload, &[FILE_RULE]).await?;
    let Some(stored) = form.file(FILE_RULE.field) else {
        return Err(bad_request(
            ErrorCode::FileNotFound,
            "File tidak ditemukan. Pastikan key form-data adalah 'file'",
        ));
    };

    tracing::info!(
        "User {} uploaded {} as {} ({} bytes)",
        user.id,
        stored.original_name,
        stored.file_name,
        stored.size
    );

    let response = FileUploadResponse {
        url: public_url(req, &stored.file_name),
        file_name: stored.file_name.clone(),
        size: stored.size,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "File berhasil diunggah")))
}
