use actix_web::{HttpResponse, Result as ActixResult, http::header};

use crate::errors::LmsError;
use crate::models::ErrorCode;
use crate::services::access::{bad_request, not_found};
use crate::utils::file_magic::{content_type_for, extension_of};
use crate::utils::multipart::stored_file_path;

pub async fn handle_download(file_name: String) -> ActixResult<HttpResponse> {
    let Some(path) = stored_file_path(&file_name) else {
        return Err(bad_request(ErrorCode::BadRequest, "Nama file tidak valid"));
    };

    let buf = match tokio::fs::read(&path).await {
        Ok(buf) => buf,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(not_found(ErrorCode::FileNotFound, "File tidak ditemukan"));
        }
        Err(e) => {
            tracing::error!("{}", LmsError::file_operation(format!("{e}")));
            return Err(LmsError::file_operation("Gagal membaca file").into());
        }
    };

    let content_type = content_type_for(&extension_of(&file_name).unwrap_or_default());

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type))
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .body(buf))
}
