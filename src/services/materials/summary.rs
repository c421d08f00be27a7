//! 材料 AI 摘要

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{MaterialService, owned_material};
use crate::ai::{pdf::extract_pdf_text, resolve_generator, summary_prompt, truncate_chars};
use crate::config::AppConfig;
use crate::models::courses::entities::{Material, MaterialType};
use crate::models::courses::requests::SaveSummaryRequest;
use crate::models::courses::responses::MaterialSummaryResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{bad_request, current_user, reject};

pub async fn generate_summary(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    let (material, _) = owned_material(&storage, &user, material_id).await?;

    // 已有摘要直接返回
    if let Some(feature) = storage.get_smart_feature(material_id).await?
        && let Some(summary) = feature.summary.filter(|s| !s.trim().is_empty())
    {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            MaterialSummaryResponse {
                material_id,
                summary,
                is_generated: feature.is_generated,
            },
            "Ringkasan berhasil diambil",
        )));
    }

    let content = material_content(&material).await?;
    if content.trim().is_empty() {
        return Err(bad_request(
            ErrorCode::BadRequest,
            "konten materi kosong, tidak bisa diringkas",
        ));
    }

    let max_chars = AppConfig::get().ai.max_input_chars;
    let prompt = summary_prompt(truncate_chars(&content, max_chars));

    let generator = resolve_generator(request);
    let summary = generator.generate(&prompt).await.map_err(|e| {
        tracing::error!("Summary generation failed for material {}: {}", material_id, e);
        reject(
            e.status_code(),
            ErrorCode::ExternalServiceFailed,
            format!("gagal menghasilkan ringkasan AI: {}", e.message()),
        )
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MaterialSummaryResponse {
            material_id,
            summary,
            is_generated: true,
        },
        "Ringkasan berhasil dibuat",
    )))
}

/// 可供摘要的原始文本
async fn material_content(material: &Material) -> ActixResult<String> {
    match material.material_type {
        MaterialType::Pdf => {
            let url = material
                .source_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .ok_or_else(|| {
                    bad_request(ErrorCode::BadRequest, "file PDF tidak ditemukan (URL kosong)")
                })?;
            Ok(extract_pdf_text(url).await?)
        }
        MaterialType::Text => Ok(material.raw_content.clone().unwrap_or_default()),
        MaterialType::Youtube => Err(bad_request(
            ErrorCode::MaterialSummaryUnsupported,
            "tipe materi ini belum didukung untuk ringkasan otomatis",
        )),
    }
}

pub async fn save_summary(
    service: &MaterialService,
    request: &HttpRequest,
    material_id: i64,
    body: SaveSummaryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = current_user(request)?;

    owned_material(&storage, &user, material_id).await?;

    let summary = body.summary.trim();
    if summary.is_empty() {
        return Err(bad_request(ErrorCode::BadRequest, "Ringkasan wajib diisi"));
    }

    let feature = storage.save_material_summary(material_id, summary).await?;
    tracing::info!("Lecturer {} saved summary for material {}", user.id, material_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MaterialSummaryResponse {
            material_id,
            summary: feature.summary.unwrap_or_default(),
            is_generated: feature.is_generated,
        },
        "Ringkasan berhasil disimpan",
    )))
}
