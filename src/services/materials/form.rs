//! 材料 multipart 表单

use actix_multipart::Multipart;
use actix_web::{HttpRequest, Result as ActixResult};

use crate::models::ErrorCode;
use crate::models::courses::{entities::MaterialType, requests::MaterialInput};
use crate::services::access::bad_request;
use crate::utils::multipart::{FileRule, MultipartForm, collect_form, public_url};

// 扩展名白名单取自 upload.allowed_types
const FILE_RULE: FileRule<'static> = FileRule {
    field: "file",
    extensions: &[],
};

pub struct MaterialForm {
    pub input: MaterialInput,
    /// 本次上传文件的公开地址
    pub uploaded_url: Option<String>,
    form: MultipartForm,
}

impl MaterialForm {
    pub fn discard_upload(&self) {
        self.form.discard_files();
    }
}

pub async fn read_material_form(
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<MaterialForm> {
    let form = collect_form(&mut payload, &[FILE_RULE]).await?;

    let input = match parse_input(&form) {
        Ok(input) => input,
        Err(e) => {
            form.discard_files();
            return Err(e);
        }
    };
    let uploaded_url = form
        .file(FILE_RULE.field)
        .map(|f| public_url(request, &f.file_name));

    Ok(MaterialForm {
        input,
        uploaded_url,
        form,
    })
}

fn parse_input(form: &MultipartForm) -> ActixResult<MaterialInput> {
    let title = form
        .text("title")
        .ok_or_else(|| bad_request(ErrorCode::BadRequest, "Judul materi wajib diisi"))?;
    let material_type = form
        .text("type")
        .ok_or_else(|| bad_request(ErrorCode::BadRequest, "Tipe materi wajib diisi"))?
        .parse::<MaterialType>()
        .map_err(|_| {
            bad_request(
                ErrorCode::BadRequest,
                "Tipe materi tidak valid (youtube, pdf, text)",
            )
        })?;

    Ok(MaterialInput {
        id: None,
        title,
        material_type,
        source_url: form.text("source_url"),
        raw_content: form.raw("raw_content").map(str::to_string),
        duration_min: form.parse::<i32>("duration_min").unwrap_or(0).max(0),
        has_captions: form.flag("has_captions"),
    })
}
