//! 课程 multipart 表单

use actix_multipart::Multipart;
use actix_web::{HttpRequest, Result as ActixResult};

use crate::models::ErrorCode;
use crate::models::courses::{entities::CourseStatus, requests::ModuleInput};
use crate::services::access::bad_request;
use crate::utils::multipart::{FileRule, MultipartForm, collect_form, public_url};
use crate::utils::validate::validate_class_code;

const THUMBNAIL_RULE: FileRule<'static> = FileRule {
    field: "thumbnail",
    extensions: &[".jpg", ".jpeg", ".png"],
};

/// 解析后的课程表单
#[derive(Debug)]
pub struct CourseForm {
    pub title: String,
    pub description: Option<String>,
    pub class_code: Option<String>,
    pub status: Option<CourseStatus>,
    pub thumbnail: Option<String>,
    pub modules: Vec<ModuleInput>,
    form: MultipartForm,
}

impl CourseForm {
    /// 后续业务失败时清理已保存的缩略图
    pub fn discard_upload(&self) {
        self.form.discard_files();
    }
}

pub async fn read_course_form(
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<CourseForm> {
    let form = collect_form(&mut payload, &[THUMBNAIL_RULE]).await?;

    match parse_fields(&form) {
        Ok((title, description, class_code, status, modules)) => {
            let thumbnail = form
                .file(THUMBNAIL_RULE.field)
                .map(|f| public_url(request, &f.file_name));
            Ok(CourseForm {
                title,
                description,
                class_code,
                status,
                thumbnail,
                modules,
                form,
            })
        }
        Err(e) => {
            form.discard_files();
            Err(e)
        }
    }
}

type Fields = (
    String,
    Option<String>,
    Option<String>,
    Option<CourseStatus>,
    Vec<ModuleInput>,
);

fn parse_fields(form: &MultipartForm) -> ActixResult<Fields> {
    let title = form
        .text("title")
        .ok_or_else(|| bad_request(ErrorCode::BadRequest, "Judul kelas wajib diisi"))?;

    let class_code = match form.text("class_code") {
        Some(code) => {
            validate_class_code(&code)
                .map_err(|msg| bad_request(ErrorCode::CourseClassCodeInvalid, msg))?;
            Some(code)
        }
        None => None,
    };

    let status = form
        .text("status")
        .map(|s| s.parse::<CourseStatus>())
        .transpose()
        .map_err(|_| {
            bad_request(
                ErrorCode::BadRequest,
                "Status kelas tidak valid (published, draft, archived)",
            )
        })?;

    let modules = parse_modules(form.raw("modules"))?;

    Ok((title, form.text("description"), class_code, status, modules))
}

/// `modules` 字段为 JSON 字符串；缺省或空白视为空列表
pub(crate) fn parse_modules(raw: Option<&str>) -> ActixResult<Vec<ModuleInput>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => serde_json::from_str::<Vec<ModuleInput>>(json).map_err(|e| {
            bad_request(
                ErrorCode::BadRequest,
                format!("Format modules tidak valid: {e}"),
            )
        }),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::MaterialType;

    #[test]
    fn test_parse_modules_json() {
        let raw = r#"[{"title":"Pengantar","order":1,"materials":[
            {"title":"Video","type":"youtube","source_url":"https://youtu.be/x","duration_min":10},
            {"id":4,"title":"Catatan","type":"text","raw_content":"isi"}
        ]},{"id":2,"title":"Lanjutan"}]"#;
        let modules = parse_modules(Some(raw)).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].existing_id(), None);
        assert_eq!(modules[0].materials[0].material_type, MaterialType::Youtube);
        assert_eq!(modules[0].materials[1].existing_id(), Some(4));
        assert_eq!(modules[1].existing_id(), Some(2));
        assert!(modules[1].materials.is_empty());
    }

    #[test]
    fn test_missing_modules_is_empty() {
        assert!(parse_modules(None).unwrap().is_empty());
        assert!(parse_modules(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_modules_rejected() {
        assert!(parse_modules(Some("{not json")).is_err());
        assert!(parse_modules(Some(r#"[{"title":"x","materials":[{"title":"y","type":"audio"}]}]"#)).is_err());
    }
}
