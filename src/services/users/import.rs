//! 学生 CSV 导入

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::io::Cursor;

use super::UserService;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::users::responses::ImportStudentsResponse;
use crate::models::{ApiResponse, ErrorCode, accessibility::entities::AccessibilityProfile};
use crate::services::access::{bad_request, current_user};
use crate::utils::multipart::read_file_bytes;
use crate::utils::password::hash_password_blocking;
use crate::utils::validate::validate_account;

/// 导入行数据
#[derive(Debug, Clone, PartialEq)]
struct ImportRow {
    name: String,
    email: String,
    password: String,
    disabilities: Vec<String>,
}

pub async fn import_students(
    service: &UserService,
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let lecturer = current_user(request)?;

    let Some((_, file_bytes)) = read_file_bytes(&mut payload, "file").await? else {
        return Err(bad_request(
            ErrorCode::ImportFileMissing,
            "File CSV wajib diunggah (key: 'file')",
        ));
    };

    let (rows, mut skipped) = parse_csv(&file_bytes).map_err(|e| {
        bad_request(
            ErrorCode::ImportFileParseFailed,
            format!("Gagal membaca CSV: {e}"),
        )
    })?;

    let mut count = 0;
    for row in rows {
        if validate_account(&row.name, &row.email, &row.password).is_err()
            || storage.get_user_by_email(&row.email).await?.is_some()
        {
            skipped += 1;
            continue;
        }

        let password_hash = hash_password_blocking(row.password).await?;
        let user = CreateUserRequest {
            name: row.name,
            email: row.email,
            password_hash,
            role: UserRole::Student,
            created_by_id: Some(lecturer.id),
            is_verified: true,
            verification_token: None,
        };
        let profile = AccessibilityProfile::from_categories(0, &row.disabilities);

        // 其余错误直接中止
        storage.create_student(user, profile, None).await?;
        count += 1;
    }

    tracing::info!(
        "Lecturer {} imported {} students ({} skipped)",
        lecturer.id,
        count,
        skipped
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ImportStudentsResponse { count, skipped },
        "Import berhasil",
    )))
}

/// 解析 CSV，返回 (有效行, 列数不足被跳过的行数)
fn parse_csv(data: &[u8]) -> Result<(Vec<ImportRow>, usize), csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(data));

    let mut rows = Vec::new();
    let mut skipped = 0;

    for (index, result) in rdr.records().enumerate() {
        let record = result?;

        // 可选表头
        if index == 0 {
            let first = record.get(0).unwrap_or_default().to_lowercase();
            if first == "name" || first == "nama" {
                continue;
            }
        }

        if record.len() < 3 {
            skipped += 1;
            continue;
        }

        let disabilities = record
            .get(3)
            .map(|cell| {
                cell.split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        rows.push(ImportRow {
            name: record.get(0).unwrap_or_default().to_string(),
            email: record.get(1).unwrap_or_default().to_lowercase(),
            password: record.get(2).unwrap_or_default().to_string(),
            disabilities,
        });
    }

    Ok((rows, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_row_is_skipped() {
        let data = b"nama,email,password\nBudi,budi@example.com,rahasia1\n";
        let (rows, skipped) = parse_csv(data).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Budi");
        assert!(rows[0].disabilities.is_empty());
    }

    #[test]
    fn test_without_header() {
        let data = b"Ani,ANI@example.com,rahasia1,vision; hearing ;\n";
        let (rows, _) = parse_csv(data).unwrap();
        assert_eq!(
            rows,
            vec![ImportRow {
                name: "Ani".into(),
                email: "ani@example.com".into(),
                password: "rahasia1".into(),
                disabilities: vec!["vision".into(), "hearing".into()],
            }]
        );
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let data = b"Name,Email,Password\nCitra,citra@example.com\nDodi,dodi@example.com,rahasia1\n";
        let (rows, skipped) = parse_csv(data).unwrap();
        assert_eq!(skipped, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "dodi@example.com");
    }
}
