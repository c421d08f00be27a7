//! 材料、模块、AI 摘要与文件上传的端点测试

mod common;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use serde_json::json;

use common::*;

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D];

/// 创建含一个空模块的课程，返回 (课程 ID, 模块 ID)
async fn course_with_module<S, B>(app: &S, token: &str) -> (i64, i64)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse<B>,
            Error = actix_web::Error,
        >,
    B: actix_web::body::MessageBody,
{
    let course = create_course(
        app,
        token,
        &[("title", "Biologi"), ("modules", r#"[{"title":"Sel","order":1}]"#)],
    )
    .await;
    (
        course["id"].as_i64().unwrap(),
        course["modules"][0]["id"].as_i64().unwrap(),
    )
}

#[actix_web::test]
async fn test_material_crud() {
    let (app, _storage, _) = setup().await;
    let (_, token) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, other) = account(&app, "lain@kampus.ac.id", "dosen").await;
    let (course_id, module_id) = course_with_module(&app, &token).await;
    let create_uri = format!("/api/v1/lecturer/modules/{module_id}/materials");

    let req = multipart(
        TestRequest::post(),
        &create_uri,
        &token,
        &[
            ("title", "Struktur Sel"),
            ("type", "text"),
            ("raw_content", "Sel adalah unit terkecil kehidupan."),
            ("duration_min", "15"),
            ("has_captions", "true"),
        ],
        None,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let material_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["module_id"], module_id);
    assert_eq!(body["data"]["duration_min"], 15);
    assert_eq!(body["data"]["has_captions"], true);

    let req = multipart(TestRequest::post(), &create_uri, &token, &[("title", "Tanpa tipe")], None);
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = multipart(
        TestRequest::post(),
        &create_uri,
        &token,
        &[("title", "Audio"), ("type", "podcast")],
        None,
    );
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = multipart(
        TestRequest::post(),
        &create_uri,
        &other,
        &[("title", "Bukan milikku"), ("type", "text")],
        None,
    );
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let material_uri = format!("/api/v1/lecturer/materials/{material_id}");
    let req = multipart(
        TestRequest::put(),
        &material_uri,
        &token,
        &[
            ("title", "Video Sel"),
            ("type", "youtube"),
            ("source_url", "https://youtu.be/sel"),
        ],
        None,
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["type"], "youtube");
    assert_eq!(body["data"]["source_url"], "https://youtu.be/sel");

    let (status, body) = send(&app, get(&format!("/api/v1/materials/{material_id}"), &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Video Sel");
    assert_eq!(body["data"]["is_completed"], false);

    let (status, _) = send(&app, delete(&material_uri, &other)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, delete(&material_uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, get(&format!("/api/v1/materials/{material_id}"), &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let module_uri = format!("/api/v1/lecturer/modules/{module_id}");
    let (status, _) = send(&app, delete(&module_uri, &other)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&app, delete(&module_uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, delete(&module_uri, &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, get(&format!("/api/v1/lecturer/courses/{course_id}"), &token)).await;
    assert!(body["data"]["modules"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_generate_and_save_summary() {
    let (app, _storage, generator) = setup().await;
    let (_, token) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, module_id) = course_with_module(&app, &token).await;
    let create_uri = format!("/api/v1/lecturer/modules/{module_id}/materials");

    let req = multipart(
        TestRequest::post(),
        &create_uri,
        &token,
        &[("title", "Mitokondria"), ("type", "text"), ("raw_content", "Mitokondria menghasilkan energi.")],
        None,
    );
    let (_, body) = send(&app, req).await;
    let text_id = body["data"]["id"].as_i64().unwrap();

    let summary_uri = format!("/api/v1/lecturer/materials/{text_id}/summary");
    let (status, body) = send(&app, get(&summary_uri, &token)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["summary"], FakeGenerator::REPLY);
    assert_eq!(body["data"]["is_generated"], true);
    assert_eq!(generator.calls(), 1);
    {
        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Mitokondria menghasilkan energi."));
    }

    // 生成结果不落库，保存后直接返回已存摘要
    let (status, body) = send(
        &app,
        put_json(&summary_uri, &token, json!({ "summary": "  Ringkasan manual  " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["summary"], "Ringkasan manual");

    let (_, body) = send(&app, get(&summary_uri, &token)).await;
    assert_eq!(body["data"]["summary"], "Ringkasan manual");
    assert_eq!(generator.calls(), 1);

    let (status, _) = send(&app, put_json(&summary_uri, &token, json!({ "summary": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = multipart(
        TestRequest::post(),
        &create_uri,
        &token,
        &[("title", "Video"), ("type", "youtube"), ("source_url", "https://youtu.be/v")],
        None,
    );
    let (_, body) = send(&app, req).await;
    let video_id = body["data"]["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        get(&format!("/api/v1/lecturer/materials/{video_id}/summary"), &token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = multipart(
        TestRequest::post(),
        &create_uri,
        &token,
        &[("title", "Kosong"), ("type", "text")],
        None,
    );
    let (_, body) = send(&app, req).await;
    let empty_id = body["data"]["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        get(&format!("/api/v1/lecturer/materials/{empty_id}/summary"), &token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(generator.calls(), 1);
}

#[actix_web::test]
async fn test_upload_and_download_file() {
    let (app, _storage, _) = setup().await;
    let (_, token) = account(&app, "mhs@kampus.ac.id", "mahasiswa").await;

    let req = multipart(
        TestRequest::post(),
        "/api/v1/upload",
        &token,
        &[],
        Some(FilePart {
            field: "file",
            file_name: "gambar.png",
            bytes: PNG,
        }),
    );
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["size"], PNG.len());
    let file_name = body["data"]["file_name"].as_str().unwrap().to_string();
    assert!(file_name.ends_with(".png"));
    assert!(body["data"]["url"].as_str().unwrap().ends_with(&format!("/storage/public/{file_name}")));

    let resp = actix_web::test::call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/storage/public/{file_name}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "image/png"
    );
    let bytes = actix_web::test::read_body(resp).await;
    assert_eq!(bytes.as_ref(), PNG);

    let _ = std::fs::remove_file(
        std::path::Path::new(&inclusa_lms::config::AppConfig::get().upload.dir).join(&file_name),
    );

    // 扩展名与内容不符
    let req = multipart(
        TestRequest::post(),
        "/api/v1/upload",
        &token,
        &[],
        Some(FilePart {
            field: "file",
            file_name: "palsu.png",
            bytes: b"bukan gambar",
        }),
    );
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = multipart(TestRequest::post(), "/api/v1/upload", &token, &[("note", "x")], None);
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "File tidak ditemukan. Pastikan key form-data adalah 'file'"
    );

    let (status, _) = send(
        &app,
        TestRequest::get().uri("/storage/public/tidak-ada.png").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = TestRequest::post().uri("/api/v1/upload").to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
