//! 认证、无障碍偏好与角色守卫的端点测试

mod common;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use serde_json::json;

use common::*;
use inclusa_lms::models::users::entities::UserRole;
use inclusa_lms::models::users::requests::CreateUserRequest;
use inclusa_lms::storage::Storage;
use inclusa_lms::utils::password::hash_password;

fn register_req(body: serde_json::Value) -> actix_http::Request {
    TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn test_register_login_and_me() {
    let (app, _storage, _) = setup().await;

    let id = register(&app, "Budi", "budi@kampus.ac.id", "dosen").await;

    let (status, body) = login(&app, "budi@kampus.ac.id", PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["id"], id);
    assert_eq!(body["data"]["user"]["role"], "lecturer");
    assert!(body["data"]["user"].get("password_hash").is_none());
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get("/api/v1/auth/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "budi@kampus.ac.id");
    assert!(body["data"]["accessibility"].is_null());

    let req = TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&token))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_register_rejects_duplicates_and_bad_input() {
    let (app, _storage, _) = setup().await;
    register(&app, "Sari", "sari@kampus.ac.id", "mahasiswa").await;

    let base = json!({
        "name": "Sari",
        "email": "sari@kampus.ac.id",
        "password": PASSWORD,
        "confirm_password": PASSWORD,
        "role": "mahasiswa",
    });

    let (status, body) = send(&app, register_req(base.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "email sudah ada");

    let mut bad_role = base.clone();
    bad_role["email"] = json!("lain@kampus.ac.id");
    bad_role["role"] = json!("admin");
    let (status, _) = send(&app, register_req(bad_role)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut mismatch = base.clone();
    mismatch["email"] = json!("lain@kampus.ac.id");
    mismatch["confirm_password"] = json!("berbeda123");
    let (status, _) = send(&app, register_req(mismatch)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut short = base;
    short["email"] = json!("lain@kampus.ac.id");
    short["password"] = json!("123");
    short["confirm_password"] = json!("123");
    let (status, _) = send(&app, register_req(short)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_with_wrong_password() {
    let (app, _storage, _) = setup().await;
    register(&app, "Rina", "rina@kampus.ac.id", "mahasiswa").await;

    let (status, body) = login(&app, "rina@kampus.ac.id", "salah-sekali").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "email atau password salah");

    let (status, _) = login(&app, "tidakada@kampus.ac.id", PASSWORD).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_accessibility_preferences_flow_into_me() {
    let (app, _storage, _) = setup().await;
    let (_, token) = account(&app, "dina@kampus.ac.id", "mahasiswa").await;

    let (status, body) = send(
        &app,
        put_json(
            "/api/v1/users/accessibility",
            &token,
            json!({ "categories": ["tuna netra", "Tuna Rungu"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["profile"]["tuna_netra"], true);
    assert_eq!(body["data"]["profile"]["tuna_rungu"], true);
    assert_eq!(body["data"]["profile"]["tuna_daksa"], false);
    assert_eq!(body["data"]["profile"]["kompatibel_screen_reader"], true);

    let (_, body) = send(&app, get("/api/v1/auth/me", &token)).await;
    assert_eq!(body["data"]["accessibility"]["tuna_netra"], true);

    // 整体替换：清空类别后所有开关关闭
    let (status, body) = send(
        &app,
        put_json("/api/v1/users/accessibility", &token, json!({ "categories": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["profile"]["tuna_netra"], false);
    assert_eq!(body["data"]["profile"]["kompatibel_screen_reader"], false);
}

#[actix_web::test]
async fn test_verify_email_token() {
    let (app, storage, _) = setup().await;
    let user = storage
        .create_user(CreateUserRequest {
            name: "Tono".to_string(),
            email: "tono@kampus.ac.id".to_string(),
            password_hash: hash_password(PASSWORD).unwrap(),
            role: UserRole::Student,
            created_by_id: None,
            is_verified: false,
            verification_token: Some("abc123token".to_string()),
        })
        .await
        .unwrap();

    let uri = "/api/v1/auth/verify-email?token=abc123token";
    let (status, _) = send(&app, TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(status, StatusCode::OK);

    let reloaded = storage.get_user_by_id(user.id).await.unwrap().unwrap();
    assert!(reloaded.is_verified);

    // 令牌只能使用一次
    let (status, _) = send(&app, TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        TestRequest::get().uri("/api/v1/auth/verify-email").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_role_guards() {
    let (app, _storage, _) = setup().await;
    let (_, lecturer) = account(&app, "dosen@kampus.ac.id", "dosen").await;
    let (_, student) = account(&app, "mhs@kampus.ac.id", "mahasiswa").await;

    let (status, _) = send(&app, get("/api/v1/lecturer/courses", &student)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, get("/api/v1/student/courses", &lecturer)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        TestRequest::get().uri("/api/v1/lecturer/courses").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get("/api/v1/auth/me", "bukan.token.valid")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let (app, _storage, _) = setup().await;
    let (status, body) = send(&app, TestRequest::get().uri("/api/v1/health").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
