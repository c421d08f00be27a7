//! 端点测试共用工具：内存 SQLite、测试应用与请求辅助函数

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

use inclusa_lms::ai::TextGenerator;
use inclusa_lms::errors::Result;
use inclusa_lms::routes;
use inclusa_lms::storage::Storage;
use inclusa_lms::storage::sea_orm_storage::SeaOrmStorage;
use inclusa_lms::utils::{json_error_handler, query_error_handler};

pub const PASSWORD: &str = "rahasia123";
pub const BOUNDARY: &str = "----inclusa-test-boundary";

/// 记录提示词并返回固定文本的生成器
#[derive(Default)]
pub struct FakeGenerator {
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub const REPLY: &'static str = "**Ringkasan** materi uji";

    pub fn calls(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(Self::REPLY.to_string())
    }
}

pub async fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(
        SeaOrmStorage::new_with_url("sqlite::memory:")
            .await
            .expect("in-memory storage"),
    )
}

pub async fn init_app(
    storage: Arc<dyn Storage>,
    generator: Arc<FakeGenerator>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    let generator: Arc<dyn TextGenerator> = generator;
    test::init_service(
        App::new()
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(generator))
            .configure(routes::configure_routes),
    )
    .await
}

/// 新建内存库与应用
pub async fn setup() -> (
    impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    Arc<dyn Storage>,
    Arc<FakeGenerator>,
) {
    let storage = memory_storage().await;
    let generator = Arc::new(FakeGenerator::default());
    let app = init_app(storage.clone(), generator.clone()).await;
    (app, storage, generator)
}

/// 发送请求并解析 JSON 响应体
pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

pub fn get(uri: &str, token: &str) -> Request {
    TestRequest::get()
        .uri(uri)
        .insert_header(bearer(token))
        .to_request()
}

pub fn delete(uri: &str, token: &str) -> Request {
    TestRequest::delete()
        .uri(uri)
        .insert_header(bearer(token))
        .to_request()
}

pub fn post_json(uri: &str, token: &str, body: Value) -> Request {
    TestRequest::post()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
        .to_request()
}

pub fn put_json(uri: &str, token: &str, body: Value) -> Request {
    TestRequest::put()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
        .to_request()
}

/// 一个 multipart 文件字段
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub bytes: &'a [u8],
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(file) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart(
    method: TestRequest,
    uri: &str,
    token: &str,
    fields: &[(&str, &str)],
    file: Option<FilePart<'_>>,
) -> Request {
    method
        .uri(uri)
        .insert_header(bearer(token))
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(fields, file))
        .to_request()
}

/// 注册并返回用户 ID
pub async fn register<S, B>(app: &S, name: &str, email: &str, role: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({
            "name": name,
            "email": email,
            "password": PASSWORD,
            "confirm_password": PASSWORD,
            "role": role,
        }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["data"]["id"].as_i64().expect("user id")
}

pub async fn login<S, B>(app: &S, email: &str, password: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    send(app, req).await
}

/// 注册并登录，返回 (用户 ID, 令牌)
pub async fn account<S, B>(app: &S, email: &str, role: &str) -> (i64, String)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let id = register(app, email.split('@').next().unwrap_or(email), email, role).await;
    let (status, body) = login(app, email, PASSWORD).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    let token = body["data"]["token"].as_str().expect("token").to_string();
    (id, token)
}

/// 讲师创建课程，返回响应中的课程对象
pub async fn create_course<S, B>(app: &S, token: &str, fields: &[(&str, &str)]) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = multipart(
        TestRequest::post(),
        "/api/v1/lecturer/courses",
        token,
        fields,
        None,
    );
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "create course failed: {body}");
    body["data"].clone()
}
