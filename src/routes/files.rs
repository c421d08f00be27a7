use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::FileService;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn handle_upload(
    request: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_upload(&request, payload).await
}

pub async fn handle_download(file_name: web::Path<String>) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_download(file_name.into_inner()).await
}

// 配置路由
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/upload")
            .wrap(middlewares::RequireJWT)
            .route(web::post().to(handle_upload)),
    )
    .service(
        web::scope("/storage/public").route("/{file_name}", web::get().to(handle_download)),
    );
}
