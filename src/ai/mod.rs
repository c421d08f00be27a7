//! 生成式 AI 接入
//!
//! 业务层只依赖 [`TextGenerator`]，默认实现为 Gemini REST 客户端。
//! 测试或其他部署可以通过 `app_data` 注入 `Arc<dyn TextGenerator>` 替换。

pub mod gemini;
pub mod pdf;

use actix_web::{HttpRequest, web};
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::errors::Result;

pub use gemini::GeminiClient;

#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// 根据提示词生成文本
    async fn generate(&self, prompt: &str) -> Result<String>;
}

// 懒加载的默认生成器
static DEFAULT_GENERATOR: Lazy<Arc<dyn TextGenerator>> =
    Lazy::new(|| Arc::new(GeminiClient::from_config()));

/// 优先使用 app_data 中注入的生成器
pub fn resolve_generator(req: &HttpRequest) -> Arc<dyn TextGenerator> {
    req.app_data::<web::Data<Arc<dyn TextGenerator>>>()
        .map(|data| data.get_ref().clone())
        .unwrap_or_else(|| DEFAULT_GENERATOR.clone())
}

const SUMMARY_INSTRUCTION: &str = "Buatkan ringkasan yang komprehensif dari materi berikut. \
Gunakan format Markdown untuk struktur yang rapi: gunakan **bold** untuk istilah penting atau heading, \
list bullet points untuk rincian, dan _italic_ untuk penekanan. \
Pastikan ringkasan mudah dipahami oleh mahasiswa:";

/// 材料摘要提示词
pub fn summary_prompt(content: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}\n\n{content}")
}

/// 按字符截断（不会切断 UTF-8 字符）
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
