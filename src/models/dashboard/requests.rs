use serde::Deserialize;

pub const DEFAULT_ACTIVITY_LIMIT: u64 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    // 以字符串接收，非法或非正数时回退到默认值
    pub limit: Option<String>,
}

impl ActivityQuery {
    pub fn effective_limit(&self) -> u64 {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l > 0)
            .map(|l| l as u64)
            .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
    }
}
