use serde::{Deserialize, Serialize};

/// 解析配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conf {
    /// 每页行数（用于页数估算，非空行计数）
    pub lines_per_page: usize,
    /// 标题探测扫描的非空行数上限
    pub title_scan_lines: usize,
    /// 标题行最大字符数（超过则不视为标题）
    pub title_max_chars: usize,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            lines_per_page: 55,
            title_scan_lines: 20,
            title_max_chars: 60,
        }
    }
}
