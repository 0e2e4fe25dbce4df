use serde::{Deserialize, Serialize};

/// 场景标题解析出的地点信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// 地点名称（去掉INT/EXT前缀和时间后缀）
    pub name: String,
    /// INT 或 EXT
    pub int_ext: String,
    /// 时间标记（DAY、NIGHT等，可能为空）
    pub time_of_day: String,
}

impl Location {
    pub fn new(name: String, int_ext: String, time_of_day: String) -> Self {
        Location {
            name,
            int_ext,
            time_of_day,
        }
    }
}
