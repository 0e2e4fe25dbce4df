use serde::{Deserialize, Serialize};
use crate::models::location::Location;

/// 对白行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// 说话角色名（未识别到角色提示时为空）
    pub character: String,
    /// 行类型: dialogue 或 parenthetical
    pub kind: String,
    pub text: String,
}

impl DialogueLine {
    pub fn dialogue(character: String, text: &str) -> Self {
        DialogueLine {
            character,
            kind: "dialogue".to_string(),
            text: text.to_string(),
        }
    }

    pub fn parenthetical(character: String, text: &str) -> Self {
        DialogueLine {
            character,
            kind: "parenthetical".to_string(),
            text: text.to_string(),
        }
    }
}

/// 单个场景
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 场景编号，从1开始按文档顺序递增
    pub number: usize,
    /// 场景标题（统一转为大写）
    pub heading: String,
    pub location: String,
    /// DAY、NIGHT等时间标记，可能为空
    pub time_of_day: String,
    /// INT 或 EXT
    pub int_ext: String,
    /// 场景内出现的角色，按首次出现顺序去重
    pub characters: Vec<String>,
    /// 动作描述行
    pub action: Vec<String>,
    /// 对白行（仅纯文本解析器填充）
    pub dialogue: Vec<DialogueLine>,
}

impl Scene {
    pub fn new(number: usize, heading: &str, location: Location) -> Self {
        Scene {
            number,
            heading: heading.trim().to_uppercase(),
            location: location.name,
            time_of_day: location.time_of_day,
            int_ext: location.int_ext,
            characters: Vec::new(),
            action: Vec::new(),
            dialogue: Vec::new(),
        }
    }

    /// 记录角色到场景名册，保持首次出现顺序
    pub fn add_character(&mut self, name: &str) {
        if !self.characters.iter().any(|c| c == name) {
            self.characters.push(name.to_string());
        }
    }
}
