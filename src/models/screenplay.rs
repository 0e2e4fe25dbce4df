use serde::{Deserialize, Serialize};
use crate::models::scene::Scene;

/// 解析后的剧本文档模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenplayDocument {
    /// 剧本标题，可能为空
    pub title: String,
    /// 场景列表，按文档顺序
    pub scenes: Vec<Scene>,
    /// 全文档角色名册（各场景名册的并集，按首次出现顺序）
    pub characters: Vec<String>,
    /// 估算页数
    pub page_count: usize,
}

impl ScreenplayDocument {
    /// 汇总各场景的角色名册并组装最终文档
    pub fn assemble(title: String, scenes: Vec<Scene>, page_count: usize) -> Self {
        let mut characters: Vec<String> = Vec::new();
        for scene in &scenes {
            for name in &scene.characters {
                if !characters.iter().any(|c| c == name) {
                    characters.push(name.clone());
                }
            }
        }

        ScreenplayDocument {
            title,
            scenes,
            characters,
            page_count,
        }
    }
}
