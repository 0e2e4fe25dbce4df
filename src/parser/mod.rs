pub mod classifiers;
pub mod text_parser;
pub mod fountain_parser;
pub mod fdx_parser;

pub use classifiers::{
    CueMode,
    extract_location,
    extract_time,
    is_cue_candidate,
    is_scene_heading,
    is_upper_line,
    match_character_cue,
};
pub use text_parser::TextParser;
pub use fountain_parser::FountainParser;
pub use fdx_parser::FdxParser;

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::models::{Conf, ScreenplayDocument};

/// 剧本源格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptFormat {
    Text,
    Fountain,
    Fdx,
}

impl ScriptFormat {
    /// 按文件扩展名识别格式，未知扩展名一律按纯文本处理
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("fdx") => ScriptFormat::Fdx,
            Some("fountain") => ScriptFormat::Fountain,
            _ => ScriptFormat::Text,
        }
    }
}

/// 格式解析器的统一能力接口
///
/// supports_dialogue_detail 标明该格式是否填充对白明细：
/// 纯文本解析器填充，Fountain与FDX只记录角色和动作。
/// 这一不对称是接口契约的一部分，调用方可能依赖它，不要悄悄统一。
pub trait ScriptParser {
    fn parse(&mut self, script: &str, config: &Conf) -> ScreenplayDocument;
    fn supports_dialogue_detail(&self) -> bool;
}

/// 按格式构造对应的解析器
pub fn create_parser(format: ScriptFormat) -> Box<dyn ScriptParser> {
    match format {
        ScriptFormat::Text => Box::new(TextParser::new()),
        ScriptFormat::Fountain => Box::new(FountainParser::new()),
        ScriptFormat::Fdx => Box::new(FdxParser::new()),
    }
}
