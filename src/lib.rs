pub mod models;
pub mod utils;
pub mod parser;
pub mod api;
pub mod error;

pub use models::{
    ScreenplayDocument,
    Scene,
    DialogueLine,
    Location,
    Conf
};

pub use parser::{
    ScriptParser,
    ScriptFormat,
    TextParser,
    FountainParser,
    FdxParser,
    create_parser
};

pub use api::{
    parse_screenplay,
    parse_screenplay_text,
    summarize_script,
    script_to_json
};

pub use error::{ScriptError, Result};

/// 解析剧本文本
///
/// # Arguments
///
/// * `script` - 剧本文本内容
/// * `format` - 源格式（从文件路径识别格式请用 parse_screenplay）
/// * `config` - 配置对象
///
/// # Returns
///
/// 归一化的剧本文档模型
pub fn parse(script: &str, format: ScriptFormat, config: &Conf) -> ScreenplayDocument {
    let mut parser = parser::create_parser(format);
    parser.parse(script, config)
}
