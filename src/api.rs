//! 对外API
//!
//! 文件解析入口（按扩展名分发格式）、人类可读摘要视图与JSON导出。

use std::fs;
use std::path::Path;
use log::info;

use crate::error::Result;
use crate::models::{Conf, ScreenplayDocument};
use crate::parser::{create_parser, ScriptFormat, ScriptParser};

/// 解析剧本文件
///
/// 按扩展名选择解析器（.fdx / .fountain / 其他按纯文本）。
/// 内容按UTF-8宽松解码，无法解码的字节替换处理而不报错；
/// 只有文件本身读不到才返回错误。
pub fn parse_screenplay(
    path: impl AsRef<Path>,
    config: Option<Conf>,
) -> Result<ScreenplayDocument> {
    let path = path.as_ref();
    let format = ScriptFormat::from_path(path);
    info!("解析剧本文件: {} ({:?})", path.display(), format);

    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_screenplay_text(
        &content,
        format,
        &config.unwrap_or_default(),
    ))
}

/// 解析已解码的剧本文本
pub fn parse_screenplay_text(
    script: &str,
    format: ScriptFormat,
    config: &Conf,
) -> ScreenplayDocument {
    let mut parser = create_parser(format);
    parser.parse(script, config)
}

/// 生成人类可读的剧本摘要
///
/// 标题行、场景/角色/页数统计，之后每个场景一行标题，
/// 角色最多列4个，超出部分折叠为 (+N more)。
pub fn summarize_script(doc: &ScreenplayDocument) -> String {
    let mut lines = Vec::new();
    let title = if doc.title.is_empty() {
        "Untitled"
    } else {
        doc.title.as_str()
    };
    lines.push(format!("Title: {}", title));
    lines.push(format!("Scenes: {}", doc.scenes.len()));
    lines.push(format!("Characters: {}", doc.characters.len()));
    lines.push(format!("Est. Pages: {}", doc.page_count));
    lines.push(String::new());
    lines.push("Scene Breakdown:".to_string());

    for scene in &doc.scenes {
        lines.push(format!("  {}. {}", scene.number, scene.heading));
        let mut chars = scene
            .characters
            .iter()
            .take(4)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if scene.characters.len() > 4 {
            chars.push_str(&format!(" (+{} more)", scene.characters.len() - 4));
        }
        if !chars.is_empty() {
            lines.push(format!("      Characters: {}", chars));
        }
    }

    lines.join("\n")
}

/// 序列化为JSON
pub fn script_to_json(doc: &ScreenplayDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
