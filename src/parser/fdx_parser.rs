use log::warn;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, ScriptError};
use crate::models::{Conf, Scene, ScreenplayDocument};
use crate::parser::classifiers::extract_location;
use crate::parser::text_parser::TextParser;
use crate::parser::ScriptParser;
use crate::utils::script_constants::CUE_REGEX;

// 遍历中的段落状态，段落结束时一次性归类
struct ParagraphState {
    para_type: String,
    text: String,
    in_title_page: bool,
    in_content: bool,
    text_runs: usize,
    in_text: bool,
}

/// Final Draft XML（FDX）解析器
///
/// 对段落序列做一次线性遍历：Scene Heading 开启新场景，
/// Character 与 Action 归入当前场景，其他类型忽略。
/// 结构不合法时整体回退到纯文本解析器，不向调用方报错。
/// 页数按场景数估算。不填充对白明细。
pub struct FdxParser {
    scenes: Vec<Scene>,
    current_scene: Option<Scene>,
    scene_number: usize,
    title: String,
}

impl FdxParser {
    pub fn new() -> Self {
        FdxParser {
            scenes: Vec::new(),
            current_scene: None,
            scene_number: 0,
            title: String::new(),
        }
    }

    fn reset(&mut self) {
        *self = FdxParser::new();
    }

    fn flush_scene(&mut self) {
        if let Some(scene) = self.current_scene.take() {
            self.scenes.push(scene);
        }
    }

    fn finish_paragraph(&mut self, p: ParagraphState) {
        if p.in_title_page {
            // 标题页里只关心第一个 Title 段落
            if p.para_type == "Title" && self.title.is_empty() {
                let t = p.text.trim();
                if !t.is_empty() {
                    self.title = t.to_string();
                }
            }
            return;
        }
        if !p.in_content {
            return;
        }

        match p.para_type.as_str() {
            "Scene Heading" => {
                self.flush_scene();
                self.scene_number += 1;
                let location = extract_location(&p.text);
                self.current_scene = Some(Scene::new(self.scene_number, &p.text, location));
            }
            "Character" => {
                if let Some(scene) = self.current_scene.as_mut() {
                    let name = CUE_REGEX["parenthetical_trailing"]
                        .replace_all(&p.text, "")
                        .trim()
                        .to_string();
                    if !name.is_empty() {
                        scene.add_character(&name);
                    }
                }
            }
            "Action" => {
                if let Some(scene) = self.current_scene.as_mut() {
                    scene.action.push(p.text);
                }
            }
            _ => {}
        }
    }

    // 事件流遍历；任何结构错误都返回Err，由parse整体回退
    fn walk(&mut self, xml: &str) -> Result<()> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut stack: Vec<String> = Vec::new();
        let mut paragraph: Option<ParagraphState> = None;
        let mut saw_root = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    saw_root = true;

                    if name == "Paragraph" && paragraph.is_none() {
                        let mut para_type = String::new();
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"Type" {
                                para_type = String::from_utf8_lossy(&attr.value).to_string();
                            }
                        }
                        paragraph = Some(ParagraphState {
                            para_type,
                            text: String::new(),
                            in_title_page: stack.iter().any(|n| n == "TitlePage"),
                            in_content: stack.iter().any(|n| n == "Content"),
                            text_runs: 0,
                            in_text: false,
                        });
                    } else if name == "Text" {
                        if let Some(p) = paragraph.as_mut() {
                            // 只取段落的第一个Text子元素
                            if p.text_runs == 0 {
                                p.in_text = true;
                            }
                            p.text_runs += 1;
                        }
                    }

                    stack.push(name);
                }
                Ok(Event::Empty(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    saw_root = true;

                    if name == "Paragraph" && paragraph.is_none() {
                        let mut para_type = String::new();
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"Type" {
                                para_type = String::from_utf8_lossy(&attr.value).to_string();
                            }
                        }
                        self.finish_paragraph(ParagraphState {
                            para_type,
                            text: String::new(),
                            in_title_page: stack.iter().any(|n| n == "TitlePage"),
                            in_content: stack.iter().any(|n| n == "Content"),
                            text_runs: 0,
                            in_text: false,
                        });
                    } else if name == "Text" {
                        if let Some(p) = paragraph.as_mut() {
                            p.text_runs += 1;
                        }
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(p) = paragraph.as_mut() {
                        if p.in_text {
                            p.text.push_str(&e.unescape()?);
                        }
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(p) = paragraph.as_mut() {
                        if p.in_text {
                            p.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                        }
                    }
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    match stack.pop() {
                        Some(open) if open == name => {}
                        _ => {
                            return Err(ScriptError::MalformedError(format!(
                                "unexpected closing tag: {}",
                                name
                            )));
                        }
                    }

                    if name == "Text" {
                        if let Some(p) = paragraph.as_mut() {
                            p.in_text = false;
                        }
                    } else if name == "Paragraph" {
                        if let Some(p) = paragraph.take() {
                            self.finish_paragraph(p);
                        }
                    }
                }
                Ok(Event::Eof) => {
                    if !stack.is_empty() {
                        return Err(ScriptError::MalformedError(
                            "unclosed elements at end of document".to_string(),
                        ));
                    }
                    if !saw_root {
                        return Err(ScriptError::MalformedError(
                            "no root element".to_string(),
                        ));
                    }
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => return Err(e.into()),
            }
            buf.clear();
        }
    }
}

impl ScriptParser for FdxParser {
    fn parse(&mut self, script: &str, config: &Conf) -> ScreenplayDocument {
        self.reset();

        match self.walk(script) {
            Ok(()) => {
                self.flush_scene();
                let page_count = self.scenes.len();
                ScreenplayDocument::assemble(
                    std::mem::take(&mut self.title),
                    std::mem::take(&mut self.scenes),
                    page_count,
                )
            }
            Err(e) => {
                // 结构不合法时整体换用纯文本解析，而不是部分恢复
                warn!("FDX结构解析失败，回退到纯文本解析: {}", e);
                let mut fallback = TextParser::new();
                fallback.parse(script, config)
            }
        }
    }

    fn supports_dialogue_detail(&self) -> bool {
        false
    }
}
