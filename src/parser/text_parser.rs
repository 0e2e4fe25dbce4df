use log::debug;
use crate::models::{Conf, DialogueLine, Scene, ScreenplayDocument};
use crate::parser::classifiers::{
    extract_location, is_scene_heading, is_upper_line, match_character_cue, CueMode,
};
use crate::parser::ScriptParser;
use crate::utils::{estimate_pages, ScriptConstants};

/// 纯文本剧本解析器
///
/// 行状态机：未进入场景 / 场景内动作 / 场景内等待对白。
/// 所有状态都在解析器结构体内，每次parse前重置，可重入。
pub struct TextParser {
    scenes: Vec<Scene>,
    current_scene: Option<Scene>,
    scene_number: usize,
    in_dialogue: bool,
    current_character: Option<String>,
}

impl TextParser {
    pub fn new() -> Self {
        TextParser {
            scenes: Vec::new(),
            current_scene: None,
            scene_number: 0,
            in_dialogue: false,
            current_character: None,
        }
    }

    fn reset(&mut self) {
        *self = TextParser::new();
    }

    fn flush_scene(&mut self) {
        if let Some(scene) = self.current_scene.take() {
            self.scenes.push(scene);
        }
    }

    fn open_scene(&mut self, heading: &str) {
        self.flush_scene();
        self.scene_number += 1;
        debug!("识别到场景标题: {}", heading);
        let location = extract_location(heading);
        self.current_scene = Some(Scene::new(self.scene_number, heading, location));
        self.in_dialogue = false;
        self.current_character = None;
    }

    fn process_line(&mut self, stripped: &str) {
        if is_scene_heading(stripped) {
            self.open_scene(stripped);
            return;
        }

        // 第一个场景之前的内容丢弃，标题由单独的探测流程处理
        let Some(scene) = self.current_scene.as_mut() else {
            return;
        };

        if let Some(name) = match_character_cue(stripped, CueMode::Text) {
            // 角色提示行本身不入动作也不入对白
            scene.add_character(&name);
            self.current_character = Some(name);
            self.in_dialogue = true;
            return;
        }

        if self.in_dialogue && !stripped.is_empty() {
            let character = self.current_character.clone().unwrap_or_default();
            if stripped.starts_with('(') && stripped.ends_with(')') {
                // 括号舞台提示不关闭对白状态
                scene
                    .dialogue
                    .push(DialogueLine::parenthetical(character, stripped));
            } else {
                scene.dialogue.push(DialogueLine::dialogue(character, stripped));
                // 单行对白后即关闭对白块，后续行重新按动作归类
                self.in_dialogue = false;
            }
        } else if !stripped.is_empty() {
            scene.action.push(stripped.to_string());
        }
    }
}

impl ScriptParser for TextParser {
    fn parse(&mut self, script: &str, config: &Conf) -> ScreenplayDocument {
        self.reset();

        for line in script.lines() {
            self.process_line(line.trim());
        }
        // 文件结尾也要收掉未入列的场景
        self.flush_scene();

        ScreenplayDocument::assemble(
            extract_title(script, config),
            std::mem::take(&mut self.scenes),
            estimate_pages(script, config.lines_per_page),
        )
    }

    fn supports_dialogue_detail(&self) -> bool {
        true
    }
}

/// 标题探测：前若干个非空行里找第一个不是场景标题/转场的全大写短行
fn extract_title(script: &str, config: &Conf) -> String {
    for line in script
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(config.title_scan_lines)
    {
        if is_upper_line(line)
            && line.chars().count() < config.title_max_chars
            && !ScriptConstants::title_exclude_markers()
                .iter()
                .any(|m| line.contains(m))
        {
            return line.to_string();
        }
    }
    String::new()
}
