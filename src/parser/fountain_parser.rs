use crate::models::{Conf, Scene, ScreenplayDocument};
use crate::parser::classifiers::{
    extract_location, is_cue_candidate, is_scene_heading, match_character_cue, CueMode,
};
use crate::parser::ScriptParser;
use crate::utils::estimate_pages;
use crate::utils::script_constants::CUE_REGEX;
use log::debug;

/// Fountain格式解析器
///
/// 与纯文本解析器共用分类器，差异在于：标题取自 Title: 元数据行；
/// 以 `.` 开头的行强制开启新场景；`>` 转场行和裸括号行不入动作。
/// 该解析器不填充对白明细，只记录角色与动作。
pub struct FountainParser {
    scenes: Vec<Scene>,
    current_scene: Option<Scene>,
    scene_number: usize,
}

impl FountainParser {
    pub fn new() -> Self {
        FountainParser {
            scenes: Vec::new(),
            current_scene: None,
            scene_number: 0,
        }
    }

    fn reset(&mut self) {
        *self = FountainParser::new();
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
    }

    fn process_line(&mut self, stripped: &str) {
        // 强制场景标题：去掉前导点，余下部分整体作为标题
        if stripped.starts_with('.') && stripped.len() > 1 {
            self.open_scene(stripped[1..].trim());
            return;
        }

        if is_scene_heading(stripped) {
            self.open_scene(stripped);
            return;
        }

        let Some(scene) = self.current_scene.as_mut() else {
            return;
        };

        if is_cue_candidate(stripped, CueMode::Fountain) {
            // 形状符合但未通过完整校验的行整体丢弃，不落入动作
            if let Some(name) = match_character_cue(stripped, CueMode::Fountain) {
                scene.add_character(&name);
            }
        } else if !stripped.is_empty() && !stripped.starts_with('>') && !stripped.starts_with('(') {
            scene.action.push(stripped.to_string());
        }
    }
}

impl ScriptParser for FountainParser {
    fn parse(&mut self, script: &str, config: &Conf) -> ScreenplayDocument {
        self.reset();

        // 标题页元数据，取第一个 Title: 行
        let title = CUE_REGEX["title_meta"]
            .captures(script)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();

        for line in script.lines() {
            self.process_line(line.trim());
        }
        self.flush_scene();

        ScreenplayDocument::assemble(
            title,
            std::mem::take(&mut self.scenes),
            estimate_pages(script, config.lines_per_page),
        )
    }

    fn supports_dialogue_detail(&self) -> bool {
        false
    }
}
