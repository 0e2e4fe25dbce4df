//! 共享分类器：场景标题识别与角色提示识别
//!
//! 三个格式解析器都复用这里的纯函数。分类判断用常量表直接比较，
//! 替换类处理（括号修饰、双对白标记）用 utils 里的正则。

use crate::models::Location;
use crate::utils::script_constants::{ScriptConstants, CUE_REGEX};

/// 角色提示识别的解析模式，纯文本和Fountain的边界规则不同
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueMode {
    Text,
    Fountain,
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

/// 判断一行是否为场景标题
///
/// 允许一个前导 `.`（Fountain强制场景标记），之后必须以
/// `INT.`、`EXT.`、`INT./EXT.`、`EXT./INT.`、`I/E.` 之一开头，大小写不敏感。
pub fn is_scene_heading(line: &str) -> bool {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix('.').unwrap_or(trimmed);
    ScriptConstants::scene_heading_prefixes()
        .iter()
        .any(|p| starts_with_ignore_ascii_case(rest, p))
}

/// 从场景标题提取地点、时间与内外景标记
///
/// int_ext 按整行是否含有子串 "INT" 判断而不是按前缀判断，
/// 因此 INT./EXT. 归为 INT。这是沿用的既有行为，不要顺手"修正"。
pub fn extract_location(heading: &str) -> Location {
    let trimmed = heading.trim();
    let rest = trimmed.strip_prefix('.').unwrap_or(trimmed);

    let int_ext = if trimmed.to_uppercase().contains("INT") {
        "INT"
    } else {
        "EXT"
    };

    // 剥离前缀，复合前缀优先，EXT./INT. 不会被截一半
    let mut name = rest;
    for prefix in ScriptConstants::scene_heading_prefixes() {
        if starts_with_ignore_ascii_case(name, prefix) {
            name = name[prefix.len()..].trim_start();
            break;
        }
    }
    let name = strip_time_suffix(name).trim();

    Location::new(
        name.to_string(),
        int_ext.to_string(),
        extract_time(trimmed),
    )
}

/// 提取时间标记：找连字符后跟时间词的位置，返回大写词，找不到为空
pub fn extract_time(heading: &str) -> String {
    for (i, _) in heading.match_indices('-') {
        let after = heading[i + 1..].trim_start();
        for token in ScriptConstants::time_of_day_tokens() {
            if starts_with_ignore_ascii_case(after, token) {
                return (*token).to_string();
            }
        }
    }
    String::new()
}

// 去掉 " - DAY" 之类的时间后缀
fn strip_time_suffix(name: &str) -> &str {
    for (i, _) in name.match_indices('-') {
        let after = name[i + 1..].trim_start();
        if ScriptConstants::time_of_day_tokens()
            .iter()
            .any(|t| starts_with_ignore_ascii_case(after, t))
        {
            return name[..i].trim_end();
        }
    }
    name
}

/// 一行是否全大写（至少一个有大小写的字符且没有小写字符）
pub fn is_upper_line(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// 一行是否具备角色提示的形状：全大写且长度在边界内（开区间）
///
/// 纯文本模式下界为2，Fountain模式放宽到1。
pub fn is_cue_candidate(line: &str, mode: CueMode) -> bool {
    let min_len = match mode {
        CueMode::Text => 2,
        CueMode::Fountain => 1,
    };
    let len = line.chars().count();
    len > min_len && len < 45 && is_upper_line(line)
}

/// 识别角色提示并提取角色名
///
/// 排除词表按子串匹配命中即拒绝；Fountain模式额外拒绝以 `:` 结尾的行，
/// 并先去掉双对白标记再剥离括号修饰。剥离后为空不算有效提示。
pub fn match_character_cue(line: &str, mode: CueMode) -> Option<String> {
    if !is_cue_candidate(line, mode) {
        return None;
    }
    if mode == CueMode::Fountain && line.ends_with(':') {
        return None;
    }
    if ScriptConstants::character_exclude_markers()
        .iter()
        .any(|m| line.contains(m))
    {
        return None;
    }

    let name = match mode {
        CueMode::Text => CUE_REGEX["parenthetical"]
            .replace_all(line, "")
            .trim()
            .to_string(),
        CueMode::Fountain => {
            let without_dual = CUE_REGEX["dual_marker"].replace(line, "");
            CUE_REGEX["parenthetical_trailing"]
                .replace_all(&without_dual, "")
                .trim()
                .to_string()
        }
    };

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_extraction() {
        let loc = extract_location("INT. COFFEE SHOP - DAY");
        assert_eq!(loc.int_ext, "INT");
        assert_eq!(loc.name, "COFFEE SHOP");
        assert_eq!(loc.time_of_day, "DAY");

        let loc = extract_location("EXT. ROOFTOP - NIGHT");
        assert_eq!(loc.int_ext, "EXT");
        assert_eq!(loc.name, "ROOFTOP");
        assert_eq!(loc.time_of_day, "NIGHT");
    }

    #[test]
    fn test_compound_prefix_is_int() {
        // 子串规则：INT./EXT. 整体归为 INT，沿用既有行为
        let loc = extract_location("INT./EXT. CAR - CONTINUOUS");
        assert_eq!(loc.int_ext, "INT");
        assert_eq!(loc.name, "CAR");
        assert_eq!(loc.time_of_day, "CONTINUOUS");

        let loc = extract_location("EXT./INT. GARAGE - DUSK");
        assert_eq!(loc.int_ext, "INT");
        assert_eq!(loc.name, "GARAGE");
        assert_eq!(loc.time_of_day, "DUSK");
    }

    #[test]
    fn test_heading_recognition() {
        assert!(is_scene_heading("INT. KITCHEN - DAY"));
        assert!(is_scene_heading("ext. backlot"));
        assert!(is_scene_heading("I/E. TRUCK - NIGHT"));
        assert!(is_scene_heading(".INT. GARAGE - NIGHT"));
        assert!(!is_scene_heading("The door opens."));
        assert!(!is_scene_heading("INTERIOR SHOT"));
    }

    #[test]
    fn test_heading_without_time() {
        let loc = extract_location("INT. BASEMENT");
        assert_eq!(loc.name, "BASEMENT");
        assert_eq!(loc.time_of_day, "");

        // 地点内部的连字符不算时间分隔
        let loc = extract_location("EXT. SOUTH-WEST PIER - DAWN");
        assert_eq!(loc.name, "SOUTH-WEST PIER");
        assert_eq!(loc.time_of_day, "DAWN");
    }

    #[test]
    fn test_character_cue_basic() {
        assert_eq!(
            match_character_cue("JOHN", CueMode::Text),
            Some("JOHN".to_string())
        );
        assert_eq!(
            match_character_cue("JOHN (V.O.)", CueMode::Text),
            Some("JOHN".to_string())
        );
        assert_eq!(match_character_cue("John", CueMode::Text), None);
        assert_eq!(match_character_cue("123", CueMode::Text), None);
    }

    #[test]
    fn test_character_cue_exclusions() {
        // 转场不是角色提示
        assert_eq!(match_character_cue("CUT TO:", CueMode::Text), None);
        assert_eq!(match_character_cue("FADE OUT", CueMode::Text), None);
        assert_eq!(match_character_cue("END OF ACT ONE", CueMode::Text), None);
        // 排除词表按子串匹配
        assert_eq!(match_character_cue("MOREAU", CueMode::Text), None);
    }

    #[test]
    fn test_character_cue_length_bounds() {
        // 纯文本下界为2（开区间），Fountain放宽到1
        assert_eq!(match_character_cue("AB", CueMode::Text), None);
        assert_eq!(
            match_character_cue("AB", CueMode::Fountain),
            Some("AB".to_string())
        );
        let long = "A".repeat(45);
        assert_eq!(match_character_cue(&long, CueMode::Text), None);
    }

    #[test]
    fn test_character_cue_fountain_rules() {
        // 以冒号结尾的行在Fountain模式下排除
        assert_eq!(match_character_cue("NARRATOR:", CueMode::Fountain), None);
        // 双对白标记连同其后内容一起去掉
        assert_eq!(
            match_character_cue("JOHN ^", CueMode::Fountain),
            Some("JOHN".to_string())
        );
        assert_eq!(
            match_character_cue("JANE (O.S.) ^", CueMode::Fountain),
            Some("JANE".to_string())
        );
    }

    #[test]
    fn test_cue_empty_after_stripping() {
        // 剥离括号后为空，不是有效提示
        assert_eq!(match_character_cue("(SHOUTING)", CueMode::Text), None);
    }

    #[test]
    fn test_is_upper_line() {
        assert!(is_upper_line("JOHN"));
        assert!(is_upper_line("JOHN-2"));
        assert!(!is_upper_line("John"));
        assert!(!is_upper_line("123"));
        assert!(!is_upper_line(""));
    }
}
