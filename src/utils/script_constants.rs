use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

pub struct ScriptConstants;

impl ScriptConstants {
    /// 场景标题前缀，复合前缀在前，保证剥离时取最长匹配
    pub fn scene_heading_prefixes() -> &'static [&'static str] {
        &["INT./EXT.", "EXT./INT.", "I/E.", "INT.", "EXT."]
    }

    /// 时间标记词表，按匹配优先级排列
    pub fn time_of_day_tokens() -> &'static [&'static str] {
        &[
            "DAY",
            "NIGHT",
            "MORNING",
            "EVENING",
            "DUSK",
            "DAWN",
            "CONTINUOUS",
            "LATER",
            "SAME",
        ]
    }

    /// 角色提示排除词表（转场、格式标记等），对已大写的行做子串匹配
    pub fn character_exclude_markers() -> &'static [&'static str] {
        &[
            "CUT TO",
            "FADE",
            "DISSOLVE",
            "SMASH",
            "MATCH",
            "INSERT",
            "BACK TO",
            "END OF",
            "TITLE CARD",
            "SUPER:",
            "INTERCUT",
            "FLASHBACK",
            "DREAM",
            "MONTAGE",
            "SERIES OF",
            "THE END",
            "CONTINUED",
            "MORE",
            "CONT'D",
        ]
    }

    /// 标题探测时排除的标记（场景标题和转场不作为标题）
    pub fn title_exclude_markers() -> &'static [&'static str] {
        &["INT.", "EXT.", "FADE", "CUT"]
    }
}

lazy_static! {
    // 替换类正则，分类判断用常量表直接比较，不走正则引擎
    pub static ref CUE_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        // 括号修饰（如 (V.O.)、(CONT'D)），纯文本模式连同两侧空白一起去掉
        map.insert("parenthetical", Regex::new(r"\s*\(.*?\)\s*").unwrap());
        // Fountain/FDX模式只去掉括号本身，保留后续空白
        map.insert("parenthetical_trailing", Regex::new(r"\s*\(.*?\)").unwrap());
        // 双对白标记 ^ 或 @ 及其后的所有内容
        map.insert("dual_marker", Regex::new(r"\s*[\^@].*").unwrap());
        // Fountain标题页的 Title: 元数据行
        map.insert("title_meta", Regex::new(r"(?im)^title:\s*(.+)$").unwrap());
        map
    };
}
