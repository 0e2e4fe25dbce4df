pub mod script_constants;

pub use script_constants::ScriptConstants;

/// 估算页数：非空行数整除每页行数，至少1页
pub fn estimate_pages(text: &str, lines_per_page: usize) -> usize {
    let count = text.lines().filter(|l| !l.trim().is_empty()).count();
    std::cmp::max(1, count / lines_per_page.max(1))
}
