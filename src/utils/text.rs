// ============================================================================
// 文本工具：HTML 转义、状态 slug、首字母
// 所有用户输入的文本在进入标记之前都必须经过 escape_html
// ============================================================================

use regex::Regex;
use std::sync::LazyLock;

/// 连续的非 [a-z0-9] 字符
static NON_ALNUM_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("NON_ALNUM_RUN 正则表达式无效")
});

/// 将文本转义为可安全嵌入 HTML 文本节点或带引号属性值的形式
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 生成状态 slug：转小写，非字母数字串折叠为单个 `-`，去掉首尾 `-`
///
/// 例如 `"In Review!"` → `"in-review"`
pub fn slugify(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// 取首字符并转为大写（未转义），空字符串返回空
pub fn first_letter_upper(raw: &str) -> String {
    raw.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// 首字母大写，其余保持不变（如 `"ongoing"` → `"Ongoing"`）
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
