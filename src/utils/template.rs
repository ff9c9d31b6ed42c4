//! 替换模板辅助函数

/// 替换模板中的捕获占位符
pub const CAPTURE_PLACEHOLDER: &str = "$1";

/// 仅替换 `input` 中第一次出现的 `search`；未出现时原样返回
pub fn replace_first(input: &str, search: &str, replacement: &str) -> String {
    match input.find(search) {
        Some(index) => {
            let mut out = String::with_capacity(input.len() - search.len() + replacement.len());
            out.push_str(&input[..index]);
            out.push_str(replacement);
            out.push_str(&input[index + search.len()..]);
            out
        }
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_only_first_occurrence() {
        assert_eq!(replace_first("$1 and $1", "$1", "x"), "x and $1");
    }

    #[test]
    fn test_replace_missing_search_keeps_input() {
        assert_eq!(replace_first("Chrome", "$1", "90"), "Chrome");
    }

    #[test]
    fn test_replace_with_empty_capture() {
        assert_eq!(replace_first("X$1Y", "$1", ""), "XY");
    }
}
