//! 分组游标绑定器
//! 按字段声明顺序，将第 n 个字段与正则的第 n 个捕获分组逐一对齐

use regex::Captures;

use crate::utils::replace_first;
use crate::utils::template::CAPTURE_PLACEHOLDER;

/// 单个字段的取值方式（由 `<field>_replacement` 决定）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTemplate {
    /// 无模板：直接取捕获分组文本
    Capture,
    /// 模板含 `$1`：用捕获文本替换第一个占位符
    Substitute(String),
    /// 模板不含占位符：原样使用，分组被跳过
    Literal(String),
}

impl FieldTemplate {
    pub fn from_replacement(replacement: Option<&str>) -> Self {
        match replacement {
            None => FieldTemplate::Capture,
            Some(t) if t.contains(CAPTURE_PLACEHOLDER) => FieldTemplate::Substitute(t.to_string()),
            Some(t) => FieldTemplate::Literal(t.to_string()),
        }
    }
}

/// 分组游标
///
/// 从分组 1 开始，每个字段无论取值方式如何都恰好消耗一个分组。
/// 游标只属于一次规则求值，不跨调用、不跨规则共享。
pub struct GroupCursor<'c, 'h> {
    captures: &'c Captures<'h>,
    index: usize,
}

impl<'c, 'h> GroupCursor<'c, 'h> {
    pub fn new(captures: &'c Captures<'h>) -> Self {
        Self { captures, index: 1 }
    }

    /// 下一个待消费的分组序号
    pub fn position(&self) -> usize {
        self.index
    }

    /// 消费一个分组；分组未参与匹配或越界时为 None
    fn advance(&mut self) -> Option<&'h str> {
        let group = self.captures.get(self.index).map(|m| m.as_str());
        self.index += 1;
        group
    }

    /// 计算一个字段的值并推进游标
    pub fn bind(&mut self, template: &FieldTemplate) -> Option<String> {
        let group = self.advance();
        match template {
            FieldTemplate::Capture => group.map(str::to_string),
            // 分组未参与时保留未替换的模板（含 `$1`）
            FieldTemplate::Substitute(t) => Some(match group {
                Some(text) => replace_first(t, CAPTURE_PLACEHOLDER, text),
                None => t.clone(),
            }),
            FieldTemplate::Literal(t) => Some(t.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn bind_all(pattern: &str, input: &str, templates: &[FieldTemplate]) -> Vec<Option<String>> {
        let regex = Regex::new(pattern).unwrap();
        let captures = regex.captures(input).unwrap();
        let mut cursor = GroupCursor::new(&captures);
        templates.iter().map(|t| cursor.bind(t)).collect()
    }

    #[test]
    fn test_cursor_alignment_runs_out_of_groups() {
        let values = bind_all(
            "(a)(b)",
            "ab",
            &[FieldTemplate::Capture, FieldTemplate::Capture, FieldTemplate::Capture],
        );
        assert_eq!(values, vec![Some("a".to_string()), Some("b".to_string()), None]);
    }

    #[test]
    fn test_literal_template_still_consumes_group() {
        let values = bind_all(
            r"(\w+)/(\d+)\.(\d+)",
            "Foo/1.2",
            &[
                FieldTemplate::from_replacement(Some("Bar")),
                FieldTemplate::Capture,
                FieldTemplate::Capture,
            ],
        );
        assert_eq!(
            values,
            vec![Some("Bar".to_string()), Some("1".to_string()), Some("2".to_string())]
        );
    }

    #[test]
    fn test_placeholder_substitution() {
        let values = bind_all(r"Foo/(\d+)", "Foo/42", &[FieldTemplate::from_replacement(Some("X$1Y"))]);
        assert_eq!(values, vec![Some("X42Y".to_string())]);
    }

    #[test]
    fn test_unresolved_placeholder_is_kept() {
        let values = bind_all(
            "(a)|(b)",
            "a",
            &[FieldTemplate::Capture, FieldTemplate::from_replacement(Some("Z$1"))],
        );
        assert_eq!(values, vec![Some("a".to_string()), Some("Z$1".to_string())]);
    }

    #[test]
    fn test_non_participating_group_without_template_is_empty() {
        let values = bind_all("(a)|(b)", "b", &[FieldTemplate::Capture, FieldTemplate::Capture]);
        assert_eq!(values, vec![None, Some("b".to_string())]);
    }

    #[test]
    fn test_position_advances_once_per_field() {
        let regex = Regex::new("(x)").unwrap();
        let captures = regex.captures("x").unwrap();
        let mut cursor = GroupCursor::new(&captures);
        assert_eq!(cursor.position(), 1);
        cursor.bind(&FieldTemplate::Literal("L".to_string()));
        cursor.bind(&FieldTemplate::Capture);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_from_replacement_classification() {
        assert_eq!(FieldTemplate::from_replacement(None), FieldTemplate::Capture);
        assert_eq!(
            FieldTemplate::from_replacement(Some("$1 Mobile")),
            FieldTemplate::Substitute("$1 Mobile".to_string())
        );
        assert_eq!(
            FieldTemplate::from_replacement(Some("Android")),
            FieldTemplate::Literal("Android".to_string())
        );
    }
}
