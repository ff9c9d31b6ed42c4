//! 编译后规则模型

use regex::Regex;

use super::binder::{FieldTemplate, GroupCursor};

/// 编译后的单条规则：一个正则 + 各字段取值方式（按字段声明顺序）
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub regex: Regex,
    pub fields: Vec<FieldTemplate>,
}

impl CompiledRule {
    /// 对输入求值；未匹配返回 None，匹配时返回各字段值
    pub fn extract(&self, input: &str) -> Option<Vec<Option<String>>> {
        let captures = self.regex.captures(input)?;
        let mut cursor = GroupCursor::new(&captures);
        Some(self.fields.iter().map(|field| cursor.bind(field)).collect())
    }

    /// 规则描述（原始正则）
    pub fn describe(&self) -> &str {
        self.regex.as_str()
    }
}
