//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// 单条规则：字段名 -> 原始字符串值（`regex` 必填，`*_replacement` 可选）
pub type RuleEntry = HashMap<String, String>;

/// 完整规则集，每个分类内的规则顺序即匹配顺序
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleSet {
    #[serde(default)]
    pub user_agent_parsers: Vec<RuleEntry>,
    #[serde(default)]
    pub os_parsers: Vec<RuleEntry>,
    #[serde(default)]
    pub device_parsers: Vec<RuleEntry>,
    #[serde(default)]
    pub device_type_parsers: Vec<RuleEntry>,
}

impl RuleSet {
    /// 规则总数
    pub fn len(&self) -> usize {
        self.user_agent_parsers.len()
            + self.os_parsers.len()
            + self.device_parsers.len()
            + self.device_type_parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
