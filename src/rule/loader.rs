//! 规则加载管理器
//! 负责从字符串、本地文件或内置数据读取规则集

use std::path::Path;
use tracing::debug;

use super::model::RuleSet;
use crate::error::UaResult;
#[cfg(not(feature = "embedded-rules"))]
use crate::error::UaParserError;

/// 内置规则（编译期 embed）
#[cfg(feature = "embedded-rules")]
pub const EMBEDDED_RULES: &str = include_str!("../../data/regexes.json");

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 从 JSON 文本解析规则集，格式错误原样上抛
    pub fn from_text(text: &str) -> UaResult<RuleSet> {
        let rule_set: RuleSet = serde_json::from_str(text)?;
        debug!(
            "Rule text parsed: user_agent={}, os={}, device={}, device_type={}",
            rule_set.user_agent_parsers.len(),
            rule_set.os_parsers.len(),
            rule_set.device_parsers.len(),
            rule_set.device_type_parsers.len()
        );
        Ok(rule_set)
    }

    /// 从本地文件加载规则集
    pub fn from_file(path: impl AsRef<Path>) -> UaResult<RuleSet> {
        let path = path.as_ref();
        debug!("Loading rules from file: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// 异步读取本地规则文件（解析仍为同步）
    #[cfg(feature = "async-io")]
    pub async fn from_file_async(path: impl AsRef<Path>) -> UaResult<RuleSet> {
        let path = path.as_ref();
        debug!("Loading rules from file (async): {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_text(&text)
    }

    /// 加载内置规则
    #[cfg(feature = "embedded-rules")]
    pub fn embedded() -> UaResult<RuleSet> {
        debug!("Loading embedded rules");
        Self::from_text(EMBEDDED_RULES)
    }

    #[cfg(not(feature = "embedded-rules"))]
    pub fn embedded() -> UaResult<RuleSet> {
        Err(UaParserError::EmbeddedRulesUnavailable)
    }
}
