//! 规则编译器核心
//! 仅负责将原始规则编译为可执行的提取器

use std::time::Instant;
use regex::RegexBuilder;
use tracing::{debug, info};

use super::binder::FieldTemplate;
use super::pattern::CompiledRule;
use crate::config::ParserConfig;
use crate::error::{UaParserError, UaResult};
use crate::rule::{RuleEntry, RuleSet};

/// 单个输出字段对应的 replacement 键（None 表示该字段没有模板）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub replacement_key: Option<&'static str>,
}

const fn field(replacement_key: Option<&'static str>) -> FieldSpec {
    FieldSpec { replacement_key }
}

// 字段顺序决定分组对齐，不可调整
// family, major, minor, patch
const USER_AGENT_FIELDS: &[FieldSpec] = &[
    field(Some("family_replacement")),
    field(Some("v1_replacement")),
    field(Some("v2_replacement")),
    field(None),
];

// family, major, minor, patch, patch_minor
const OS_FIELDS: &[FieldSpec] = &[
    field(Some("os_replacement")),
    field(Some("os_v1_replacement")),
    field(Some("os_v2_replacement")),
    field(None),
    field(None),
];

// family
const DEVICE_FIELDS: &[FieldSpec] = &[field(Some("device_replacement"))];

// name
const DEVICE_TYPE_FIELDS: &[FieldSpec] = &[field(Some("device_type_replacement"))];

/// 规则分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    UserAgent,
    Os,
    Device,
    DeviceType,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::UserAgent,
        Category::Os,
        Category::Device,
        Category::DeviceType,
    ];

    /// 规则集中的分类键名
    pub fn key(self) -> &'static str {
        match self {
            Category::UserAgent => "user_agent_parsers",
            Category::Os => "os_parsers",
            Category::Device => "device_parsers",
            Category::DeviceType => "device_type_parsers",
        }
    }

    /// 错误信息中使用的分类名
    pub fn label(self) -> &'static str {
        match self {
            Category::UserAgent => "User agent",
            Category::Os => "OS",
            Category::Device => "Device",
            Category::DeviceType => "DeviceType",
        }
    }

    /// 该分类的输出字段（固定顺序）
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Category::UserAgent => USER_AGENT_FIELDS,
            Category::Os => OS_FIELDS,
            Category::Device => DEVICE_FIELDS,
            Category::DeviceType => DEVICE_TYPE_FIELDS,
        }
    }

    /// 取出规则集中属于该分类的规则
    pub fn entries(self, rule_set: &RuleSet) -> &[RuleEntry] {
        match self {
            Category::UserAgent => &rule_set.user_agent_parsers,
            Category::Os => &rule_set.os_parsers,
            Category::Device => &rule_set.device_parsers,
            Category::DeviceType => &rule_set.device_type_parsers,
        }
    }
}

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译一个分类下的全部规则，任意一条失败即整体失败
    pub fn compile_category(
        entries: &[RuleEntry],
        category: Category,
        config: &ParserConfig,
    ) -> UaResult<Vec<CompiledRule>> {
        let start = Instant::now();
        let rules = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::compile_rule(entry, category, index, config))
            .collect::<UaResult<Vec<_>>>()?;

        if config.verbose {
            info!("Compiled {} {} rules in {:?}", rules.len(), category.key(), start.elapsed());
        } else {
            debug!("Compiled {} {} rules in {:?}", rules.len(), category.key(), start.elapsed());
        }
        Ok(rules)
    }

    /// 编译单条规则
    pub fn compile_rule(
        entry: &RuleEntry,
        category: Category,
        index: usize,
        config: &ParserConfig,
    ) -> UaResult<CompiledRule> {
        let raw_pattern = entry.get("regex").ok_or(UaParserError::MissingRegex {
            category: category.label(),
            index,
        })?;

        let pattern = Self::fix_pattern(raw_pattern);
        let case_insensitive = entry.get("regex_flag").is_some_and(|flag| flag == "i");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(case_insensitive)
            .size_limit(config.regex_size_limit)
            .build()
            .map_err(|source| UaParserError::RegexCompileError {
                category: category.label(),
                index,
                source,
            })?;

        let fields = category
            .fields()
            .iter()
            .map(|spec| {
                let replacement = spec
                    .replacement_key
                    .and_then(|key| entry.get(key))
                    .map(String::as_str);
                FieldTemplate::from_replacement(replacement)
            })
            .collect();

        Ok(CompiledRule { regex, fields })
    }

    /// 兼容修复：`\_` 在部分正则引擎中是非法转义，改写为 `_`
    fn fix_pattern(raw_pattern: &str) -> String {
        if raw_pattern.contains(r"\_") {
            raw_pattern.replace(r"\_", "_")
        } else {
            raw_pattern.to_string()
        }
    }
}
