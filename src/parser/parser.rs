//! 解析器门面：持有四条分类规则链，构建一次后只读共享
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::chain::CategoryChain;
use crate::compiler::{Category, RuleCompiler};
use crate::config::ParserConfig;
use crate::error::UaResult;
use crate::model::{ClientInfo, Device, DeviceType, Os, UserAgent};
use crate::rule::{RuleLoader, RuleSet};

/// UA 解析器
///
/// 所有正则在构建时一次性编译；之后 `parse` 系列方法是纯函数，
/// 可在任意线程并发调用。
#[derive(Debug, Clone)]
pub struct UaParser {
    user_agent: CategoryChain<UserAgent>,
    os: CategoryChain<Os>,
    device: CategoryChain<Device>,
    device_type: CategoryChain<DeviceType>,
}

impl UaParser {
    /// 从 JSON 规则文本创建
    pub fn from_json(text: &str) -> UaResult<Self> {
        Self::from_rule_set(&RuleLoader::from_text(text)?)
    }

    /// 从 JSON 规则文件创建
    pub fn from_json_file(path: impl AsRef<Path>) -> UaResult<Self> {
        Self::from_rule_set(&RuleLoader::from_file(path)?)
    }

    /// 异步读取规则文件后创建
    #[cfg(feature = "async-io")]
    pub async fn from_json_file_async(path: impl AsRef<Path>) -> UaResult<Self> {
        let rule_set = RuleLoader::from_file_async(path).await?;
        Self::from_rule_set(&rule_set)
    }

    /// 使用内置规则创建
    pub fn from_default() -> UaResult<Self> {
        Self::from_rule_set(&RuleLoader::embedded()?)
    }

    /// 按配置创建：指定了规则文件则加载文件，否则使用内置规则
    pub fn with_config(config: &ParserConfig) -> UaResult<Self> {
        let rule_set = match &config.rules_path {
            Some(path) => RuleLoader::from_file(path)?,
            None => RuleLoader::embedded()?,
        };
        Self::compile(&rule_set, config)
    }

    /// 从已加载的规则集创建（默认配置）
    pub fn from_rule_set(rule_set: &RuleSet) -> UaResult<Self> {
        Self::compile(rule_set, &ParserConfig::default())
    }

    /// 编译全部分类；任一规则出错则整体失败，不返回半成品
    pub fn compile(rule_set: &RuleSet, config: &ParserConfig) -> UaResult<Self> {
        let start = Instant::now();
        let compile = |category: Category| {
            RuleCompiler::compile_category(category.entries(rule_set), category, config)
        };

        let parser = Self {
            user_agent: CategoryChain::new(
                compile(Category::UserAgent)?,
                UserAgent::other(),
                |fields| Some(UserAgent::from_fields(fields)),
            ),
            // OS / UserAgent 命中正则即有结果；Device / DeviceType 需解析出家族名
            os: CategoryChain::new(compile(Category::Os)?, Os::other(), |fields| {
                Some(Os::from_fields(fields))
            }),
            device: CategoryChain::new(compile(Category::Device)?, Device::other(), Device::from_fields),
            device_type: CategoryChain::new(
                compile(Category::DeviceType)?,
                DeviceType::other(),
                DeviceType::from_fields,
            ),
        };

        if config.verbose {
            info!("✅ UA parser ready: {} rules compiled in {:?}", rule_set.len(), start.elapsed());
        } else {
            debug!("✅ UA parser ready: {} rules compiled in {:?}", rule_set.len(), start.elapsed());
        }
        Ok(parser)
    }

    /// 完整解析，永不失败
    pub fn parse(&self, ua: &str) -> ClientInfo {
        ClientInfo {
            os: self.parse_os(ua),
            device: self.parse_device(ua),
            user_agent: self.parse_user_agent(ua),
            device_type: self.parse_device_type(ua),
        }
    }

    pub fn parse_os(&self, ua: &str) -> Os {
        self.os.evaluate(ua)
    }

    pub fn parse_device(&self, ua: &str) -> Device {
        self.device.evaluate(ua)
    }

    pub fn parse_user_agent(&self, ua: &str) -> UserAgent {
        self.user_agent.evaluate(ua)
    }

    pub fn parse_device_type(&self, ua: &str) -> DeviceType {
        self.device_type.evaluate(ua)
    }

    /// 各分类已编译规则数
    pub fn rule_counts(&self) -> [(Category, usize); 4] {
        [
            (Category::UserAgent, self.user_agent.len()),
            (Category::Os, self.os.len()),
            (Category::Device, self.device.len()),
            (Category::DeviceType, self.device_type.len()),
        ]
    }
}
