//! 解析器配置管理

use std::path::PathBuf;

/// 正则编译默认大小上限（与 regex crate 默认值一致）
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// 解析器配置
#[derive(Debug, Clone)]
pub struct ParserConfig {
    // 规则文件路径，None 表示使用内置规则
    pub rules_path: Option<PathBuf>,
    // 单条正则编译后的大小上限（字节）
    pub regex_size_limit: usize,
    // 是否以 info 级别输出编译统计
    pub verbose: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ParserConfig {
        ParserConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ParserConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rules_path = Some(path.into());
        self
    }

    pub fn regex_size_limit(mut self, limit: usize) -> Self {
        self.config.regex_size_limit = limit;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> ParserConfig {
        self.config
    }
}
