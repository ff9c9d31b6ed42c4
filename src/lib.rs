//! uaparser - 基于规则集的 User-Agent 解析库
//! 将 UA 字符串解析为操作系统、设备、浏览器与设备类型

// 导出全局错误类型
pub use self::error::{UaParserError, UaResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, ParserConfig};

// 导出解析结果模型
pub use self::model::{ClientInfo, Device, DeviceType, Os, UserAgent};

// 导出规则模块核心接口
pub use self::rule::{RuleEntry, RuleLoader, RuleSet};

// 导出编译模块核心接口
pub use self::compiler::{Category, CompiledRule, FieldTemplate, GroupCursor, RuleCompiler};

// 导出工具模块核心接口
pub use self::utils::VersionString;

// 导出解析模块核心接口
pub use self::parser::{CategoryChain, UaParser, default_parser, init_ua_parser_with_config};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod model;
pub mod rule;
pub mod compiler;
pub mod utils;
pub mod parser;
