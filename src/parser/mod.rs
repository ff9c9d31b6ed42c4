//! 解析模块：规则链与解析器门面
pub mod chain;
pub mod global;
pub mod parser;

// 导出核心接口
pub use self::chain::CategoryChain;
pub use self::global::{default_parser, init_ua_parser_with_config, parse};
pub use self::parser::UaParser;
