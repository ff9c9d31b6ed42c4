//! 全局错误类型定义
//! 只有构建解析器（加载 + 编译规则）会失败，解析 UA 本身永不失败

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum UaParserError {
    // 规则配置错误（构建期致命）
    #[error("{category} 规则缺少正则表达式（第{index}条）")]
    MissingRegex {
        category: &'static str,
        index: usize,
    },
    #[error("{category} 规则正则编译失败（第{index}条）：{source}")]
    RegexCompileError {
        category: &'static str,
        index: usize,
        #[source]
        source: RegexError,
    },

    // 规则文本错误（原样上抛）
    #[error("规则文本解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("规则文件读取失败：{0}")]
    IoError(#[from] IoError),
    #[error("内置规则不可用，请启用 embedded-rules 特性或指定规则文件")]
    EmbeddedRulesUnavailable,
}

// 全局Result类型
pub type UaResult<T> = Result<T, UaParserError>;
