//! 工具模块：版本号拼接、模板替换等无状态辅助函数
pub mod version_string;
pub mod template;

pub use self::version_string::VersionString;
pub use self::template::replace_first;
