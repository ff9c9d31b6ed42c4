//! 编译模块：将原始规则编译为可执行的提取器
pub mod binder;
pub mod pattern;
pub mod compiler;

pub use self::binder::{FieldTemplate, GroupCursor};
pub use self::pattern::CompiledRule;
pub use self::compiler::{Category, FieldSpec, RuleCompiler};
