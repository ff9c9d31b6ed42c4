//! 分类规则链：按声明顺序逐条尝试，首个命中即返回，全部未命中返回默认值

use crate::compiler::CompiledRule;

/// 字段值 -> 记录 的投影函数，返回 None 表示该规则虽命中正则但无结果
pub type Projection<T> = fn(Vec<Option<String>>) -> Option<T>;

/// 分类规则链
#[derive(Debug, Clone)]
pub struct CategoryChain<T> {
    rules: Vec<CompiledRule>,
    default: T,
    project: Projection<T>,
}

impl<T: Clone> CategoryChain<T> {
    /// 默认值由调用方显式注入
    pub fn new(rules: Vec<CompiledRule>, default: T, project: Projection<T>) -> Self {
        Self { rules, default, project }
    }

    /// 求值：第一条产出结果的规则即为答案，后续规则不再执行
    pub fn evaluate(&self, input: &str) -> T {
        self.rules
            .iter()
            .find_map(|rule| rule.extract(input).and_then(self.project))
            .unwrap_or_else(|| self.default.clone())
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
