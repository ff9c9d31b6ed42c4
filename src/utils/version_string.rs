//! 版本号拼接工具模块
//! 将 major/minor/patch/patch_minor 等版本分量拼接为点分版本号

/// 版本号拼接工具类
pub struct VersionString;

impl VersionString {
    /// 用 `.` 拼接所有非空版本分量
    ///
    /// # 参数
    /// - `parts`: 按顺序排列的版本分量，`None` 与空串均视为缺失
    ///
    /// # 返回值
    /// 拼接结果；缺失分量整体跳过（`10`、空、`2` 得到 `10.2` 而非 `10..2`），
    /// 全部缺失时返回空串
    pub fn format(parts: &[Option<&str>]) -> String {
        parts
            .iter()
            .filter_map(|part| part.filter(|v| !v.is_empty()))
            .collect::<Vec<_>>()
            .join(".")
    }
}
