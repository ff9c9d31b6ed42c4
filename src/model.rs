//! 解析结果数据模型定义
//! 仅存储解析结果，构造后不可变，支持序列化

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::utils::VersionString;

/// 未匹配任何规则时使用的家族名
pub const OTHER: &str = "Other";

/// 操作系统信息
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Os {
    pub family: String,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
    pub patch_minor: Option<String>,
}

impl Os {
    /// 从编译器产出的字段值构造（顺序：family, major, minor, patch, patch_minor）
    pub(crate) fn from_fields(fields: Vec<Option<String>>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            family: fields.next().flatten().unwrap_or_default(),
            major: fields.next().flatten(),
            minor: fields.next().flatten(),
            patch: fields.next().flatten(),
            patch_minor: fields.next().flatten(),
        }
    }

    /// 默认值：family 为 Other，版本全空
    pub fn other() -> Self {
        Self {
            family: OTHER.to_string(),
            major: None,
            minor: None,
            patch: None,
            patch_minor: None,
        }
    }

    /// 点分版本号，空分量跳过
    pub fn version(&self) -> String {
        VersionString::format(&[
            self.major.as_deref(),
            self.minor.as_deref(),
            self.patch.as_deref(),
            self.patch_minor.as_deref(),
        ])
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_family_version(f, &self.family, &self.version())
    }
}

/// 设备信息
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    pub family: String,
    pub is_spider: bool,
}

impl Device {
    /// 按家族名构造，家族名（忽略大小写）等于 Spider 时标记为爬虫
    pub fn new(family: impl Into<String>) -> Self {
        let family = family.into();
        let is_spider = family.eq_ignore_ascii_case("Spider");
        Self { family, is_spider }
    }

    /// 家族名未解析出时视为该规则无结果
    pub(crate) fn from_fields(fields: Vec<Option<String>>) -> Option<Self> {
        fields.into_iter().next().flatten().map(Self::new)
    }

    pub fn other() -> Self {
        Self {
            family: OTHER.to_string(),
            is_spider: false,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.family)
    }
}

/// 浏览器 / 客户端信息
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAgent {
    pub family: String,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
}

impl UserAgent {
    /// 字段顺序：family, major, minor, patch
    pub(crate) fn from_fields(fields: Vec<Option<String>>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            family: fields.next().flatten().unwrap_or_default(),
            major: fields.next().flatten(),
            minor: fields.next().flatten(),
            patch: fields.next().flatten(),
        }
    }

    pub fn other() -> Self {
        Self {
            family: OTHER.to_string(),
            major: None,
            minor: None,
            patch: None,
        }
    }

    pub fn version(&self) -> String {
        VersionString::format(&[
            self.major.as_deref(),
            self.minor.as_deref(),
            self.patch.as_deref(),
        ])
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_family_version(f, &self.family, &self.version())
    }
}

/// 设备类型（desktop / mobile / tablet ...）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceType {
    pub name: String,
}

impl DeviceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn from_fields(fields: Vec<Option<String>>) -> Option<Self> {
        fields.into_iter().next().flatten().map(Self::new)
    }

    pub fn other() -> Self {
        Self::new(OTHER)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 单个 UA 字符串的完整解析结果
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientInfo {
    pub os: Os,
    pub device: Device,
    pub user_agent: UserAgent,
    pub device_type: DeviceType,
}

impl fmt::Display for ClientInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.os, self.device, self.user_agent)
    }
}

fn write_family_version(f: &mut fmt::Formatter<'_>, family: &str, version: &str) -> fmt::Result {
    if version.is_empty() {
        f.write_str(family)
    } else {
        write!(f, "{} {}", family, version)
    }
}
