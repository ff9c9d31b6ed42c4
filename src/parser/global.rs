//! 全局解析器单例管理
use once_cell::sync::OnceCell;
use tracing::debug;

use super::parser::UaParser;
use crate::config::{ConfigManager, ParserConfig};
use crate::error::UaResult;
use crate::model::ClientInfo;

/// 全局解析器实例
static GLOBAL_PARSER: OnceCell<UaParser> = OnceCell::new();

/// 获取全局解析器，首次调用时按默认配置（内置规则）构建
pub fn default_parser() -> UaResult<&'static UaParser> {
    GLOBAL_PARSER.get_or_try_init(|| UaParser::with_config(&ConfigManager::get_default()))
}

/// 带自定义配置初始化全局解析器；已初始化时直接返回现有实例
pub fn init_ua_parser_with_config(config: &ParserConfig) -> UaResult<&'static UaParser> {
    if let Some(parser) = GLOBAL_PARSER.get() {
        debug!("Global UA parser already initialized, config ignored");
        return Ok(parser);
    }
    GLOBAL_PARSER.get_or_try_init(|| UaParser::with_config(config))
}

/// 使用全局解析器解析
pub fn parse(ua: &str) -> UaResult<ClientInfo> {
    Ok(default_parser()?.parse(ua))
}

#[cfg(all(test, feature = "embedded-rules"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_parser_is_built_once() {
        let first = default_parser().unwrap();
        let second = default_parser().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_second_init_returns_existing_instance() {
        let first = init_ua_parser_with_config(&ConfigManager::get_default()).unwrap();
        // 已初始化后新配置被忽略，即使规则文件不存在也不会重新加载
        let config = ConfigManager::custom()
            .rules_path("/nonexistent/uaparser/regexes.json")
            .build();
        let second = init_ua_parser_with_config(&config).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(second, default_parser().unwrap()));
    }

    #[test]
    fn test_global_parse_uses_embedded_rules() {
        let info = parse("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36").unwrap();
        assert_eq!(info.user_agent.family, "Chrome");
        assert_eq!(info.os.family, "Windows");
        assert_eq!(info.os.major.as_deref(), Some("10"));
        assert_eq!(info.device.family, "Other");
        assert_eq!(info.device_type.name, "Desktop");
    }

    #[test]
    fn test_embedded_rules_iphone_safari() {
        let parser = default_parser().unwrap();
        let info = parser.parse("Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Mobile/15E148 Safari/604.1");
        assert_eq!(info.user_agent.to_string(), "Mobile Safari 14.1.1");
        assert_eq!(info.os.to_string(), "iOS 14.6");
        assert_eq!(info.device.family, "iPhone");
        assert_eq!(info.device_type.name, "Mobile");
    }

    #[test]
    fn test_embedded_rules_googlebot_is_spider() {
        let parser = default_parser().unwrap();
        let info = parser.parse("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)");
        assert_eq!(info.user_agent.family, "Googlebot");
        assert!(info.device.is_spider);
        assert_eq!(info.device_type.name, "Spider");
        assert_eq!(info.os.family, "Other");
    }

    #[test]
    fn test_embedded_rules_android_template_substitution() {
        let parser = default_parser().unwrap();
        let info = parser.parse("Mozilla/5.0 (Linux; Android 11; SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.120 Mobile Safari/537.36");
        assert_eq!(info.user_agent.family, "Chrome Mobile");
        assert_eq!(info.device.family, "Samsung SM-G991B");
        assert_eq!(info.os.to_string(), "Android 11");
    }

    #[test]
    fn test_embedded_rules_backslash_underscore_pattern() {
        let parser = default_parser().unwrap();
        let ua = parser.parse_user_agent("Mozilla/5.0 (Windows NT 6.1; WOW64; rv:68.0) Gecko/20100101 Goanna/4.8 Firefox/68.0 Pale_Moon/29.4.0");
        assert_eq!(ua.family, "Pale Moon");
        assert_eq!(ua.version(), "29.4.0");
    }

    #[test]
    fn test_embedded_rules_unknown_input() {
        let info = parse("").unwrap();
        assert_eq!(info.to_string(), "Other Other Other");
        assert_eq!(info.device_type.name, "Other");
    }
}
