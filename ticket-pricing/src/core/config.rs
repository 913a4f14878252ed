/// 定价工具配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写入文件 |
/// | CURRENCY_LABEL | RM | 付款摘要中的货币前缀 |
///
/// # 示例
///
/// ```ignore
/// LOG_LEVEL=debug CURRENCY_LABEL=MYR ticket-pricing scenarios
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// tracing 最大日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 货币前缀 (仅用于展示)
    pub currency_label: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            currency_label: std::env::var("CURRENCY_LABEL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "RM".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(currency_label: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.currency_label = currency_label.into();
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("MYR");
        assert_eq!(config.currency_label, "MYR");
    }

    #[test]
    fn test_environment_checks() {
        let mut config = Config::with_overrides("RM");
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
