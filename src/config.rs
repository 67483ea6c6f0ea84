/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 源文档（Markdown）所在目录
    pub input_dir: String,
    /// 输出目录
    pub output_dir: String,
    /// 输出的题库数据文件名
    pub output_file: String,
    /// 题库清单（TOML），不设置时使用内置清单
    pub manifest_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: ".".to_string(),
            output_dir: "dist".to_string(),
            output_file: "books.json".to_string(),
            manifest_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，缺失或无法解析的值回落到默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Self {
            input_dir: lookup("QBANK_INPUT_DIR").unwrap_or(default.input_dir),
            output_dir: lookup("QBANK_OUTPUT_DIR").unwrap_or(default.output_dir),
            output_file: lookup("QBANK_OUTPUT_FILE").unwrap_or(default.output_file),
            manifest_file: lookup("QBANK_MANIFEST").filter(|v| !v.trim().is_empty()),
            verbose_logging: lookup("QBANK_VERBOSE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_overrides_and_fallbacks() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("QBANK_OUTPUT_DIR", "public"),
            ("QBANK_VERBOSE", "not-a-bool"),
            ("QBANK_MANIFEST", "  "),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.output_dir, "public");
        assert_eq!(config.input_dir, ".");
        assert_eq!(config.output_file, "books.json");
        // 无法解析的布尔值回落到默认值
        assert!(!config.verbose_logging);
        assert_eq!(config.manifest_file, None);
    }
}
