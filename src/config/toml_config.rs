use crate::app::lessons::recursion::{DEFAULT_FRAME_BUDGET, MAX_FRAME_BUDGET, MAX_N};
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 課程輸入設定，所有區段皆可省略，省略時使用課程原本寫死的值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub nullable: NullableConfig,
    pub question: QuestionConfig,
    pub log: LogConfig,
    pub extensions: ExtensionsConfig,
    pub recursion: RecursionConfig,
    pub printer: PrinterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NullableConfig {
    pub value: Option<String>,
}

impl Default for NullableConfig {
    fn default() -> Self {
        Self {
            value: Some("This is not null".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    pub text_answer: Option<String>,
    pub numeric_answer: Option<String>,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            text_answer: Some("42".to_string()),
            numeric_answer: Some("42".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub message: String,
    pub repeat: u32,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            message: "Parameters Named".to_string(),
            repeat: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionsConfig {
    pub text: String,
    pub left: String,
    pub right: String,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            text: "With   Multiple   Whitespace".to_string(),
            left: "H1".to_string(),
            right: "H2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecursionConfig {
    pub n: u32,
    pub frame_budget: usize,
}

impl Default for RecursionConfig {
    fn default() -> Self {
        Self {
            n: 10_000,
            frame_budget: DEFAULT_FRAME_BUDGET,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub model: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            model: "Canon 1234".to_string(),
        }
    }
}

impl TourConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TourError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ANSWER})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        let result = ENV_VAR.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.into_owned()
    }
}

impl Validate for TourConfig {
    fn validate(&self) -> Result<()> {
        validate_range("log.repeat", self.log.repeat, 0, 1000)?;
        validate_range("recursion.n", self.recursion.n, 0, MAX_N)?;
        validate_range(
            "recursion.frame_budget",
            self.recursion.frame_budget,
            1,
            MAX_FRAME_BUDGET,
        )?;
        validate_non_empty_string("printer.model", &self.printer.model)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_lesson_defaults() {
        let config = TourConfig::from_toml_str("").unwrap();

        assert_eq!(config.nullable.value.as_deref(), Some("This is not null"));
        assert_eq!(config.log.repeat, 5);
        assert_eq!(config.recursion.n, 10_000);
        assert_eq!(config.recursion.frame_budget, DEFAULT_FRAME_BUDGET);
        assert_eq!(config.printer.model, "Canon 1234");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let toml_content = r#"
[question]
numeric_answer = "forty-two"

[recursion]
n = 20
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.question.numeric_answer.as_deref(), Some("forty-two"));
        assert_eq!(config.question.text_answer.as_deref(), Some("42"));
        assert_eq!(config.recursion.n, 20);
        assert_eq!(config.recursion.frame_budget, DEFAULT_FRAME_BUDGET);
    }

    #[test]
    fn test_env_var_substitution() {
        // 只讀取既有的環境變數，避免與其他平行測試互相干擾
        let expected = std::env::var("PATH").unwrap_or_else(|_| "${PATH}".to_string());
        let substituted = TourConfig::substitute_env_vars("model = \"${PATH}\"");
        assert_eq!(substituted, format!("model = \"{}\"", expected));
    }

    #[test]
    fn test_unknown_env_var_is_kept_verbatim() {
        let toml_content = r#"
[printer]
model = "${FUNDAMENTALS_UNSET_VARIABLE_FOR_TESTS}"
"#;

        let config = TourConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.printer.model, "${FUNDAMENTALS_UNSET_VARIABLE_FOR_TESTS}");
    }

    #[test]
    fn test_config_validation() {
        let config = TourConfig::from_toml_str("[log]\nrepeat = 5000\n").unwrap();
        assert!(config.validate().is_err());

        let config = TourConfig::from_toml_str("[recursion]\nframe_budget = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_recursion_limits_are_bounded() {
        let config =
            TourConfig::from_toml_str("[recursion]\nn = 200000\nframe_budget = 1000\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(TourError::InvalidConfigValueError { ref field, .. }) if field == "recursion.n"
        ));

        let config =
            TourConfig::from_toml_str("[recursion]\nn = 100\nframe_budget = 1000000\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(TourError::InvalidConfigValueError { ref field, .. }) if field == "recursion.frame_budget"
        ));

        let config = TourConfig::from_toml_str(&format!(
            "[recursion]\nn = {}\nframe_budget = {}\n",
            MAX_N, MAX_FRAME_BUDGET
        ))
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = TourConfig::from_toml_str("[log\nrepeat = ").unwrap_err();
        assert!(matches!(err, TourError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[extensions]\nleft = \"X-\"\nright = \"Y\"\n")
            .unwrap();

        let config = TourConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.extensions.left, "X-");
        assert_eq!(config.extensions.text, "With   Multiple   Whitespace");
    }
}
