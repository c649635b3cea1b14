use crate::adapters::report::ReportFormat;
use crate::core::{Scenario, Step, StoreSpec};
use crate::utils::error::{Result, VarastoError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioInfo,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub stores: Vec<StoreSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<ReportFormat>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn output_format(&self) -> Option<ReportFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    /// 決定報表輸出位置與格式：命令列參數優先於設定檔，格式預設為 CSV。
    /// 沒有任何輸出目錄時回傳 None，不寫報表。
    pub fn report_target(
        &self,
        output: Option<&str>,
        format: Option<ReportFormat>,
    ) -> Option<(String, ReportFormat)> {
        let dir = output.or_else(|| self.output_path())?;
        let format = format
            .or_else(|| self.output_format())
            .unwrap_or(ReportFormat::Csv);
        Some((dir.to_string(), format))
    }

    pub fn to_scenario(&self) -> Scenario {
        Scenario {
            name: self.scenario.name.clone(),
            description: self.scenario.description.clone(),
            stores: self.stores.clone(),
            steps: self.steps.clone(),
        }
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scenario.name", &self.scenario.name)?;
        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }
        self.to_scenario().validate()
    }
}

/// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
pub(crate) fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VarastoError::ConfigValidationError {
        field: "env_substitution".to_string(),
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}
