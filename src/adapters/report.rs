use crate::core::{ScenarioReport, Storage};
use crate::utils::error::{Result, VarastoError};
use serde::{Deserialize, Serialize};

pub const CSV_FILENAME: &str = "outcomes.csv";
pub const JSON_FILENAME: &str = "report.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Json,
    Both,
}

impl ReportFormat {
    pub fn includes_csv(self) -> bool {
        matches!(self, ReportFormat::Csv | ReportFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

/// 每個步驟一列
pub fn render_csv(report: &ScenarioReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for outcome in &report.outcomes {
        writer.serialize(outcome)?;
    }
    writer.into_inner().map_err(|e| VarastoError::ReportError {
        message: format!("Failed to flush CSV output: {}", e.error()),
    })
}

pub fn render_json(report: &ScenarioReport) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(report)?)
}

pub struct ReportWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 寫出報表，回傳寫入的檔案路徑
    pub fn save(&self, report: &ScenarioReport, format: ReportFormat) -> Result<Vec<String>> {
        let mut written = Vec::new();

        if format.includes_csv() {
            let data = render_csv(report)?;
            let path = self.storage.write_file(CSV_FILENAME, &data)?;
            tracing::debug!("Wrote {} bytes of CSV to {}", data.len(), path);
            written.push(path);
        }

        if format.includes_json() {
            let data = render_json(report)?;
            let path = self.storage.write_file(JSON_FILENAME, &data)?;
            tracing::debug!("Wrote {} bytes of JSON to {}", data.len(), path);
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StepOutcome, StoreSnapshot};
    use chrono::Utc;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for &MockStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(path.to_string())
        }
    }

    fn report() -> ScenarioReport {
        ScenarioReport {
            scenario: "sample".to_string(),
            generated_at: Utc::now(),
            outcomes: vec![
                StepOutcome {
                    index: 1,
                    store: "tank".to_string(),
                    action: "deposit".to_string(),
                    requested: Some(6.0),
                    returned: None,
                    balance: 6.0,
                    capacity: 10.0,
                    available: 4.0,
                    description: "balance = 6, space remaining 4".to_string(),
                },
                StepOutcome {
                    index: 2,
                    store: "tank".to_string(),
                    action: "withdraw".to_string(),
                    requested: Some(10.0),
                    returned: Some(6.0),
                    balance: 0.0,
                    capacity: 10.0,
                    available: 10.0,
                    description: "balance = 0, space remaining 10".to_string(),
                },
            ],
            final_states: vec![StoreSnapshot {
                name: "tank".to_string(),
                capacity: 10.0,
                balance: 0.0,
                available: 10.0,
            }],
        }
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_step() {
        let csv = String::from_utf8(render_csv(&report()).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "index,store,action,requested,returned,balance,capacity,available,description"
        );
        // deposit 沒有回傳值，欄位留空
        assert!(lines[1].starts_with("1,tank,deposit,6.0,,6.0,10.0,4.0,"));
        assert!(lines[2].starts_with("2,tank,withdraw,10.0,6.0,0.0,"));
    }

    #[test]
    fn test_json_contains_final_states() {
        let json: serde_json::Value =
            serde_json::from_slice(&render_json(&report()).unwrap()).unwrap();
        assert_eq!(json["scenario"], "sample");
        assert_eq!(json["final_states"][0]["name"], "tank");
        assert_eq!(json["outcomes"][1]["returned"], 6.0);
    }

    #[test]
    fn test_save_respects_format() {
        let storage = MockStorage::default();
        let writer = ReportWriter::new(&storage);

        let written = writer.save(&report(), ReportFormat::Json).unwrap();
        assert_eq!(written, vec![JSON_FILENAME.to_string()]);
        assert!(!storage.files.borrow().contains_key(CSV_FILENAME));

        let written = writer.save(&report(), ReportFormat::Both).unwrap();
        assert_eq!(written.len(), 2);
        assert!(storage.files.borrow().contains_key(CSV_FILENAME));
    }
}
