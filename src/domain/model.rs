use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Airtable 單次寫入請求的筆數上限
pub const MAX_RECORDS_PER_REQUEST: usize = 10;

/// 單筆記錄，例如 `{"fields": {"Hole": 1, "Score": 4}}` 或帶 `id` 的更新記錄。
/// 內容原樣送出，不做任何欄位檢查。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// 新增用：`{"fields": {...}}`
    pub fn with_fields(fields: serde_json::Value) -> Self {
        let mut data = serde_json::Map::new();
        data.insert("fields".to_string(), fields);
        Self { data }
    }

    /// 更新或取代用：`{"id": "...", "fields": {...}}`
    pub fn with_id(id: impl Into<String>, fields: serde_json::Value) -> Self {
        let mut record = Self::with_fields(fields);
        record
            .data
            .insert("id".to_string(), serde_json::Value::String(id.into()));
        record
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecordBatch {
    pub records: Vec<Record>,
}

impl ScoreRecordBatch {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn exceeds_request_limit(&self) -> bool {
        self.records.len() > MAX_RECORDS_PER_REQUEST
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
