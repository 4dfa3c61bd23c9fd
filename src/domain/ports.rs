use crate::domain::model::ScoreRecordBatch;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Response;

/// 高爾夫成績表的操作介面。每個方法最多發出一次 HTTP 請求，回應原樣回傳。
#[async_trait]
pub trait ScoreApi: Send + Sync {
    /// 超過上限時回傳 `Ok(None)`，不發出請求。
    async fn add_new_scores(&self, batch: &ScoreRecordBatch) -> Result<Option<Response>>;
    async fn get_golf_scores(&self) -> Result<Response>;
    async fn get_golf_scores_by_page(&self, offset: Option<&str>) -> Result<Response>;
    async fn get_scores_for_hole(&self, hole: u32) -> Result<Response>;
    async fn update_record_fields(&self, batch: &ScoreRecordBatch) -> Result<Response>;
    async fn replace_record_fields(&self, batch: &ScoreRecordBatch) -> Result<Response>;
    async fn delete_records(&self, record_ids: &[String]) -> Result<Response>;
}
