use crate::config::ClientConfig;
use crate::core::formula::Formula;
use crate::domain::model::{ScoreRecordBatch, MAX_RECORDS_PER_REQUEST};
use crate::domain::ports::ScoreApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};

pub const PAGE_SIZE: u32 = 100;

/// `get_scores_for_hole` 回傳的欄位
const HOLE_FIELDS: [&str; 2] = ["Hole", "Score"];

/// Airtable `golf-scores` 表的 HTTP 客戶端。
///
/// 不解析回應、不重試，非 2xx 狀態碼由呼叫端自行判斷。
#[derive(Debug, Clone)]
pub struct AirtableClient {
    config: ClientConfig,
    endpoint: String,
    client: Client,
}

impl AirtableClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: ClientConfig, client: Client) -> Self {
        let endpoint = config.endpoint();
        Self {
            config,
            endpoint,
            client,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method) -> RequestBuilder {
        tracing::debug!("📡 {} {}", method, self.endpoint);
        self.client
            .request(method, &self.endpoint)
            .bearer_auth(&self.config.token)
    }

    fn add_request(&self, batch: &ScoreRecordBatch) -> RequestBuilder {
        self.request(Method::POST).json(batch)
    }

    fn list_request(&self) -> RequestBuilder {
        self.request(Method::GET)
    }

    fn page_request(&self, offset: Option<&str>) -> RequestBuilder {
        let mut request = self
            .request(Method::GET)
            .query(&[("pageSize", PAGE_SIZE.to_string())]);

        // 空字串等同未提供
        if let Some(offset) = offset.filter(|o| !o.is_empty()) {
            request = request.query(&[("offset", offset)]);
        }

        request
    }

    fn hole_request(&self, hole: u32) -> RequestBuilder {
        let mut params: Vec<(&str, String)> = HOLE_FIELDS
            .iter()
            .map(|field| ("fields", field.to_string()))
            .collect();
        params.push((
            "filterByFormula",
            Formula::field_equals("Hole", hole).to_string(),
        ));

        self.request(Method::GET).query(&params)
    }

    fn update_request(&self, batch: &ScoreRecordBatch) -> RequestBuilder {
        self.request(Method::PATCH).json(batch)
    }

    fn replace_request(&self, batch: &ScoreRecordBatch) -> RequestBuilder {
        self.request(Method::PUT).json(batch)
    }

    fn delete_request(&self, record_ids: &[String]) -> RequestBuilder {
        let params: Vec<(&str, &str)> = record_ids
            .iter()
            .map(|id| ("records[]", id.as_str()))
            .collect();

        self.request(Method::DELETE).query(&params)
    }
}

#[async_trait]
impl ScoreApi for AirtableClient {
    async fn add_new_scores(&self, batch: &ScoreRecordBatch) -> Result<Option<Response>> {
        if batch.exceeds_request_limit() {
            tracing::warn!(
                "❌ Cannot add more than {} records in a single request (got {})",
                MAX_RECORDS_PER_REQUEST,
                batch.len()
            );
            return Ok(None);
        }

        let response = self.add_request(batch).send().await?;
        tracing::debug!("📡 Add response status: {}", response.status());
        Ok(Some(response))
    }

    async fn get_golf_scores(&self) -> Result<Response> {
        Ok(self.list_request().send().await?)
    }

    async fn get_golf_scores_by_page(&self, offset: Option<&str>) -> Result<Response> {
        Ok(self.page_request(offset).send().await?)
    }

    async fn get_scores_for_hole(&self, hole: u32) -> Result<Response> {
        Ok(self.hole_request(hole).send().await?)
    }

    async fn update_record_fields(&self, batch: &ScoreRecordBatch) -> Result<Response> {
        Ok(self.update_request(batch).send().await?)
    }

    async fn replace_record_fields(&self, batch: &ScoreRecordBatch) -> Result<Response> {
        Ok(self.replace_request(batch).send().await?)
    }

    async fn delete_records(&self, record_ids: &[String]) -> Result<Response> {
        Ok(self.delete_request(record_ids).send().await?)
    }
}
