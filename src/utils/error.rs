use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ScoreError {
    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoreError::ApiError(e) if e.is_connect() => {
                "Could not connect to the Airtable API".to_string()
            }
            ScoreError::ApiError(e) if e.is_timeout() => {
                "The request to the Airtable API timed out".to_string()
            }
            ScoreError::ApiError(_) => "The request to the Airtable API failed".to_string(),
            ScoreError::IoError(e) => format!("Could not read input file: {}", e),
            ScoreError::SerializationError(e) => format!("Input is not a valid record batch: {}", e),
            ScoreError::MissingConfigError { field } => format!("{} is not set", field),
            ScoreError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            ScoreError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScoreError::ApiError(_) => "Check your network connection and AIRTABLE_API_URL",
            ScoreError::IoError(_) => "Check that the file exists and is readable",
            ScoreError::SerializationError(_) => {
                "The file must contain a JSON object of the form {\"records\": [...]}"
            }
            ScoreError::MissingConfigError { .. }
            | ScoreError::InvalidConfigValueError { .. } => {
                "Set AIRTABLE_TOKEN and AIRTABLE_BASE_ID in the environment or in a .env file"
            }
            ScoreError::ValidationError { .. } => "Split the batch into requests of at most 10 records",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
