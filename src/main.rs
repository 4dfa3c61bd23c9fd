use airtable_golf::utils::{logger, validation::Validate};
use airtable_golf::{
    load_env_file, AirtableClient, ClientConfig, CliConfig, Command, ScoreApi, ScoreError,
    ScoreRecordBatch, MAX_RECORDS_PER_REQUEST,
};
use anyhow::Context;
use clap::Parser;
use reqwest::Response;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    load_env_file(cli.env_file.as_deref());

    let config = ClientConfig::from_env();
    tracing::debug!("Client config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let client = AirtableClient::new(config);

    let response = match run(&client, &cli.command).await {
        Ok(Some(response)) => response,
        Ok(None) => {
            // 只有超過筆數上限的新增會走到這裡
            let e = ScoreError::ValidationError {
                message: format!(
                    "Cannot add more than {} records in a single request",
                    MAX_RECORDS_PER_REQUEST
                ),
            };
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let status = response.status();
    let body = response
        .text()
        .await
        .context("failed to read response body")?;

    println!("{}", status);
    println!("{}", body);

    if !status.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

async fn run(api: &dyn ScoreApi, command: &Command) -> airtable_golf::Result<Option<Response>> {
    let response = match command {
        Command::Add { file } => {
            let batch = ScoreRecordBatch::from_json_file(file)?;
            tracing::info!("Adding {} records", batch.len());
            return api.add_new_scores(&batch).await;
        }
        Command::List => api.get_golf_scores().await?,
        Command::Page { offset } => api.get_golf_scores_by_page(offset.as_deref()).await?,
        Command::Hole { hole } => api.get_scores_for_hole(*hole).await?,
        Command::Update { file } => {
            let batch = ScoreRecordBatch::from_json_file(file)?;
            tracing::info!("Updating {} records", batch.len());
            api.update_record_fields(&batch).await?
        }
        Command::Replace { file } => {
            let batch = ScoreRecordBatch::from_json_file(file)?;
            tracing::info!("Replacing {} records", batch.len());
            api.replace_record_fields(&batch).await?
        }
        Command::Delete { ids } => {
            tracing::info!("Deleting {} records", ids.len());
            api.delete_records(ids).await?
        }
    };

    Ok(Some(response))
}
