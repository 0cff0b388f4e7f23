use std::time::Duration;
use wca_client::prelude::*;

/// Exports a contact list and polls the job until it finishes
///
/// Credentials and endpoints come from `WCA_*` environment variables or `.env`.
/// Usage: `cargo run --example export_list -- <LIST_ID> [COLUMN ...]`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let list_id = args.next().ok_or("missing LIST_ID argument")?;
    let columns = ExportColumns::new(args);

    let client = Client::new(Config::new()).await?;
    info!("{} ready", client);

    let response = client
        .export_list(&list_id, columns, ExportFormat::Csv.as_str(), ExportType::All.as_str())
        .await?;
    if !response.is_success() {
        error!("Export rejected: {:?}", response.fault_string());
        return Ok(());
    }

    let Some(job_id) = response.job_id().map(str::to_string) else {
        error!("Export response has no JOB_ID: {}", response);
        return Ok(());
    };
    info!("Export scheduled as job {}", job_id);

    loop {
        let status = client.get_job_status(&job_id).await?;
        match status.job_status() {
            Some(job_status) if job_status.is_finished() => {
                info!("Job {} finished: {}", job_id, job_status);
                info!("File: {:?}", response.file_path());
                break;
            }
            Some(job_status) => info!("Job {} is {}", job_id, job_status),
            None => warn!("No JOB_STATUS in response: {}", status),
        }
        tokio::time::sleep(Duration::from_secs(10)).await;
    }

    Ok(())
}
