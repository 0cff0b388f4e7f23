use crate::constants::{DEFAULT_EXPORT_FORMAT, DEFAULT_EXPORT_TYPE};
use crate::error::AppError;
use crate::model::requests::ExportColumns;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Operations offered by the XML API
#[async_trait]
pub trait XmlApi: Send + Sync {
    /// Calculates the number of contacts matching a query
    ///
    /// The response carries the id of the job doing the calculation.
    async fn calculate_query(&self, query_id: &str) -> Result<ApiResponse, AppError>;

    /// Gets the status of a job: WAITING, RUNNING, CANCELLED, ERROR or COMPLETE
    async fn get_job_status(&self, job_id: &str) -> Result<ApiResponse, AppError>;

    /// Exports a contact list, query or database
    ///
    /// # Arguments
    /// * `target_id` - Database, query or contact list id
    /// * `columns` - Columns to export; `EMAIL` and `RECIPIENT_ID` are added when missing
    /// * `export_format` - `CSV`, `TAB` or `PIPE`, sent as given
    /// * `export_type` - `ALL`, `OPT_IN`, `OPT_OUT` or `UNDELIVERABLE`, sent as given
    async fn export_list(
        &self,
        target_id: &str,
        columns: ExportColumns,
        export_format: &str,
        export_type: &str,
    ) -> Result<ApiResponse, AppError>;

    /// Exports with the default `CSV` format and `ALL` type
    async fn export_list_default(
        &self,
        target_id: &str,
        columns: ExportColumns,
    ) -> Result<ApiResponse, AppError> {
        self.export_list(target_id, columns, DEFAULT_EXPORT_FORMAT, DEFAULT_EXPORT_TYPE)
            .await
    }

    /// Deletes from `target_id` every contact that exists in `source_id`
    async fn purge_data(&self, target_id: &str, source_id: &str) -> Result<ApiResponse, AppError>;
}
