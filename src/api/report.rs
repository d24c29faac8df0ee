//! Report endpoints

use pos_core::domain::{ReportPeriod, SalesReport, SalesReportResponse};
use pos_core::DomainResult;

use super::RestClient;

impl RestClient {
    /// `GET /reports/sales?days=N`
    pub async fn sales_report(&self, period: ReportPeriod) -> DomainResult<SalesReport> {
        let path = format!("/reports/sales?days={}", period.days());
        let response: SalesReportResponse = self.get(&path).await?;
        Ok(response.into_report())
    }
}
