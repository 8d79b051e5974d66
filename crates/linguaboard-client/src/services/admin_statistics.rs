use linguaboard_models::envelope::DataEnvelope;
use linguaboard_models::statistics::{ChildrenStatistics, DashboardStatistics, ParentStatistics};

use crate::cancel::ApiCall;
use crate::client::ApiClient;
use crate::endpoints;
use crate::request::RequestParams;

pub struct AdminStatisticsService;

impl AdminStatisticsService {
    /// Platform totals with their monthly growth.
    pub fn dashboard(client: &ApiClient) -> ApiCall<DataEnvelope<DashboardStatistics>> {
        client.call(&endpoints::STATISTICS_DASHBOARD, RequestParams::new())
    }

    pub fn parents(client: &ApiClient) -> ApiCall<DataEnvelope<ParentStatistics>> {
        client.call(&endpoints::STATISTICS_PARENTS, RequestParams::new())
    }

    pub fn children(client: &ApiClient) -> ApiCall<DataEnvelope<ChildrenStatistics>> {
        client.call(&endpoints::STATISTICS_CHILDREN, RequestParams::new())
    }
}
