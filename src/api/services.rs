//! Service Catalog
//!
//! Public endpoint, no token required.

use super::Gateway;
use crate::error::ApiResult;
use crate::models::Service;

pub(super) const SERVICES_PATH: &str = "/services";

impl Gateway {
    pub(super) async fn fetch_services(&self) -> ApiResult<Vec<Service>> {
        self.get_json(SERVICES_PATH).await
    }
}
