use super::Page;
use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientError;
use crate::model::{License, LicenseCreate};

pub struct LicenseCommandService;

impl LicenseCommandService {
    pub async fn create(client: &ApiClient, license: &LicenseCreate) -> Result<License, ClientError> {
        let request = ApiRequest::post("/licenses/")
            .payload(license)?
            .authenticated();
        client.execute_one(&request).await
    }

    pub async fn list(client: &ApiClient, page: Page) -> Result<Vec<License>, ClientError> {
        let request = ApiRequest::get("/licenses/").payload(&page)?.authenticated();
        client.execute_many(&request).await
    }
}
