use super::Page;
use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientError;
use crate::model::{Terminal, TerminalCreate};

pub struct TerminalCommandService;

impl TerminalCommandService {
    /// Terminal listing is public.
    pub async fn list(client: &ApiClient, page: Page) -> Result<Vec<Terminal>, ClientError> {
        let request = ApiRequest::get("/terminals/").payload(&page)?;
        client.execute_many(&request).await
    }

    pub async fn create(
        client: &ApiClient,
        terminal: &TerminalCreate,
    ) -> Result<Terminal, ClientError> {
        let request = ApiRequest::post("/terminals/")
            .payload(terminal)?
            .authenticated();
        client.execute_one(&request).await
    }
}
