use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientError;
use crate::model::{Pipeline, PipelineCreate};

pub struct PipelineCommandService;

impl PipelineCommandService {
    pub async fn create(
        client: &ApiClient,
        pipeline: &PipelineCreate,
    ) -> Result<Pipeline, ClientError> {
        let request = ApiRequest::post("/pipelines")
            .payload(pipeline)?
            .authenticated();
        client.execute_one(&request).await
    }

    pub async fn list(client: &ApiClient) -> Result<Vec<Pipeline>, ClientError> {
        client
            .execute_many(&ApiRequest::get("/pipelines").authenticated())
            .await
    }

    pub async fn view(client: &ApiClient, id: u64) -> Result<Pipeline, ClientError> {
        client
            .execute_one(&ApiRequest::get(format!("/pipelines/{}", id)).authenticated())
            .await
    }

    /// The server answers with the removed pipeline.
    pub async fn delete(client: &ApiClient, id: u64) -> Result<Pipeline, ClientError> {
        client
            .execute_one(&ApiRequest::delete(format!("/pipelines/{}", id)).authenticated())
            .await
    }
}
