use crate::client::{ApiClient, ApiRequest};
use crate::config::ConfigStore;
use crate::error::ClientError;
use crate::model::{LoginRequest, Token, User, UserCreate};
use tracing::info;

pub struct UserCommandService;

impl UserCommandService {
    /// Register an account. Consumes the license in `user`.
    pub async fn signup(client: &ApiClient, user: &UserCreate) -> Result<User, ClientError> {
        let request = ApiRequest::post("/users/").payload(user)?;
        client.execute_one(&request).await
    }

    pub async fn me(client: &ApiClient) -> Result<User, ClientError> {
        client
            .execute_one(&ApiRequest::get("/users/me/").authenticated())
            .await
    }

    /// Exchange credentials for a token and persist it in `store`.
    pub async fn login(
        client: &ApiClient,
        store: &mut ConfigStore,
        credentials: &LoginRequest,
    ) -> Result<Token, ClientError> {
        let request = ApiRequest::post("/users/login/")
            .payload(credentials)?
            .form_encoded();
        let token: Token = client.execute_one(&request).await?;
        if token.access_token.is_empty() {
            return Err(ClientError::Schema(
                "login response carried an empty access_token".to_string(),
            ));
        }

        store.set_token(token.access_token.clone());
        store.persist().map_err(|e| match e {
            ClientError::Config(reason) => ClientError::Config(format!(
                "Logged in, but the token could not be saved: {}",
                reason
            )),
            other => other,
        })?;
        info!(username = %credentials.username, "Stored new access token");
        Ok(token)
    }

    /// Forget the stored token.
    pub fn logout(store: &mut ConfigStore) -> Result<(), ClientError> {
        store.clear_token();
        store.persist()
    }
}
