use crate::error::{ErrorCli, Result};
use km_core::server::payload::ask_request::AskRequest;
use km_core::server::routes::BackendApiAsk;
use reqwest::{Client, Response};

pub struct CliClient {
    client: Client,
    base_url_api: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url_api: format!("{}{}", base_url, "/api"),
        }
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        match res {
            Ok(res) => {
                let text = res.error_for_status()?.text().await?;
                Ok(text)
            }
            Err(e) => {
                if e.is_connect() {
                    Err(ErrorCli::ConnectionRefused(self.base_url_api.clone()))
                } else {
                    Err(ErrorCli::Http(e))
                }
            }
        }
    }

    pub async fn ask(&self, request: &AskRequest) -> Result<String> {
        let url = format!(
            "{}{}",
            self.base_url_api,
            BackendApiAsk::Ask.path().as_str()
        );
        let result = self.client.post(&url).json(request).send().await;
        self.handle_response(result).await
    }
}
