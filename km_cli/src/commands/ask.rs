use crate::client::CliClient;
use crate::error::Result;
use km_core::error::ErrorCore;
use km_core::server::payload::ask_request::AskRequest;
use km_core::server::payload::ask_response::AskResponse;

pub async fn handle(cli_client: &CliClient, prompt: String) -> Result<()> {
    let text = cli_client.ask(&AskRequest { prompt }).await?;
    let reply: AskResponse = serde_json::from_str(&text).map_err(ErrorCore::from)?;
    println!("{}", reply.response.trim_end());
    Ok(())
}
