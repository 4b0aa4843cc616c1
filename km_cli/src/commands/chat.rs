use crate::client::CliClient;
use crate::error::Result;
use km_core::error::ErrorCore;
use km_core::server::payload::ask_request::AskRequest;
use km_core::server::payload::ask_response::AskResponse;
use std::io;
use std::io::{BufRead, Write};

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    println!("Type your prompt (or 'exit' to quit):");

    let stdin = io::stdin();
    loop {
        print!("> ");
        // Flush stdout to ensure the prompt is visible
        io::stdout().flush().map_err(ErrorCore::from)?;

        let mut input = String::new();
        if stdin
            .lock()
            .read_line(&mut input)
            .map_err(ErrorCore::from)?
            == 0
        {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Exiting chat.");
            break;
        }

        let text = cli_client
            .ask(&AskRequest {
                prompt: input.to_string(),
            })
            .await?;
        let reply: AskResponse = serde_json::from_str(&text).map_err(ErrorCore::from)?;
        if reply.response.is_empty() {
            println!("No response from model.");
        } else {
            println!("{}", reply.response.trim_end());
        }
    }
    Ok(())
}
