use km_core::server::default_config::{DEFAULT_RUNNER_BIN, DEFAULT_RUNNER_MODEL};
use std::env;
use tokio::process::Command;
use tracing::{debug, error, warn};

/// Thin wrapper around the external `ollama` binary.
///
/// Each call spawns a fresh `<bin> run <model> <prompt>` process and
/// waits for it to exit. The runner holds no state, so concurrent
/// requests simply run concurrent processes.
#[derive(Debug)]
pub struct OllamaRunner {
    command: String,
    model: String,
}

impl OllamaRunner {
    pub fn new(command: impl Into<String>, model: impl Into<String>) -> Self {
        OllamaRunner {
            command: command.into(),
            model: model.into(),
        }
    }

    pub fn from_env() -> Self {
        let command =
            env::var("KITCHENMATE_RUNNER_BIN").unwrap_or(String::from(DEFAULT_RUNNER_BIN));
        let model = env::var("KITCHENMATE_MODEL").unwrap_or(String::from(DEFAULT_RUNNER_MODEL));
        OllamaRunner::new(command, model)
    }

    /// Runs the model once and returns whatever it printed on stdout.
    ///
    /// The prompt goes to the process as the final argv entry, never
    /// through a shell. Non-zero exits and stderr noise are logged and
    /// otherwise ignored; a process that cannot be launched yields an
    /// empty response.
    pub async fn ask(&self, prompt: &str) -> String {
        let output = Command::new(&self.command)
            .arg("run")
            .arg(&self.model)
            .arg(prompt)
            .output()
            .await;

        match output {
            Ok(output) => {
                if !output.status.success() {
                    warn!(
                        "{} run {} exited with {}",
                        self.command, self.model, output.status
                    );
                }
                if !output.stderr.is_empty() {
                    debug!(
                        "{} stderr: {}",
                        self.command,
                        String::from_utf8_lossy(&output.stderr).trim_end()
                    );
                }
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            Err(err) => {
                error!("Failed to launch {}: {}", self.command, err);
                String::new()
            }
        }
    }
}
