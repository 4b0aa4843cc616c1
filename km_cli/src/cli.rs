use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the backend server.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a single prompt and print the model's reply.
    Ask {
        #[arg()]
        prompt: String,
    },
    /// Interactive chat loop against the backend.
    Chat,
}
