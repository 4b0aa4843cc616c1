pub const DEFAULT_SERVER_BACKEND_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "8000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

pub const DEFAULT_RUNNER_BIN: &str = "ollama";
pub const DEFAULT_RUNNER_MODEL: &str = "kitchenmate";
