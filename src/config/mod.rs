use serde::{self, Deserialize};

#[derive(Deserialize, Clone, Debug)]
pub struct GlobalConfig {
    /// Maximum level emitted by the log subscriber (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_owned()
}
