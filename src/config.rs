use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory the persisted board blob lives in.
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            data_dir: std::env::var("KANBAN_DATA_DIR").unwrap_or_else(|_| ".kanban".into()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".kanban".into(),
        }
    }
}
