/// Errors on the persistence path. Board mutations themselves never fail:
/// unknown ids degrade to no-ops and out-of-range indices are clamped.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported snapshot version: found {found}, expected {expected}")]
    SchemaVersion { found: u32, expected: u32 },
}
