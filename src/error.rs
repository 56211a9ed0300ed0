use thiserror::Error;

/// Everything that can go wrong outside of ordinary play. Board no-ops
/// (typing into a full row, clearing an empty one) are defined behavior and
/// never surface here.
#[derive(Debug, Error)]
pub enum GameError {
    /// The word catalog had no usable entries. Fatal to session start.
    #[error("word catalog is empty")]
    EmptyCatalog,

    /// A persisted record failed to parse. Recovered by discarding it.
    #[error("persisted state under {key:?} failed to parse")]
    MalformedPersistedState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The dictionary lookup failed or timed out. Resolved as "not a word".
    #[error("dictionary lookup unavailable: {reason}")]
    ValidationUnavailable { reason: String },

    #[error("storage failure")]
    Storage(#[from] std::io::Error),
}
