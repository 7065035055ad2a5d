use thiserror::Error;

/// Failures reported by an external brand-voice model.
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("voice model unavailable: {0}")]
    Unavailable(String),

    #[error("voice model error: {0}")]
    Model(String),
}
