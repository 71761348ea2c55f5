pub type CurtainResult<T> = Result<T, CurtainError>;

#[derive(thiserror::Error, Debug)]
pub enum CurtainError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("timeline error: {0}")]
    Timeline(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurtainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            CurtainError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            CurtainError::timeline("x")
                .to_string()
                .contains("timeline error:")
        );
        assert!(
            CurtainError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = CurtainError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
