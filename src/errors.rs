use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("OpenAI error: {0}")]
    OpenAI(#[from] OpenAIError),
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Model returned an empty completion")]
    EmptyCompletion,
    #[error("Missing secret: {0}")]
    MissingSecret(&'static str),
    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_secret() {
        let err = ApiError::MissingSecret("OPENAI_API_KEY");
        assert_eq!(err.to_string(), "Missing secret: OPENAI_API_KEY");
    }

    #[test]
    fn display_invalid_setting() {
        let err = ApiError::InvalidSetting {
            key: "CANVAS_MODEL",
            value: "".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for CANVAS_MODEL: ");
    }
}
