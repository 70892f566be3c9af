use thiserror::Error;

pub type WavResult<T> = std::result::Result<T, WavError>;

#[derive(Debug, Error)]
pub enum WavError {
	#[error("in {path}: WAVE PCM {field} not validated: expected {expected}, was {actual}")]
	FormatMismatch { path: String, field: &'static str, expected: String, actual: String },

	#[error("{message}")]
	InvalidArgument { message: String },

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
}

impl WavError {
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument { message: message.into() }
	}

	pub fn format_mismatch(
		path: impl Into<String>,
		field: &'static str,
		expected: impl ToString,
		actual: impl ToString,
	) -> Self {
		Self::FormatMismatch {
			path: path.into(),
			field,
			expected: expected.to_string(),
			actual: actual.to_string(),
		}
	}
}
