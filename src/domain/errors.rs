use std::str::FromStr;
use strum::{AsRefStr, EnumString};

/// Error codes the trading API returns in its error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum ApiErrorCode {
    #[strum(serialize = "INSUFFICIENT_BALANCE")]
    InsufficientBalance,
    #[strum(serialize = "INVALID_PRICE")]
    InvalidPrice,
    #[strum(serialize = "INVALID_AMOUNT")]
    InvalidAmount,
    #[strum(serialize = "UNSUPPORTED_PAIR")]
    UnsupportedPair,
    #[strum(serialize = "BAD_REQUEST")]
    BadRequest,
    #[strum(serialize = "INVALID_REQUEST")]
    InvalidRequest,
    #[strum(serialize = "UNAUTHORIZED")]
    Unauthorized,
    #[strum(serialize = "NOT_FOUND")]
    NotFound,
    #[strum(serialize = "INTERNAL_ERROR")]
    InternalError,
    #[strum(serialize = "INTERNAL_SERVER_ERROR")]
    InternalServerError,
}

/// Application error surfaced to the UI. Stored in an error-state signal and
/// rendered as a message; nothing here is ever propagated as a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The request never reached the server.
    Connection,
    /// The request timed out in transit.
    Timeout,
    /// The server answered with a structured error body and a known code.
    Api { code: ApiErrorCode, message: Option<String> },
    /// Structured error body with a code outside the known taxonomy.
    UnknownApi { message: Option<String> },
    /// Transport-level failure without a structured body.
    Other(String),
}

impl AppError {
    /// Build an error from an API error body (`{error, message}`).
    pub fn from_api_body(code: &str, message: Option<String>) -> Self {
        match ApiErrorCode::from_str(code) {
            Ok(code) => Self::Api { code, message },
            Err(_) => Self::UnknownApi { message },
        }
    }

    /// Map to the fixed user-readable message table.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection => {
                "Unable to connect to server. Please check your internet connection.".to_string()
            }
            Self::Timeout => "Request timed out. Please try again.".to_string(),
            Self::Api { code, message } => match code {
                ApiErrorCode::InsufficientBalance => {
                    "Insufficient balance. Please check your available balance.".to_string()
                }
                ApiErrorCode::InvalidPrice => {
                    "Invalid price. Please enter a valid price.".to_string()
                }
                ApiErrorCode::InvalidAmount => {
                    "Invalid amount. Please enter a valid amount.".to_string()
                }
                ApiErrorCode::UnsupportedPair => {
                    "This trading pair is not supported.".to_string()
                }
                ApiErrorCode::BadRequest | ApiErrorCode::InvalidRequest => message
                    .clone()
                    .unwrap_or_else(|| "Invalid request. Please check your input.".to_string()),
                ApiErrorCode::Unauthorized => {
                    "Authentication required. Please log in.".to_string()
                }
                ApiErrorCode::NotFound => "Resource not found.".to_string(),
                ApiErrorCode::InternalError | ApiErrorCode::InternalServerError => {
                    "Server error. Please try again later.".to_string()
                }
            },
            Self::UnknownApi { message } => message
                .clone()
                .unwrap_or_else(|| "An unexpected error occurred.".to_string()),
            Self::Other(message) => {
                if message.is_empty() {
                    "An unexpected error occurred. Please try again.".to_string()
                } else {
                    message.clone()
                }
            }
        }
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Connection | Self::Timeout | Self::Other(_))
    }

    pub fn is_timeout_error(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { code: ApiErrorCode::Unauthorized, .. })
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::Api {
                code: ApiErrorCode::BadRequest
                    | ApiErrorCode::InvalidRequest
                    | ApiErrorCode::InvalidPrice
                    | ApiErrorCode::InvalidAmount,
                ..
            }
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AppError {}
