use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `camp-client`.
pub enum CampClientError {
    /// Ошибка HTTP-транспорта или декодирования ответа (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint вернул 401/403.
    #[error("unauthorized")]
    Unauthorized,

    /// Запрошенный ресурс не найден.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос или бизнес-ошибка на стороне API.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций `camp-client`.
pub type CampClientResult<T> = Result<T, CampClientError>;

impl CampClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized
            }
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::InvalidRequest(message)
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}
