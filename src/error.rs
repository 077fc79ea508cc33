#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown librtas status code: {code}")]
    UnknownCode { code: i32 },

    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
