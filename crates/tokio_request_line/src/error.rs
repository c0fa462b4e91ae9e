//! tokio-request-line エラー型

use std::fmt;

/// tokio-request-line エラー
#[derive(Debug)]
pub enum Error {
    /// I/O エラー (EOF 以外の読み取り失敗)
    Io(std::io::Error),
    /// リクエストラインのパースエラー
    Parse(shiguredo_request_line::Error),
    /// リクエストラインが揃う前に接続が閉じられた
    TruncatedInput {
        /// 受信済みのバイト数
        received: usize,
    },
    /// 読み取りタイムアウト
    Timeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse(e) => write!(f, "parse error: {}", e),
            Error::TruncatedInput { received } => write!(
                f,
                "truncated input: connection closed after {} bytes without a complete request line",
                received
            ),
            Error::Timeout => write!(f, "read timeout"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<shiguredo_request_line::Error> for Error {
    fn from(e: shiguredo_request_line::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Error::Timeout
    }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
