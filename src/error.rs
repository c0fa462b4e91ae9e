use std::fmt;

/// リクエストラインのパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// パース完了後に再度パースしようとした
    ParserState,
    /// トークン数が 3 ではない、または UTF-8 として不正
    MalformedRequestLine(String),
    /// 未知のメソッド
    InvalidMethod(String),
    /// リクエストターゲットに `/` が含まれていない
    InvalidTarget(String),
    /// `HTTP/1.1` 以外のバージョン
    InvalidVersion(String),
    /// バッファサイズ超過
    BufferOverflow { size: usize, limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserState => write!(f, "parser state error: request line already parsed"),
            Error::MalformedRequestLine(line) => {
                write!(f, "malformed request line: {:?}", line)
            }
            Error::InvalidMethod(method) => write!(f, "invalid request method: {}", method),
            Error::InvalidTarget(target) => write!(f, "invalid request target: {}", target),
            Error::InvalidVersion(version) => {
                write!(f, "invalid HTTP version: {} (expected HTTP/1.1)", version)
            }
            Error::BufferOverflow { size, limit } => {
                write!(f, "buffer overflow: {} > {}", size, limit)
            }
        }
    }
}

impl std::error::Error for Error {}
