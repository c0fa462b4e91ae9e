use std::fmt;

use crate::method::Method;

/// HTTP 名
pub const HTTP_NAME: &str = "HTTP";

/// 受け付ける HTTP バージョン
pub const HTTP_VERSION: &str = "1.1";

/// リクエストライン
///
/// `METHOD SP TARGET SP HTTP/1.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// メソッド
    pub method: Method,
    /// リクエストターゲット (必ず `/` を含む)
    pub target: String,
    /// HTTP バージョン (`HTTP/` を除いた部分、常に `1.1`)
    pub version: String,
}

impl RequestLine {
    /// 新しいリクエストライン (HTTP/1.1) を作成
    pub fn new(method: Method, target: &str) -> Self {
        Self {
            method,
            target: target.to_string(),
            version: HTTP_VERSION.to_string(),
        }
    }

    /// 終端 (CRLF) を含むワイヤー形式にエンコード
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = self.to_string().into_bytes();
        buf.extend_from_slice(b"\r\n");
        buf
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}/{}",
            self.method, self.target, HTTP_NAME, self.version
        )
    }
}
