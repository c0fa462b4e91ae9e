//! リクエストメソッド

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 受け付けるリクエストメソッド
///
/// 大文字小文字を区別し、完全一致のみ受け付ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Connect,
    Trace,
    Options,
}

impl Method {
    /// すべてのメソッド
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Head,
        Method::Connect,
        Method::Trace,
        Method::Options,
    ];

    /// トークンからメソッドを取得
    ///
    /// 未知のトークンの場合は `None`
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "PATCH" => Some(Method::Patch),
            "DELETE" => Some(Method::Delete),
            "HEAD" => Some(Method::Head),
            "CONNECT" => Some(Method::Connect),
            "TRACE" => Some(Method::Trace),
            "OPTIONS" => Some(Method::Options),
            _ => None,
        }
    }

    /// ワイヤー上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Options => "OPTIONS",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::parse(s).ok_or_else(|| Error::InvalidMethod(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
