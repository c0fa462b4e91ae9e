//! リクエストラインのトークナイザー

use crate::error::Error;
use crate::method::Method;
use crate::request_line::{HTTP_NAME, HTTP_VERSION, RequestLine};

/// 終端 (CRLF) の位置を探す
///
/// 見つかった場合は CR の位置を返す。
pub fn find_line(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}

/// 蓄積済みのバイト列からリクエストラインをパースする
///
/// - 終端 (CRLF) がない場合は `Ok(None)` を返す (データ不足、消費 0 バイト)
/// - パースに成功した場合は `RequestLine` と消費したバイト数を返す
///
/// 消費バイト数は終端までの長さ (行 + CRLF) であり、
/// 終端より後ろのバイトは呼び出し側に残る。
pub fn parse_request_line(buf: &[u8]) -> Result<Option<(RequestLine, usize)>, Error> {
    let Some(pos) = find_line(buf) else {
        return Ok(None);
    };

    let line = std::str::from_utf8(&buf[..pos]).map_err(|_| {
        Error::MalformedRequestLine(String::from_utf8_lossy(&buf[..pos]).into_owned())
    })?;

    // METHOD SP TARGET SP VERSION
    let parts: Vec<&str> = line.split(' ').collect();
    let [method, target, version] = parts.as_slice() else {
        return Err(Error::MalformedRequestLine(line.to_string()));
    };

    let method = Method::parse(method).ok_or_else(|| Error::InvalidMethod(method.to_string()))?;

    if !target.contains('/') {
        return Err(Error::InvalidTarget(target.to_string()));
    }

    let version_parts: Vec<&str> = version.split('/').collect();
    match version_parts.as_slice() {
        [name, number] if *name == HTTP_NAME && *number == HTTP_VERSION => {}
        _ => return Err(Error::InvalidVersion(version.to_string())),
    }

    let request_line = RequestLine {
        method,
        target: target.to_string(),
        version: HTTP_VERSION.to_string(),
    };
    Ok(Some((request_line, pos + 2)))
}
