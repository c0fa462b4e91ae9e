//! リクエストラインデコーダー

use crate::buffer::GrowableBuffer;
use crate::error::Error;
use crate::limits::DecoderLimits;
use crate::request::Request;
use crate::request_line::RequestLine;

use super::state::ParserState;

/// リクエストラインデコーダー (Sans I/O)
///
/// 蓄積バッファとリクエスト (パーサー状態) を所有する。
/// 読み取りのたびに蓄積済みのバッファ全体をパースし直す。
///
/// # 使い方
///
/// ```rust
/// use shiguredo_request_line::{Method, RequestLineDecoder};
///
/// let mut decoder = RequestLineDecoder::new();
///
/// decoder.feed(b"GET /poke").unwrap();
/// assert!(decoder.decode().unwrap().is_none());
///
/// decoder.feed(b"mon HTTP/1.1\r\nHost: ").unwrap();
/// let line = decoder.decode().unwrap().unwrap();
/// assert_eq!(line.method, Method::Get);
/// assert_eq!(line.target, "/pokemon");
///
/// // 終端より後ろのバイトは残る
/// assert_eq!(decoder.remaining(), b"Host: ");
/// ```
#[derive(Debug)]
pub struct RequestLineDecoder {
    buffer: GrowableBuffer,
    request: Request,
    consumed: usize,
    limits: DecoderLimits,
}

impl Default for RequestLineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestLineDecoder {
    /// 新しいデコーダーを作成
    pub fn new() -> Self {
        Self::with_limits(DecoderLimits::default())
    }

    /// 制限付きでデコーダーを作成
    pub fn with_limits(limits: DecoderLimits) -> Self {
        Self {
            buffer: GrowableBuffer::with_max_capacity(limits.max_buffer_size),
            request: Request::new(),
            consumed: 0,
            limits,
        }
    }

    /// 制限設定を取得
    pub fn limits(&self) -> &DecoderLimits {
        &self.limits
    }

    /// パーサー状態
    pub fn state(&self) -> ParserState {
        self.request.state()
    }

    /// バッファにデータを追加
    pub fn feed(&mut self, data: &[u8]) -> Result<(), Error> {
        self.buffer.append(data)
    }

    /// 読み取り先となる未書き込み領域を取得
    ///
    /// トランスポートから直接読み込んだ後は `advance()` を呼ぶこと。
    pub fn unfilled_mut(&mut self) -> Result<&mut [u8], Error> {
        self.buffer.unfilled_mut()
    }

    /// 読み込んだバイト数だけ書き込み位置を進める
    pub fn advance(&mut self, n: usize) {
        self.buffer.advance(n);
    }

    /// 蓄積済みのバイト列
    pub fn buffered(&self) -> &[u8] {
        self.buffer.filled()
    }

    /// 蓄積バッファの現在の容量
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// リクエストラインの終端より後ろのバイト列
    ///
    /// パース完了前は空を返す。
    pub fn remaining(&self) -> &[u8] {
        if self.request.is_done() {
            &self.buffer.filled()[self.consumed..]
        } else {
            &[]
        }
    }

    /// リクエストラインをデコード
    ///
    /// 完了したら `Some(&RequestLine)` を返す。
    /// データ不足の場合は `None` を返す。
    /// 既に完了している場合は `Error::ParserState` を返す。
    pub fn decode(&mut self) -> Result<Option<&RequestLine>, Error> {
        let consumed = self.request.parse(self.buffer.filled())?;
        if consumed == 0 {
            return Ok(None);
        }
        self.consumed = consumed;
        Ok(self.request.request_line())
    }

    /// デコーダーを消費してリクエストを取り出す
    pub fn into_request(self) -> Request {
        self.request
    }

    /// デコーダーを消費してリクエストと終端より後ろのバイト列を取り出す
    ///
    /// トランスポートから読み過ぎたバイト列を後続のパーサーに引き継ぐために使う。
    pub fn into_parts(self) -> (Request, Vec<u8>) {
        let remaining = self.remaining().to_vec();
        (self.request, remaining)
    }
}
