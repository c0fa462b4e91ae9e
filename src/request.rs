use crate::decoder::{ParserState, parse_request_line};
use crate::error::Error;
use crate::request_line::RequestLine;

/// 1 接続分のリクエスト
///
/// リクエストラインとパーサー状態を持つ。
/// リクエストラインは `Done` に遷移した時点で確定し、以降は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    request_line: Option<RequestLine>,
    state: ParserState,
}

impl Request {
    /// `Initialized` 状態のリクエストを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// パーサー状態
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// パースが完了しているか
    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    /// パース済みのリクエストライン
    pub fn request_line(&self) -> Option<&RequestLine> {
        self.request_line.as_ref()
    }

    /// リクエストラインを取り出す
    pub fn into_request_line(self) -> Option<RequestLine> {
        self.request_line
    }

    /// 蓄積済みのバイト列をパースする
    ///
    /// 消費したバイト数を返す。データ不足の場合は 0 を返し、状態は変わらない。
    /// 既に `Done` の場合は `Error::ParserState` を返す。
    pub fn parse(&mut self, data: &[u8]) -> Result<usize, Error> {
        if self.state != ParserState::Initialized {
            return Err(Error::ParserState);
        }
        match parse_request_line(data)? {
            Some((request_line, consumed)) => {
                self.request_line = Some(request_line);
                self.state = ParserState::Done;
                Ok(consumed)
            }
            None => Ok(0),
        }
    }
}
