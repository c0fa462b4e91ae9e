//! リクエストラインデコーダーモジュール
//!
//! Sans I/O 設計に基づくインクリメンタルデコーダーを提供。
//! 読み取ったバイト列を蓄積し、終端 (CRLF) が揃った時点でリクエストラインを確定する。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_request_line::{ParserState, RequestLineDecoder};
//!
//! let mut decoder = RequestLineDecoder::new();
//!
//! // 1 バイトずつ届いても結果は同じ
//! for b in b"GET /pokemon HTTP/1.1\r\n" {
//!     assert_eq!(decoder.state(), ParserState::Initialized);
//!     decoder.feed(&[*b]).unwrap();
//!     if let Some(line) = decoder.decode().unwrap() {
//!         assert_eq!(line.target, "/pokemon");
//!     }
//! }
//! assert_eq!(decoder.state(), ParserState::Done);
//! ```
//!
//! ## 再パースについて
//!
//! デコーダーは読み取りのたびにバッファ全体をパースし直す。
//! リクエストラインのみを扱う間はこれで十分だが、
//! ヘッダーやボディまで扱う場合は再開位置を保持する方式に移行する必要がある。

mod request;
mod state;
mod tokenizer;

// 公開 API
pub use request::RequestLineDecoder;
pub use state::ParserState;
pub use tokenizer::{find_line, parse_request_line};
