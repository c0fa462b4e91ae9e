//! # shiguredo_request_line
//!
//! 依存なしの HTTP/1.1 リクエストラインパーサー (Sans I/O)
//!
//! ## 特徴
//!
//! - **依存なし**: 標準ライブラリのみ使用
//! - **Sans I/O**: I/O を完全に分離した設計
//! - **インクリメンタル**: リクエストラインが複数回の読み取りに分かれて届いても扱える
//!
//! リクエストライン (`METHOD TARGET HTTP/1.1`) のみを扱う。
//! ヘッダー、ボディ、レスポンスは扱わない。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_request_line::{Method, RequestLineDecoder};
//!
//! let mut decoder = RequestLineDecoder::new();
//!
//! // 受信データを feed
//! decoder.feed(b"GET /pokemon HT").unwrap();
//! assert!(decoder.decode().unwrap().is_none());
//!
//! decoder.feed(b"TP/1.1\r\n").unwrap();
//! let line = decoder.decode().unwrap().unwrap();
//! assert_eq!(line.method, Method::Get);
//! assert_eq!(line.target, "/pokemon");
//! assert_eq!(line.version, "1.1");
//! ```
//!
//! トランスポートから直接読み込む場合は `unfilled_mut()` と `advance()` を使う。
//!
//! ```rust
//! use shiguredo_request_line::RequestLineDecoder;
//!
//! let mut decoder = RequestLineDecoder::new();
//! let received = b"HEAD / HTTP/1.1\r\n";
//!
//! let unfilled = decoder.unfilled_mut().unwrap();
//! let n = unfilled.len().min(received.len());
//! unfilled[..n].copy_from_slice(&received[..n]);
//! decoder.advance(n);
//! assert!(decoder.decode().unwrap().is_none());
//! ```

mod buffer;
mod decoder;
mod error;
mod limits;
mod method;
mod request;
mod request_line;

pub use buffer::{GrowableBuffer, INITIAL_CAPACITY};
pub use decoder::{ParserState, RequestLineDecoder, find_line, parse_request_line};
pub use error::Error;
pub use limits::DecoderLimits;
pub use method::Method;
pub use request::Request;
pub use request_line::{HTTP_NAME, HTTP_VERSION, RequestLine};
