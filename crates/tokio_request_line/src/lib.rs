//! tokio_request_line - Tokio integration for shiguredo_request_line
//!
//! tokio を使用した非同期リクエストライン読み取りとサーバー。
//!
//! ## Features
//!
//! - `server` - TCP サーバー機能 (デフォルト有効)
//! - `lines` - 改行区切りの行チャネル (デフォルト有効)
//! - `log` - `log` クレートによるログ出力
//! - `full` - すべての機能を有効化
//!
//! ## 特徴
//!
//! - **shiguredo_request_line ベース**: Sans I/O ライブラリをベースにした設計
//! - **非同期 I/O**: tokio による完全非同期対応
//! - **接続単位のエラー**: パースや読み取りの失敗は該当接続を閉じるだけで、サーバーは継続する
//!
//! ## 読み取り
//!
//! ```ignore
//! use tokio_request_line::read_request_line;
//!
//! let (mut stream, _) = listener.accept().await?;
//! // 終端より後ろに読み込んだバイト列も返る
//! let (request, remaining) = read_request_line(&mut stream).await?;
//! ```
//!
//! ## サーバー
//!
//! ```ignore
//! use tokio_request_line::{Request, Server};
//!
//! async fn handler(request: Request) {
//!     if let Some(line) = request.request_line() {
//!         println!("{} {} {}", line.method, line.target, line.version);
//!     }
//! }
//!
//! let server = Server::bind("0.0.0.0:42069").await?;
//! server.serve(handler).await?;
//! ```

pub mod driver;
pub mod error;
#[cfg(feature = "lines")]
pub mod lines;
mod log;
#[cfg(feature = "server")]
pub mod server;

pub use driver::{read_request_line, read_request_line_with_limits};
pub use error::{Error, Result};
#[cfg(feature = "lines")]
pub use lines::{LINES_CHANNEL_CAPACITY, lines_channel};
#[cfg(feature = "server")]
pub use server::{Handler, Server};

// shiguredo_request_line の型を re-export
pub use shiguredo_request_line::{DecoderLimits, Method, ParserState, Request, RequestLine};
