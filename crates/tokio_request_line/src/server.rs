//! リクエストラインサーバー
//!
//! 接続ごとにタスクを起動し、リクエストラインを 1 つ読み取ってハンドラーに渡す。
//! 1 接続につき 1 リクエストのみを扱い、処理後は接続を閉じる。
//!
//! ## 使い方
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

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use shiguredo_request_line::{DecoderLimits, Request};
use tokio::net::{TcpListener, TcpStream};

use crate::driver::read_request_line_with_limits;
use crate::error::Result;
use crate::log::{debug, error, info, warning};

/// accept 失敗後に再試行するまでの待ち時間
pub const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// リクエストハンドラー
pub trait Handler: Send + Sync + 'static {
    /// パース済みのリクエストを処理する
    fn handle(&self, request: Request) -> impl Future<Output = ()> + Send;
}

/// 関数からハンドラーを作成
impl<F, Fut> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send,
{
    fn handle(&self, request: Request) -> impl Future<Output = ()> + Send {
        (self)(request)
    }
}

/// リクエストラインサーバー
pub struct Server {
    listener: TcpListener,
    limits: DecoderLimits,
    request_line_timeout: Option<Duration>,
}

impl Server {
    /// 指定アドレスにバインド
    pub async fn bind(addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            limits: DecoderLimits::default(),
            request_line_timeout: None,
        })
    }

    /// デコーダーの制限を設定
    pub fn limits(mut self, limits: DecoderLimits) -> Self {
        self.limits = limits;
        self
    }

    /// リクエストライン受信のタイムアウトを設定
    ///
    /// デフォルトはタイムアウトなし。
    pub fn request_line_timeout(mut self, timeout: Duration) -> Self {
        self.request_line_timeout = Some(timeout);
        self
    }

    /// ローカルアドレスを取得
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// サーバーを起動
    ///
    /// 接続単位のエラーは接続を閉じるだけで、受け付けは継続する。
    pub async fn serve<H: Handler>(self, handler: H) -> Result<()> {
        let config = Arc::new(ConnectionConfig {
            limits: self.limits,
            request_line_timeout: self.request_line_timeout,
        });
        let handler = Arc::new(handler);

        loop {
            let (stream, peer_addr) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    // EMFILE などは即座に再発するため少し待つ
                    warning!("accept error: {}", e);
                    tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                    continue;
                }
            };
            info!("connection accepted from {}", peer_addr);

            let config = config.clone();
            let handler = handler.clone();
            tokio::spawn(async move {
                match handle_connection(stream, peer_addr, config, handler).await {
                    Ok(()) => {
                        debug!("connection from {} closed", peer_addr);
                    }
                    Err(e) => {
                        error!("connection error from {}: {}", peer_addr, e);
                    }
                }
            });
        }
    }

    /// 単一の接続を処理 (テスト用)
    pub async fn handle_one<H: Handler>(self, handler: H) -> Result<()> {
        let (stream, peer_addr) = self.listener.accept().await?;
        let config = Arc::new(ConnectionConfig {
            limits: self.limits,
            request_line_timeout: self.request_line_timeout,
        });
        handle_connection(stream, peer_addr, config, Arc::new(handler)).await
    }
}

struct ConnectionConfig {
    limits: DecoderLimits,
    request_line_timeout: Option<Duration>,
}

/// 接続を処理
///
/// ストリームはこの関数を抜けると閉じられる。
async fn handle_connection<H: Handler>(
    mut stream: TcpStream,
    _peer_addr: SocketAddr,
    config: Arc<ConnectionConfig>,
    handler: Arc<H>,
) -> Result<()> {
    let read = read_request_line_with_limits(&mut stream, config.limits.clone());
    let (request, _remaining) = match config.request_line_timeout {
        Some(timeout) => tokio::time::timeout(timeout, read).await??,
        None => read.await?,
    };

    handler.handle(request).await;
    Ok(())
}
