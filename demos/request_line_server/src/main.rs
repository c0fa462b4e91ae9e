//! リクエストラインサーバーの例 (tokio)
//!
//! 接続ごとにリクエストラインを 1 つ読み取り、メソッド / ターゲット / バージョンを表示する。
//! レスポンスは返さない。
//!
//! 使い方:
//!   # リクエストラインモード (ポート 42069)
//!   cargo run -p request_line_server
//!
//!   # 行チャネルモード (受信した行をそのまま表示)
//!   cargo run -p request_line_server -- --mode lines
//!
//!   # ログ出力
//!   RUST_LOG=debug cargo run -p request_line_server
//!
//! 動作確認:
//!   printf 'GET /pokemon HTTP/1.1\r\n' | nc localhost 42069

use std::str::FromStr;
use std::time::Duration;

use shiguredo_request_line::{DecoderLimits, Request};
use tokio::net::TcpListener;
use tokio_request_line::{Server, lines_channel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    RequestLine,
    Lines,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "request-line" => Ok(Mode::RequestLine),
            "lines" => Ok(Mode::Lines),
            _ => Err(format!(
                "unknown mode: {} (expected request-line or lines)",
                s
            )),
        }
    }
}

struct ServerOptions {
    port: u16,
    mode: Mode,
    max_buffer_size: usize,
    request_line_timeout: Option<Duration>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = parse_args()?;
    let addr = format!("0.0.0.0:{}", options.port);

    match options.mode {
        Mode::RequestLine => serve_request_lines(&addr, &options).await,
        Mode::Lines => serve_lines(&addr).await,
    }
}

fn parse_args() -> Result<ServerOptions, Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "request_line_server";

    // --help フラグ
    noargs::HELP_FLAG.take_help(&mut args);

    // --version フラグ
    let version_flag: bool = noargs::flag("version")
        .short('V')
        .doc("Show version")
        .take(&mut args)
        .is_present();
    if version_flag {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    // --port オプション
    let port: u16 = noargs::opt("port")
        .short('p')
        .doc("Port to listen on")
        .default("42069")
        .take(&mut args)
        .then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    // --mode オプション
    let mode: Mode = noargs::opt("mode")
        .short('m')
        .doc("Server mode: request-line or lines")
        .default("request-line")
        .take(&mut args)
        .then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    // --max-buffer-size オプション
    let max_buffer_size: usize = noargs::opt("max-buffer-size")
        .doc("Maximum size of the accumulation buffer in bytes")
        .default("65536")
        .take(&mut args)
        .then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    // --request-line-timeout オプション (ミリ秒)
    let request_line_timeout: Option<Duration> = noargs::opt("request-line-timeout")
        .doc("Close connections that do not send a request line within this many milliseconds")
        .take(&mut args)
        .present_and_then(|o| o.value().parse::<u64>().map(Duration::from_millis))
        .map_err(|e| format!("{:?}", e))?;

    // 未知の引数があればエラー、ヘルプが返されたら表示
    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        std::process::exit(0);
    }

    Ok(ServerOptions {
        port,
        mode,
        max_buffer_size,
        request_line_timeout,
    })
}

async fn serve_request_lines(
    addr: &str,
    options: &ServerOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::bind(addr).await?.limits(DecoderLimits {
        max_buffer_size: options.max_buffer_size,
    });
    if let Some(timeout) = options.request_line_timeout {
        server = server.request_line_timeout(timeout);
    }

    println!("Request line server listening on {}", server.local_addr()?);
    server.serve(print_request_line).await?;
    Ok(())
}

async fn print_request_line(request: Request) {
    if let Some(line) = request.request_line() {
        println!("Request line:");
        println!("- Method: {}", line.method);
        println!("- Target: {}", line.target);
        println!("- Version: {}", line.version);
    }
}

async fn serve_lines(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    println!("Line server listening on {}", listener.local_addr()?);

    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                log::warn!("accept error: {}", e);
                continue;
            }
        };
        println!("Connection accepted from {}", peer_addr);

        tokio::spawn(async move {
            let mut lines = lines_channel(stream);
            while let Some(line) = lines.recv().await {
                match line {
                    Ok(line) => println!("read: {}", line),
                    Err(e) => log::error!("read error from {}: {}", peer_addr, e),
                }
            }
            log::info!("connection closed by {}", peer_addr);
        });
    }
}
