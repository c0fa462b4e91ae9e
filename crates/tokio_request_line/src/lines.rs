//! 改行区切りの行チャネル
//!
//! リクエストラインパーサー以前の、生産者/消費者パターンの参照実装。
//! 生産者タスクが 8 バイトずつ読み取って `\n` で分割し、
//! 容量 15 の bounded チャネルで消費者に渡す。
//! チャネルが満杯の間は生産者の読み取りが止まる。

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;

use crate::error::Result;
use crate::log::debug;

/// 行チャネルの容量
pub const LINES_CHANNEL_CAPACITY: usize = 15;

/// 1 回の読み取りサイズ
const READ_CHUNK_SIZE: usize = 8;

/// reader から読み取った行を順に受け取るチャネルを返す
///
/// 行には `\n` を含まない。EOF 時点で未終端の行が残っていればそれも送る。
/// 読み取りエラーが起きた場合はエラーを送ってチャネルを閉じる。
/// 受信側が破棄された場合、生産者タスクは読み取りを止めて終了する。
pub fn lines_channel<R>(reader: R) -> mpsc::Receiver<Result<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINES_CHANNEL_CAPACITY);
    tokio::spawn(async move {
        let mut reader = reader;
        if let Err(e) = produce_lines(&mut reader, &tx).await {
            let _ = tx.send(Err(e)).await;
        }
    });
    rx
}

async fn produce_lines<R>(reader: &mut R, tx: &mpsc::Sender<Result<String>>) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    let mut current = Vec::new();

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }

        let mut data = &chunk[..n];
        while let Some(i) = data.iter().position(|&b| b == b'\n') {
            current.extend_from_slice(&data[..i]);
            let line = String::from_utf8_lossy(&std::mem::take(&mut current)).into_owned();
            if tx.send(Ok(line)).await.is_err() {
                debug!("line receiver dropped");
                return Ok(());
            }
            data = &data[i + 1..];
        }
        current.extend_from_slice(data);
    }

    if !current.is_empty() {
        let line = String::from_utf8_lossy(&current).into_owned();
        let _ = tx.send(Ok(line)).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::{Context, Poll};
    use std::time::Duration;

    use tokio::io::ReadBuf;

    use super::*;
    use crate::error::Error;

    async fn collect(mut rx: mpsc::Receiver<Result<String>>) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = rx.recv().await {
            lines.push(line.unwrap());
        }
        lines
    }

    #[tokio::test]
    async fn split_lines() {
        let data: &'static [u8] = b"first line\nsecond\n\nthird and the last one";
        let lines = collect(lines_channel(data)).await;
        assert_eq!(lines, vec!["first line", "second", "", "third and the last one"]);
    }

    #[tokio::test]
    async fn multiple_newlines_in_one_chunk() {
        let data: &'static [u8] = b"a\nb\nc\nd\n";
        let lines = collect(lines_channel(data)).await;
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn keeps_carriage_return() {
        let data: &'static [u8] = b"GET / HTTP/1.1\r\n";
        let lines = collect(lines_channel(data)).await;
        assert_eq!(lines, vec!["GET / HTTP/1.1\r"]);
    }

    #[tokio::test]
    async fn backpressure_preserves_order() {
        let data: Vec<u8> = (0..100).flat_map(|i| format!("{}\n", i).into_bytes()).collect();
        let lines = collect(lines_channel(io::Cursor::new(data))).await;
        let expected: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        assert_eq!(lines, expected);
    }

    /// 読み取りのたびに 1 行を返し、読み取り回数を数える reader
    struct CountingReader {
        reads: Arc<AtomicUsize>,
    }

    impl AsyncRead for CountingReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            buf.put_slice(b"x\n");
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn full_channel_stops_reading() {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut rx = lines_channel(CountingReader {
            reads: reads.clone(),
        });

        // 受信しない間は、満杯のチャネルと送信待ちの 1 行分で読み取りが止まる
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(reads.load(Ordering::SeqCst), LINES_CHANNEL_CAPACITY + 1);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(reads.load(Ordering::SeqCst), LINES_CHANNEL_CAPACITY + 1);

        // 1 行受信すると 1 回だけ読み取りが進む
        assert_eq!(rx.recv().await.unwrap().unwrap(), "x");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(reads.load(Ordering::SeqCst), LINES_CHANNEL_CAPACITY + 2);
    }

    struct FailingReader;

    impl AsyncRead for FailingReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::other("broken pipe")))
        }
    }

    #[tokio::test]
    async fn read_error_is_sent() {
        let mut rx = lines_channel(FailingReader);
        assert!(matches!(rx.recv().await, Some(Err(Error::Io(_)))));
        assert!(rx.recv().await.is_none());
    }
}
