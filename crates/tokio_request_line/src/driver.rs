//! リクエストラインの読み取り
//!
//! トランスポートからバイト列を読み取り、リクエストラインが揃うまでデコーダーに渡す。
//!
//! 読み取りは蓄積バッファの空き領域単位で行うため、終端 (CRLF) より後ろのバイトも
//! 読み込まれることがある。それらはリクエストと一緒に返す。

use shiguredo_request_line::{DecoderLimits, ParserState, Request, RequestLineDecoder};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{Error, Result};
use crate::log::{debug, trace};

/// デフォルトの制限でリクエストラインを読み取る
pub async fn read_request_line<R>(reader: &mut R) -> Result<(Request, Vec<u8>)>
where
    R: AsyncRead + Unpin,
{
    read_request_line_with_limits(reader, DecoderLimits::default()).await
}

/// 制限付きでリクエストラインを読み取る
///
/// `Done` になるまで 1 回ずつ読み取り、読み取るたびに蓄積済みのバッファ全体をパースする。
///
/// - パースエラーは即座に `Error::Parse` として返す
/// - EOF 以外の読み取り失敗は `Error::Io` として返す
/// - リクエストラインが揃う前に EOF に達した場合は `Error::TruncatedInput` を返す
///
/// 成功時はリクエストと、終端より後ろに読み込んだバイト列を返す。
pub async fn read_request_line_with_limits<R>(
    reader: &mut R,
    limits: DecoderLimits,
) -> Result<(Request, Vec<u8>)>
where
    R: AsyncRead + Unpin,
{
    let mut decoder = RequestLineDecoder::with_limits(limits);

    while decoder.state() != ParserState::Done {
        let n = reader.read(decoder.unfilled_mut()?).await?;
        if n == 0 {
            let received = decoder.buffered().len();
            debug!("end of input after {} bytes", received);
            return Err(Error::TruncatedInput { received });
        }
        decoder.advance(n);
        trace!(
            "read {} bytes (buffered: {}, capacity: {})",
            n,
            decoder.buffered().len(),
            decoder.capacity()
        );

        decoder.decode()?;
    }

    Ok(decoder.into_parts())
}
