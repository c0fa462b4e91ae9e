#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_request_line::{DecoderLimits, ParserState, RequestLine, RequestLineDecoder};

#[derive(Arbitrary, Debug)]
struct FuzzChunked {
    data: Vec<u8>,
    split_hint: u8,
}

fn decode_whole(data: &[u8]) -> Result<Option<RequestLine>, String> {
    let mut decoder = RequestLineDecoder::with_limits(DecoderLimits::unlimited());
    decoder.feed(data).map_err(|e| e.to_string())?;
    decoder
        .decode()
        .map(|line| line.cloned())
        .map_err(|e| e.to_string())
}

/// トランスポートからの読み取りと同じく unfilled_mut/advance で少しずつ書き込む
fn decode_chunked(data: &[u8], split_size: usize) -> Result<Option<RequestLine>, String> {
    let mut decoder = RequestLineDecoder::with_limits(DecoderLimits::unlimited());
    let mut offset = 0;
    while offset < data.len() {
        let unfilled = decoder.unfilled_mut().map_err(|e| e.to_string())?;
        let n = unfilled.len().min(split_size).min(data.len() - offset);
        unfilled[..n].copy_from_slice(&data[offset..offset + n]);
        decoder.advance(n);
        offset += n;

        match decoder.decode() {
            Ok(Some(line)) => {
                let line = line.clone();
                assert_eq!(decoder.state(), ParserState::Done);
                // 完了後は残りを一括で追加
                decoder.feed(&data[offset..]).map_err(|e| e.to_string())?;
                return Ok(Some(line));
            }
            Ok(None) => assert_eq!(decoder.state(), ParserState::Initialized),
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(None)
}

fuzz_target!(|input: FuzzChunked| {
    let split_size = (input.split_hint as usize % 16) + 1;

    let whole = decode_whole(&input.data);
    let chunked = decode_chunked(&input.data, split_size);

    // 分割方法によらず同じ結果になる
    assert_eq!(whole, chunked);
});
