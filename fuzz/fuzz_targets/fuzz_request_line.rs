#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_request_line::{HTTP_VERSION, RequestLineDecoder, find_line, parse_request_line};

fuzz_target!(|data: &[u8]| {
    let parsed = parse_request_line(data);
    if find_line(data).is_none() {
        // 終端がなければ常にデータ不足
        assert_eq!(parsed, Ok(None));
        return;
    }
    let Ok(Some((line, consumed))) = parsed else {
        return;
    };
    assert_eq!(find_line(data), Some(consumed - 2));

    // 消費バイト数は CRLF の直後
    assert!(consumed >= 2 && consumed <= data.len());
    assert_eq!(&data[consumed - 2..consumed], b"\r\n");
    assert!(line.target.contains('/'));
    assert_eq!(line.version, HTTP_VERSION);

    // エンコードし直しても同じ結果になる
    let encoded = line.encode();
    let (reparsed, reconsumed) = parse_request_line(&encoded)
        .expect("encoded line must parse")
        .expect("encoded line must be complete");
    assert_eq!(reparsed, line);
    assert_eq!(reconsumed, encoded.len());

    let mut decoder = RequestLineDecoder::new();
    if decoder.feed(data).is_ok() {
        let decoded = decoder.decode().expect("decode must agree with tokenizer");
        assert_eq!(decoded, Some(&line));
        assert_eq!(decoder.remaining(), &data[consumed..]);
    }
});
