//! リクエストラインのトークナイザーのプロパティテスト (decoder/tokenizer.rs)

use pbt::{method, target, target_without_slash, unknown_method};
use proptest::prelude::*;
use shiguredo_request_line::{Error, RequestLine, parse_request_line};

// 有効なリクエストラインは正確にパースされる
proptest! {
    #[test]
    fn valid_request_line(method in method(), target in target()) {
        let data = format!("{} {} HTTP/1.1\r\n", method, target);
        let (line, consumed) = parse_request_line(data.as_bytes()).unwrap().unwrap();

        prop_assert_eq!(line.method, method);
        prop_assert_eq!(&line.target, &target);
        prop_assert_eq!(line.version.as_str(), "1.1");
        prop_assert_eq!(consumed, data.len());
    }
}

// encode したものをパースすると元に戻る
proptest! {
    #[test]
    fn encode_then_parse(method in method(), target in target()) {
        let line = RequestLine::new(method, &target);
        let (parsed, _) = parse_request_line(&line.encode()).unwrap().unwrap();
        prop_assert_eq!(parsed, line);
    }
}

// 終端より後ろのバイトは消費されない
proptest! {
    #[test]
    fn trailing_bytes_not_consumed(
        method in method(),
        target in target(),
        trailing in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut data = format!("{} {} HTTP/1.1\r\n", method, target).into_bytes();
        let line_len = data.len();
        data.extend_from_slice(&trailing);

        let (_, consumed) = parse_request_line(&data).unwrap().unwrap();
        prop_assert_eq!(consumed, line_len);
        prop_assert_eq!(&data[consumed..], &trailing[..]);
    }
}

// 終端がなければ常にデータ不足 (エラーにならない)
proptest! {
    #[test]
    fn no_terminator_is_not_ready(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assume!(!data.windows(2).any(|w| w == b"\r\n"));
        prop_assert_eq!(parse_request_line(&data), Ok(None));
    }
}

// 有効なリクエストラインの途中までは常にデータ不足
proptest! {
    #[test]
    fn prefix_is_not_ready(method in method(), target in target(), cut in 0usize..1000) {
        let data = format!("{} {} HTTP/1.1\r\n", method, target);
        let cut = cut % data.len();
        prop_assert_eq!(parse_request_line(&data.as_bytes()[..cut]), Ok(None));
    }
}

// 未知のメソッドは InvalidMethod
proptest! {
    #[test]
    fn unknown_method_rejected(method in unknown_method(), target in target()) {
        let data = format!("{} {} HTTP/1.1\r\n", method, target);
        prop_assert_eq!(
            parse_request_line(data.as_bytes()),
            Err(Error::InvalidMethod(method))
        );
    }
}

// `/` を含まないターゲットは InvalidTarget
proptest! {
    #[test]
    fn target_without_slash_rejected(method in method(), target in target_without_slash()) {
        let data = format!("{} {} HTTP/1.1\r\n", method, target);
        prop_assert_eq!(
            parse_request_line(data.as_bytes()),
            Err(Error::InvalidTarget(target))
        );
    }
}

// HTTP/1.1 以外のバージョンは InvalidVersion
proptest! {
    #[test]
    fn other_version_rejected(
        method in method(),
        target in target(),
        version in "[A-Za-z0-9./]{1,12}"
    ) {
        prop_assume!(version != "HTTP/1.1");
        let data = format!("{} {} {}\r\n", method, target, version);
        prop_assert_eq!(
            parse_request_line(data.as_bytes()),
            Err(Error::InvalidVersion(version))
        );
    }
}

// トークン数が 3 でなければ MalformedRequestLine
proptest! {
    #[test]
    fn wrong_token_count_rejected(
        tokens in proptest::collection::vec("[A-Za-z0-9/.]{1,8}", 0..8)
    ) {
        prop_assume!(tokens.len() != 3);
        let data = format!("{}\r\n", tokens.join(" "));
        let result = parse_request_line(data.as_bytes());
        prop_assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }
}

// 具体例
#[test]
fn examples() {
    let (line, _) = parse_request_line(b"GET /pokemon HTTP/1.1\r\n")
        .unwrap()
        .unwrap();
    assert_eq!(line.to_string(), "GET /pokemon HTTP/1.1");

    assert!(matches!(
        parse_request_line(b"GET,pokemon,HTTP/1.1\r\n"),
        Err(Error::MalformedRequestLine(_))
    ));
    assert!(matches!(
        parse_request_line(b"FETCH /x HTTP/1.1\r\n"),
        Err(Error::InvalidMethod(_))
    ));
    assert!(matches!(
        parse_request_line(b"GET x HTTP/1.1\r\n"),
        Err(Error::InvalidTarget(_))
    ));
    assert!(matches!(
        parse_request_line(b"GET /x HTTP/1.0\r\n"),
        Err(Error::InvalidVersion(_))
    ));
}
