//! PBT テスト共通ユーティリティ

use proptest::prelude::*;
use shiguredo_request_line::Method;

// ========================================
// リクエストライン生成
// ========================================

/// 受け付けるメソッド
pub fn method() -> impl Strategy<Value = Method> {
    proptest::sample::select(Method::ALL.to_vec())
}

/// 受け付けないメソッドトークン (空白と `\r` `\n` を含まない)
pub fn unknown_method() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,10}".prop_filter("must not be a known method", |s| Method::parse(s).is_none())
}

/// `/` を含むリクエストターゲット
pub fn target() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        "/[a-zA-Z0-9/_.?=&%-]{0,64}".prop_map(|s| s),
        "http://[a-z]{1,16}\\.example/[a-z0-9/]{0,16}".prop_map(|s| s),
    ]
}

/// `/` を含まないリクエストターゲット
pub fn target_without_slash() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.*?=&-]{1,32}".prop_map(|s| s)
}

/// 読み取りの区切り位置 (昇順、重複なし)
pub fn split_points(len: usize) -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::btree_set(0..=len, 0..8).prop_map(|set| set.into_iter().collect())
}

/// データを区切り位置で分割する
pub fn split_at_points<'a>(data: &'a [u8], points: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for &point in points {
        chunks.push(&data[start..point]);
        start = point;
    }
    chunks.push(&data[start..]);
    chunks
}
