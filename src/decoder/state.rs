//! パーサー状態の定義

/// パーサー状態
///
/// `Initialized` から `Done` への遷移は一度だけ起こる。
/// エラー状態は持たず、検証エラーはその場で呼び出し側に返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// リクエストライン待ち
    #[default]
    Initialized,
    /// 完了
    Done,
}
