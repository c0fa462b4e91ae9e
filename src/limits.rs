/// デコーダーの制限設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderLimits {
    /// 最大バッファサイズ (デフォルト: 64KB)
    ///
    /// 蓄積バッファの容量がこの値を超えて拡張されることはない。
    /// 終端 (CRLF) を送らない接続がメモリを消費し続けるのを防ぐ。
    pub max_buffer_size: usize,
}

impl Default for DecoderLimits {
    fn default() -> Self {
        Self {
            max_buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl DecoderLimits {
    /// 制限なしの設定を作成
    pub fn unlimited() -> Self {
        Self {
            max_buffer_size: usize::MAX,
        }
    }
}
