//! 蓄積バッファ
//!
//! トランスポートから複数回に分けて読み取ったバイト列を蓄積する。
//! 容量を使い切ると 2 倍に拡張し、書き込み済みのデータは保持される。
//! 縮小はしない。

use crate::error::Error;

/// 初期容量 (バイト)
pub const INITIAL_CAPACITY: usize = 8;

/// 拡張可能な蓄積バッファ
///
/// `buf` の長さがそのまま容量となり、`cursor` までが書き込み済み領域。
#[derive(Debug, Clone)]
pub struct GrowableBuffer {
    buf: Vec<u8>,
    cursor: usize,
    max_capacity: usize,
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowableBuffer {
    /// 容量上限なしのバッファを作成
    pub fn new() -> Self {
        Self::with_max_capacity(usize::MAX)
    }

    /// 容量上限付きでバッファを作成
    ///
    /// 上限が初期容量より小さい場合は上限が初期容量となる。
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self {
            buf: vec![0; INITIAL_CAPACITY.min(max_capacity)],
            cursor: 0,
            max_capacity,
        }
    }

    /// 現在の容量
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// 書き込み済みバイト数
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// 書き込み済みデータがないか
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// 書き込み済み領域
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.cursor]
    }

    /// カーソル位置にデータを追記
    pub fn append(&mut self, data: &[u8]) -> Result<(), Error> {
        self.reserve(data.len())?;
        let end = self.cursor + data.len();
        self.buf[self.cursor..end].copy_from_slice(data);
        self.cursor = end;
        Ok(())
    }

    /// 未書き込み領域を取得
    ///
    /// カーソルが容量に達している場合は先に拡張するため、
    /// 返るスライスは空にならない。
    /// 書き込んだ後は `advance()` でカーソルを進めること。
    pub fn unfilled_mut(&mut self) -> Result<&mut [u8], Error> {
        if self.cursor == self.buf.len() {
            self.reserve(1)?;
        }
        Ok(&mut self.buf[self.cursor..])
    }

    /// `unfilled_mut()` に直接書き込んだバイト数だけカーソルを進める
    ///
    /// # Panics
    ///
    /// カーソルが容量を超える場合
    pub fn advance(&mut self, n: usize) {
        assert!(
            self.cursor + n <= self.buf.len(),
            "advance past capacity: {} + {} > {}",
            self.cursor,
            n,
            self.buf.len()
        );
        self.cursor += n;
    }

    /// `additional` バイト追記できるよう容量を確保する
    fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .cursor
            .checked_add(additional)
            .ok_or(Error::BufferOverflow {
                size: usize::MAX,
                limit: self.max_capacity,
            })?;
        if required <= self.buf.len() {
            return Ok(());
        }
        if required > self.max_capacity {
            return Err(Error::BufferOverflow {
                size: required,
                limit: self.max_capacity,
            });
        }

        let mut capacity = self.buf.len().max(1);
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }
        // 書き込み済みデータは resize で保持される
        self.buf.resize(capacity.min(self.max_capacity), 0);
        Ok(())
    }
}
