//! GrowableBuffer のプロパティテスト (buffer.rs)

use proptest::prelude::*;
use shiguredo_request_line::{GrowableBuffer, INITIAL_CAPACITY};

/// 初期容量の 2 のべき乗倍のうち、`n` 以上で最小のもの
fn expected_capacity(n: usize) -> usize {
    let mut capacity = INITIAL_CAPACITY;
    while capacity < n {
        capacity *= 2;
    }
    capacity
}

fn chunks() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..40), 0..20)
}

// 容量は書き込み済みバイト数以上で、初期容量の 2 のべき乗倍のうち最小のもの
proptest! {
    #[test]
    fn capacity_is_smallest_power_of_two_multiple(chunks in chunks()) {
        let mut buffer = GrowableBuffer::new();
        let mut written = 0;
        for chunk in &chunks {
            buffer.append(chunk).unwrap();
            written += chunk.len();
            prop_assert!(buffer.capacity() >= written);
            prop_assert_eq!(buffer.capacity(), expected_capacity(written));
        }
    }
}

// 書き込んだデータは失われない
proptest! {
    #[test]
    fn appended_data_is_preserved(chunks in chunks()) {
        let mut buffer = GrowableBuffer::new();
        for chunk in &chunks {
            buffer.append(chunk).unwrap();
        }
        let expected: Vec<u8> = chunks.concat();
        prop_assert_eq!(buffer.filled(), expected.as_slice());
        prop_assert_eq!(buffer.len(), expected.len());
    }
}

// unfilled_mut + advance でも append と同じ内容になる
proptest! {
    #[test]
    fn direct_read_matches_append(chunks in chunks()) {
        let expected: Vec<u8> = chunks.concat();

        let mut buffer = GrowableBuffer::new();
        let mut offset = 0;
        while offset < expected.len() {
            let unfilled = buffer.unfilled_mut().unwrap();
            prop_assert!(!unfilled.is_empty());
            let n = unfilled.len().min(expected.len() - offset);
            unfilled[..n].copy_from_slice(&expected[offset..offset + n]);
            buffer.advance(n);
            offset += n;
        }

        prop_assert_eq!(buffer.filled(), expected.as_slice());
        prop_assert!(buffer.capacity() >= expected.len());
        // 満杯になってから拡張するため、容量は高々 2 倍に収まる
        prop_assert!(buffer.capacity() <= expected_capacity(expected.len()) * 2);
    }
}
