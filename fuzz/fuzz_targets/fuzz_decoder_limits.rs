#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_request_line::{DecoderLimits, Error, RequestLineDecoder};

#[derive(Arbitrary, Debug)]
struct FuzzLimits {
    max_buffer_size: u16,
    chunks: Vec<Vec<u8>>,
}

fuzz_target!(|input: FuzzLimits| {
    let limits = DecoderLimits {
        max_buffer_size: input.max_buffer_size as usize,
    };
    let mut decoder = RequestLineDecoder::with_limits(limits.clone());

    for chunk in &input.chunks {
        match decoder.feed(chunk) {
            Ok(()) => {}
            Err(Error::BufferOverflow { limit, .. }) => {
                assert_eq!(limit, limits.max_buffer_size);
                break;
            }
            Err(e) => panic!("unexpected feed error: {e}"),
        }
        assert!(decoder.capacity() <= limits.max_buffer_size);
        assert!(decoder.buffered().len() <= limits.max_buffer_size);

        match decoder.decode() {
            Ok(Some(_)) | Err(_) => break,
            Ok(None) => {}
        }
    }
});
