#![no_main]

use arbcompress::bwt::{forward_transform, inverse_transform};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(transformed) = forward_transform(data) {
        assert_eq!(transformed.len(), data.len() + 2);
        assert_eq!(inverse_transform(&transformed).unwrap(), data);
    }
});
