#![no_main]

use arbcompress::lz::{LZ78Decoder, LZ78Encoder};
use arbcompress::{Context, Decoder, Encoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut compressed: Vec<u8> = Vec::new();

    {
        let mut encoder =
            LZ78Encoder::new(data, &mut compressed, Context::default());
        let written = encoder.encode().unwrap();
        assert_eq!(written, compressed.len());
    }

    let mut decompressed: Vec<u8> = Vec::new();
    {
        let mut decoder = LZ78Decoder::new(&compressed, &mut decompressed);
        let (consumed, written) = decoder.decode().unwrap();
        assert_eq!(consumed, compressed.len());
        assert_eq!(written, decompressed.len());
    }
    assert_eq!(decompressed, data);
});
