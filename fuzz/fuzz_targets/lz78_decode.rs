#![no_main]

use arbcompress::lz::LZ78Decoder;
use arbcompress::Decoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decompressed: Vec<u8> = Vec::new();
    {
        let mut decoder = LZ78Decoder::new(data, &mut decompressed);
        let _ = decoder.decode();
    }
});
