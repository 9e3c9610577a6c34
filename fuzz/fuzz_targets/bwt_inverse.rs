#![no_main]

use arbcompress::pipeline::BlockPipelineDecoder;
use arbcompress::{bwt, Decoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = bwt::inverse_transform(data);
    let mut output = Vec::new();
    let _ = BlockPipelineDecoder::new(data, &mut output).decode();
});
