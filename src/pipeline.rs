//! Handles the block-sorting pipeline for whole files. The input is split into
//! pages, and every page goes through the block transform and then through the
//! run length filter. Decoding runs the same steps in reverse.

use crate::bwt::{forward_transform, inverse_transform};
use crate::pager::{PagerDecoder, PagerEncoder};
use crate::{rle, Context, Decoder, Encoder, Result};

/// Transform a single page and pack the result.
fn encode_page(input: &[u8], _ctx: Context) -> Result<Vec<u8>> {
    let transformed = forward_transform(input)?;
    Ok(rle::encode(&transformed))
}

/// Unpack a single page and undo the transform.
fn decode_page(input: &[u8]) -> Result<Vec<u8>> {
    let transformed = rle::decode(input)?;
    inverse_transform(&transformed)
}

pub struct BlockPipelineEncoder<'a> {
    /// The uncompressed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    /// Encoder context.
    ctx: Context,
}

pub struct BlockPipelineDecoder<'a> {
    /// The encoded input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> Encoder<'a> for BlockPipelineEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        BlockPipelineEncoder { input, output, ctx }
    }

    fn encode(&mut self) -> Result<usize> {
        let mut encoder = PagerEncoder::new(self.input, self.output, self.ctx);
        encoder.set_callback(encode_page);
        encoder.encode()
    }
}

impl<'a> Decoder<'a> for BlockPipelineDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        BlockPipelineDecoder { input, output }
    }

    fn decode(&mut self) -> Result<(usize, usize)> {
        let mut decoder = PagerDecoder::new(self.input, self.output);
        decoder.set_callback(decode_page);
        decoder.decode()
    }
}
