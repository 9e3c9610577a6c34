//! The 'PagerEncoder' and 'PagerDecoder' are responsible for taking a stream of bytes and
//! partitioning them into small blocks that are encoded and decoded individually.

use crate::utils::signatures::{
    match_signature, read32, write32, PAGER_SIG, START_PAGE_SIG,
};
use crate::{Context, Decoder, Encoder, Error, Result};

/// A callback for handling the encoding of each block.
pub type EncodeHandlerTy = fn(input: &[u8], ctx: Context) -> Result<Vec<u8>>;
/// A callback for handling the decoding of each block.
pub type DecodeHandlerTy = fn(input: &[u8]) -> Result<Vec<u8>>;

fn corrupt(msg: String) -> Error {
    Error::CorruptContainer(msg)
}

/// Splits the input stream into segments and encodes each one of them
/// independently using the registered callback.
pub struct PagerEncoder<'a> {
    /// The uncompressed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    /// A callback for encoding each block.
    callback: Option<EncodeHandlerTy>,
    /// Encoder context.
    ctx: Context,
}

impl<'a> PagerEncoder<'a> {
    /// Register a callback for handling each block.
    pub fn set_callback(&mut self, callback: EncodeHandlerTy) {
        self.callback = Some(callback)
    }

    /// Sets the size of each page in the stream.
    pub fn set_page_size(&mut self, new_size: usize) {
        self.ctx.block_size = new_size
    }

    /// Perform the encoding.
    fn encode_impl(&mut self) -> Result<usize> {
        let callback = self.callback.expect("Must set a page callback");
        if self.ctx.block_size == 0 {
            return Err(Error::InvalidBlockSize);
        }

        // An empty input is stored as zero pages.
        let parts: Vec<&'a [u8]> =
            self.input.chunks(self.ctx.block_size).collect();

        // Encode all of the pages before writing anything.
        let mut encoded = Vec::new();
        write32(parts.len() as u32, &mut encoded);
        for part in parts {
            encoded.extend(START_PAGE_SIG);
            let compressed = callback(part, self.ctx)?;
            write32(compressed.len() as u32, &mut encoded);
            encoded.extend(compressed.iter());
        }

        self.output.extend(PAGER_SIG);
        self.output.extend(&encoded);
        Ok(PAGER_SIG.len() + encoded.len())
    }
}

/// Decodes a stream that was partitioned into multiple pages.
pub struct PagerDecoder<'a> {
    /// The encoded input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    /// A callback for handling the decoding of each block.
    callback: Option<DecodeHandlerTy>,
}

impl<'a> PagerDecoder<'a> {
    /// Sets the callback for handling the decoding of each block.
    pub fn set_callback(&mut self, callback: DecodeHandlerTy) {
        self.callback = Some(callback)
    }

    /// Decode the input parameter. Returns the number of bytes consumed and the
    /// number of bytes written if the operation succeeded.
    fn decode_impl(&mut self) -> Result<(usize, usize)> {
        let callback = self.callback.expect("Must set a page callback");
        if !match_signature(self.input, &PAGER_SIG) {
            return Err(corrupt("missing the pager signature".into()));
        }
        let mut cursor = PAGER_SIG.len();
        let parts = read32(&self.input[cursor..])
            .ok_or_else(|| corrupt("missing the number of pages".into()))?;
        cursor += 4;

        let mut decoded = Vec::new();
        for part in 0..parts {
            // Read the part signature.
            if !match_signature(&self.input[cursor..], &START_PAGE_SIG) {
                return Err(corrupt(format!("bad signature for page #{}", part)));
            }
            cursor += START_PAGE_SIG.len();

            // Read the part length.
            let length = read32(&self.input[cursor..])
                .ok_or_else(|| corrupt(format!("page #{} is truncated", part)))?
                as usize;
            cursor += 4;

            let packet = self
                .input
                .get(cursor..cursor + length)
                .ok_or_else(|| corrupt(format!("page #{} overflows", part)))?;
            decoded.extend(callback(packet)?);
            cursor += length;
        }

        self.output.extend(&decoded);
        Ok((cursor, decoded.len()))
    }
}

impl<'a> Encoder<'a> for PagerEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        PagerEncoder {
            input,
            output,
            callback: None,
            ctx,
        }
    }

    fn encode(&mut self) -> Result<usize> {
        self.encode_impl()
    }
}

impl<'a> Decoder<'a> for PagerDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        PagerDecoder {
            input,
            output,
            callback: None,
        }
    }

    fn decode(&mut self) -> Result<(usize, usize)> {
        self.decode_impl()
    }
}
