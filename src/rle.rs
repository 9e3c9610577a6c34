//! Implements run length encoding. This is the light post-filter that is
//! applied to the output of the block transform, which tends to group equal
//! bytes together.
//!
//! The stream is a list of (count, value) byte pairs with no header. Runs
//! that are longer than 255 bytes are split into several pairs.

use crate::{Context, Decoder, Encoder, Error, Result};

/// Iterates over the runs of equal bytes in the input, as (value, length).
pub struct RunIterator<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> RunIterator<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for RunIterator<'a> {
    type Item = (u8, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let val = *self.input.get(self.pos)?;
        let len = self.input[self.pos..]
            .iter()
            .take_while(|x| **x == val)
            .count();
        self.pos += len;
        Some((val, len))
    }
}

// A helper function for writing a run into a stream.
fn write_run(mut len: usize, val: u8, stream: &mut Vec<u8>) -> usize {
    let mut wrote = 0;
    while len > 255 {
        stream.push(255);
        stream.push(val);
        len -= 255;
        wrote += 2;
    }
    if len > 0 {
        stream.push(len as u8);
        stream.push(val);
        wrote += 2;
    }
    wrote
}

/// Encode the array and append it to 'stream'. Returns the number of bytes
/// written.
pub fn encode_into(input: &[u8], stream: &mut Vec<u8>) -> usize {
    let mut wrote = 0;
    for (val, len) in RunIterator::new(input) {
        wrote += write_run(len, val, stream);
    }
    wrote
}

pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut stream = Vec::new();
    encode_into(input, &mut stream);
    stream
}

/// Decode a stream that was written by 'encode'.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() % 2 != 0 {
        return Err(Error::MalformedRun(format!(
            "odd stream length {}",
            input.len()
        )));
    }

    let mut output = Vec::with_capacity(input.len());
    for (idx, pair) in input.chunks_exact(2).enumerate() {
        let (count, val) = (pair[0], pair[1]);
        if count == 0 {
            return Err(Error::MalformedRun(format!(
                "empty run in pair #{}",
                idx
            )));
        }
        output.resize(output.len() + count as usize, val);
    }
    Ok(output)
}

pub struct RunLengthEncoder<'a> {
    /// The uncompressed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

pub struct RunLengthDecoder<'a> {
    /// The encoded input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> Encoder<'a> for RunLengthEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, _ctx: Context) -> Self {
        Self { input, output }
    }

    fn encode(&mut self) -> Result<usize> {
        Ok(encode_into(self.input, self.output))
    }
}

impl<'a> Decoder<'a> for RunLengthDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        Self { input, output }
    }

    fn decode(&mut self) -> Result<(usize, usize)> {
        let decoded = decode(self.input)?;
        self.output.extend_from_slice(&decoded);
        Ok((self.input.len(), decoded.len()))
    }
}

#[test]
fn test_run_iterator() {
    let runs: Vec<_> = RunIterator::new(&[7, 7, 7, 1, 9, 9]).collect();
    assert_eq!(runs, vec![(7, 3), (1, 1), (9, 2)]);
    assert_eq!(RunIterator::new(&[]).count(), 0);
}
