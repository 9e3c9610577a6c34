//! An LZ78 dictionary coder with fixed 16-bit codewords.
//!
//! The stream has no header. Each codeword is written as a little endian u16
//! and the end of the input is the only framing signal.

use crate::lz::dictionary::{
    Code, DecoderDictionary, EncoderDictionary, SEED_ENTRIES,
};
use crate::{Context, Decoder, Encoder, Error, Result};

/// Encode 'input' into a list of dictionary codes.
pub fn encode_codes(input: &[u8]) -> Vec<Code> {
    let mut dict = EncoderDictionary::new();
    let mut codes = Vec::new();
    // The code of the sequence that was accumulated so far.
    let mut current: Option<Code> = None;

    for &byte in input {
        if dict.is_full() {
            log::debug!("Resetting the dictionary after {} codes", codes.len());
            // The dictionary fills up on a miss, which leaves a single byte.
            debug_assert!(current.map_or(true, |c| usize::from(c) < SEED_ENTRIES));
            dict.reset();
        }

        let prefix = match current {
            Some(prefix) => prefix,
            None => {
                current = Some(EncoderDictionary::singleton(byte));
                continue;
            }
        };

        if let Some(code) = dict.find(prefix, byte) {
            current = Some(code);
            continue;
        }

        // Learn the new sequence and emit the longest known prefix.
        dict.insert(prefix, byte);
        codes.push(prefix);
        current = Some(EncoderDictionary::singleton(byte));
    }

    if let Some(code) = current {
        codes.push(code);
    }
    codes
}

fn lookup(dict: &DecoderDictionary, code: Code, idx: usize) -> Result<&[u8]> {
    dict.get(code).ok_or_else(|| {
        Error::CorruptStream(format!(
            "code {} at index {} is not in the dictionary",
            code, idx
        ))
    })
}

/// Decode a list of dictionary codes that were generated by 'encode_codes'.
pub fn decode_codes(codes: &[Code]) -> Result<Vec<u8>> {
    let mut dict = DecoderDictionary::new();
    let mut output = Vec::new();
    let mut prev: Vec<u8> = Vec::new();

    for (idx, &code) in codes.iter().enumerate() {
        if dict.is_full() {
            log::debug!("Resetting the dictionary at code #{}", idx);
            dict.reset();
        }

        let size = dict.len();
        if code as usize > size {
            return Err(Error::CorruptStream(format!(
                "code {} at index {} is beyond the dictionary size {}",
                code, idx, size
            )));
        }

        if code as usize == size {
            // The code refers to the entry that is being defined right now.
            let first = match prev.first() {
                Some(first) => *first,
                None => {
                    return Err(Error::CorruptStream(format!(
                        "code {} at index {} has no previous sequence",
                        code, idx
                    )))
                }
            };
            let mut entry = prev.clone();
            entry.push(first);
            dict.push(entry);
        } else if !prev.is_empty() {
            let first = lookup(&dict, code, idx)?[0];
            let mut entry = std::mem::take(&mut prev);
            entry.push(first);
            dict.push(entry);
        }

        let seq = lookup(&dict, code, idx)?;
        output.extend_from_slice(seq);
        prev = seq.to_vec();
    }

    Ok(output)
}

/// An LZ78 Encoder.
pub struct LZ78Encoder<'a> {
    /// The uncompressed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> LZ78Encoder<'a> {
    fn encode_impl(&mut self) -> usize {
        let codes = encode_codes(self.input);
        self.output.reserve(codes.len() * 2);
        for code in &codes {
            self.output.extend_from_slice(&code.to_le_bytes());
        }
        codes.len() * 2
    }
}

/// An LZ78 Decoder.
pub struct LZ78Decoder<'a> {
    /// The compressed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> LZ78Decoder<'a> {
    /// Decode the input parameter. Returns the number of bytes consumed and the
    /// number of bytes written if the operation succeeded.
    fn decode_impl(&mut self) -> Result<(usize, usize)> {
        let words = self.input.chunks_exact(2);
        let dangling = words.remainder().len();
        let codes: Vec<Code> = words
            .map(|word| Code::from_le_bytes([word[0], word[1]]))
            .collect();

        let decoded = decode_codes(&codes)?;
        if dangling != 0 {
            return Err(Error::CorruptStream(format!(
                "the stream ends with a partial codeword of {} byte",
                dangling
            )));
        }

        self.output.extend_from_slice(&decoded);
        Ok((self.input.len(), decoded.len()))
    }
}

impl<'a> Encoder<'a> for LZ78Encoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, _ctx: Context) -> Self {
        Self { input, output }
    }

    fn encode(&mut self) -> Result<usize> {
        Ok(self.encode_impl())
    }
}

impl<'a> Decoder<'a> for LZ78Decoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        Self { input, output }
    }

    fn decode(&mut self) -> Result<(usize, usize)> {
        self.decode_impl()
    }
}
