//! The adaptive dictionaries used by the LZ78 encoder and decoder.
//!
//! Both dictionaries start with one entry per byte value, where code 'b' maps
//! to the single byte 'b'. New entries receive the next free code. When the
//! number of entries reaches DICTIONARY_CAPACITY the next step resets the
//! dictionary back to the 256 singletons. The encoder and decoder must reset
//! at the same point in the stream, so they share the capacity constant.

use std::collections::HashMap;

/// The type of the codewords that are written to the stream.
pub type Code = u16;

/// The number of entries that a dictionary holds before it is reset.
pub const DICTIONARY_CAPACITY: usize = 1 << 16;

/// The number of singleton entries that every dictionary starts with.
pub const SEED_ENTRIES: usize = 256;

/// The encoder side dictionary. Every entry past the seed is a known prefix
/// extended by one byte, so entries are keyed by (prefix code, byte).
pub struct EncoderDictionary {
    entries: HashMap<(Code, u8), Code>,
    len: usize,
}

impl EncoderDictionary {
    pub fn new() -> Self {
        let mut dict = Self {
            entries: HashMap::new(),
            len: 0,
        };
        dict.reset();
        dict
    }

    /// Drop all of the learned entries and go back to the singletons.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.len = SEED_ENTRIES;
    }

    /// Returns the number of entries, including the singletons.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A seeded dictionary is never empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= DICTIONARY_CAPACITY
    }

    /// Returns the code of the sequence 'prefix' followed by 'byte'.
    pub fn find(&self, prefix: Code, byte: u8) -> Option<Code> {
        self.entries.get(&(prefix, byte)).copied()
    }

    /// Returns the code of the single byte 'byte'.
    pub fn singleton(byte: u8) -> Code {
        byte as Code
    }

    /// Add the sequence 'prefix' followed by 'byte' and return its code.
    pub fn insert(&mut self, prefix: Code, byte: u8) -> Code {
        assert!(!self.is_full(), "Inserting into a full dictionary");
        let code = self.len as Code;
        self.entries.insert((prefix, byte), code);
        self.len += 1;
        code
    }
}

impl Default for EncoderDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// The decoder side dictionary, indexed by code.
pub struct DecoderDictionary {
    entries: Vec<Vec<u8>>,
}

impl DecoderDictionary {
    pub fn new() -> Self {
        let mut dict = Self {
            entries: Vec::with_capacity(DICTIONARY_CAPACITY),
        };
        dict.reset();
        dict
    }

    /// Drop all of the learned entries and go back to the singletons.
    pub fn reset(&mut self) {
        self.entries.clear();
        for byte in 0..=u8::MAX {
            self.entries.push(vec![byte]);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= DICTIONARY_CAPACITY
    }

    pub fn get(&self, code: Code) -> Option<&[u8]> {
        self.entries.get(code as usize).map(|x| x.as_slice())
    }

    /// Add a new sequence and return its code.
    pub fn push(&mut self, sequence: Vec<u8>) -> Code {
        assert!(!self.is_full(), "Inserting into a full dictionary");
        self.entries.push(sequence);
        (self.entries.len() - 1) as Code
    }
}

impl Default for DecoderDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_seeded_dictionaries_agree() {
    let enc = EncoderDictionary::new();
    let dec = DecoderDictionary::new();
    assert_eq!(enc.len(), SEED_ENTRIES);
    assert_eq!(dec.len(), SEED_ENTRIES);
    for byte in 0..=u8::MAX {
        let code = EncoderDictionary::singleton(byte);
        assert_eq!(code, byte as Code);
        assert_eq!(dec.get(code).unwrap(), &[byte]);
    }
    assert!(dec.get(SEED_ENTRIES as Code).is_none());
}
