//! A collection of utilities for handling signatures and container numbers.

/// A collection of signatures for the page container, and the file
/// extensions that the command line tool uses for each algorithm.
pub mod signatures {
    pub const PAGER_SIG: [u8; 4] = [0x9a, 0x93, 0x9a, 0x93];
    pub const START_PAGE_SIG: [u8; 2] = [0x71, 75];

    pub const LZ_EXTENSION: &str = ".lz";
    pub const BWT_EXTENSION: &str = ".bwt";
    pub const RLE_EXTENSION: &str = ".rle";

    /// Return True if 'input' starts with 'signature'.
    pub fn match_signature(input: &[u8], signature: &[u8]) -> bool {
        input.starts_with(signature)
    }

    /// Write the value 'val' into 'stream'.
    pub fn write32(val: u32, stream: &mut Vec<u8>) {
        let bytes = val.to_be_bytes();
        stream.extend(bytes);
    }

    /// Try to decode a number from the input buffer.
    pub fn read32(input: &[u8]) -> Option<u32> {
        let bytes: [u8; 4] = input.get(0..4)?.try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    #[test]
    fn test_read_write32() {
        let mut stream = Vec::new();
        write32(0x01020304, &mut stream);
        assert_eq!(stream, [1, 2, 3, 4]);
        assert_eq!(read32(&stream), Some(0x01020304));
        assert_eq!(read32(&stream[1..]), None);
    }
}
