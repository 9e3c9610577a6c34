pub mod bwt;
pub mod lz;
pub mod pager;
pub mod pipeline;
pub mod rle;
pub mod utils;

/// The default number of input bytes that are transformed together by the
/// block pipeline.
pub const DEFAULT_BLOCK_SIZE: usize = 1 << 20;

/// Stores information about the environment.
#[derive(Copy, Clone, Debug)]
pub struct Context {
    /// Specifies the size of each block.
    block_size: usize,
}

impl Context {
    pub fn new(block_size: usize) -> Self {
        Self { block_size }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE)
    }
}

/// Errors that are reported by the encoders and decoders in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A codeword referenced an entry that the dictionary does not have, or
    /// the stream ended in the middle of a codeword.
    #[error("corrupt codeword stream: {0}")]
    CorruptStream(String),
    /// The input of the block transform contains a reserved sentinel byte.
    #[error("input byte {byte:#04x} at offset {offset} is a reserved sentinel")]
    InputConflict {
        /// The offending byte value.
        byte: u8,
        /// Position of the byte in the input.
        offset: usize,
    },
    /// The input of the inverse block transform is not the output of the
    /// forward transform.
    #[error("malformed block transform: {0}")]
    MalformedTransform(String),
    /// The run-length stream is truncated or contains an empty run.
    #[error("malformed run-length stream: {0}")]
    MalformedRun(String),
    /// Input can't be split into pages of zero bytes.
    #[error("the block size must be positive")]
    InvalidBlockSize,
    /// The page container has a bad signature or an impossible length.
    #[error("corrupt container: {0}")]
    CorruptContainer(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A trait that defines the interface for encoding buffers.
pub trait Encoder<'a> {
    /// Creates a new Encoder that reads from 'input' and writes into 'output',
    /// with the encoder context 'ctx'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self;

    /// Encode the whole input buffer and return the number of bytes that were
    /// written into the output stream.
    fn encode(&mut self) -> Result<usize>;
}

/// A trait that defines the interface for decoding buffers.
pub trait Decoder<'a> {
    /// Creates a new Decoder that reads from 'input' and writes into 'output'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self;

    /// Try to decode the buffer 'input', and return the number of input bytes
    /// that were consumed followed by the number of bytes written. Nothing is
    /// written into the output if the input is invalid.
    fn decode(&mut self) -> Result<(usize, usize)>;
}
