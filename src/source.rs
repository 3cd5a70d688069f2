//! Decompression-transparent byte input.
//!
//! A [`ByteSource`] hands out the decoded bytes of a file, stdin or any reader.
//! Compression is detected from the first two bytes of the stream, so nothing
//! downstream ever needs to know whether the input was compressed.
use std::fs::File;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compression")]
use bzip2::read::BzDecoder;
#[cfg(feature = "compression")]
use flate2::read::MultiGzDecoder;
#[cfg(feature = "compression")]
use xz2::read::XzDecoder;

use buffer_redux::BufReader;

use crate::errors::InfoError;

pub(crate) const BUFSIZE: usize = 64 * 1024;

// Magic bytes for each compression format
const GZ_MAGIC: [u8; 2] = [0x1F, 0x8B];
const BZ_MAGIC: [u8; 2] = [0x42, 0x5A];
const XZ_MAGIC: [u8; 2] = [0xFD, 0x37];

/// Compression format of an input stream
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Bzip2,
    Xz,
    None,
}

impl Compression {
    /// Guesses the compression from the first bytes of a stream.
    /// Anything shorter than two bytes is uncompressed.
    pub fn detect(first: &[u8]) -> Self {
        match first {
            [a, b, ..] => match [*a, *b] {
                GZ_MAGIC => Self::Gzip,
                BZ_MAGIC => Self::Bzip2,
                XZ_MAGIC => Self::Xz,
                _ => Self::None,
            },
            _ => Self::None,
        }
    }
}

/// Makes sure at least `n` bytes are buffered (unless EOF is reached first)
/// without consuming anything.
fn fill_at_least<R: Read>(reader: &mut BufReader<R>, n: usize) -> io::Result<&[u8]> {
    while reader.buffer().len() < n {
        match reader.read_into_buf() {
            Ok(0) => break,
            Ok(_) => {}
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(reader.buffer())
}

/// A forward-only stream of decoded bytes.
pub struct ByteSource {
    reader: BufReader<Box<dyn Read + Send>>,
    compression: Compression,
    path: Option<PathBuf>,
}

impl ByteSource {
    /// Opens a file, or stdin when the path is `-`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, InfoError> {
        let path = path.as_ref();
        if path == Path::new("-") {
            return Self::stdin();
        }
        let f = File::open(path).map_err(|e| InfoError::new_open(path, &e))?;
        Self::build(Box::new(f), Some(path.to_path_buf()))
    }

    pub fn stdin() -> Result<Self, InfoError> {
        Self::build(Box::new(io::stdin()), Some(PathBuf::from("-")))
    }

    /// Wraps an arbitrary reader, detecting compression the same way as for files.
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Result<Self, InfoError> {
        Self::build(Box::new(reader), None)
    }

    fn build(inner: Box<dyn Read + Send>, path: Option<PathBuf>) -> Result<Self, InfoError> {
        let mut raw = BufReader::with_capacity(BUFSIZE, inner);
        let compression = match fill_at_least(&mut raw, 2) {
            Ok(first) => Compression::detect(first),
            Err(e) => {
                return Err(match &path {
                    Some(p) => InfoError::new_open(p, &e),
                    None => e.into(),
                })
            }
        };
        log::debug!(
            "opened {} ({:?} compression)",
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| String::from("<stream>")),
            compression
        );

        let decoded: Box<dyn Read + Send> = match compression {
            #[cfg(feature = "compression")]
            Compression::Gzip => Box::new(MultiGzDecoder::new(raw)),
            #[cfg(feature = "compression")]
            Compression::Bzip2 => Box::new(BzDecoder::new(raw)),
            #[cfg(feature = "compression")]
            Compression::Xz => Box::new(XzDecoder::new(raw)),
            _ => Box::new(raw),
        };

        Ok(Self {
            reader: BufReader::with_capacity(BUFSIZE, decoded),
            compression,
            path,
        })
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// The path this source was opened from, `-` for stdin and `None` for a bare reader.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the next decoded byte, or `None` at the end of the stream.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buf) => match buf.first() {
                    Some(&b) => break b,
                    None => return Ok(None),
                },
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };
        self.reader.consume(1);
        Ok(Some(byte))
    }

    /// Feeds every decoded chunk to `f` until the end of the stream and returns
    /// the total number of decoded bytes.
    pub fn for_each_chunk<F: FnMut(&[u8])>(&mut self, mut f: F) -> io::Result<u64> {
        let mut total = 0;
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            let n = buf.len();
            log::trace!("decoded chunk of {} bytes", n);
            f(buf);
            self.reader.consume(n);
            total += n as u64;
        }
        Ok(total)
    }

    pub(crate) fn read_error(&self, err: io::Error) -> InfoError {
        match &self.path {
            Some(p) => InfoError::new_read(p, &err),
            None => err.into(),
        }
    }
}
