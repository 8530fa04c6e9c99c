use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

use tracing::{debug, error, warn};

use crate::errors::errors::{Error, ErrorImpl};

/// Forward-only character reader over a byte stream.
///
/// A source whose file could not be opened starts out exhausted. Once the
/// end has been reached, or a read has failed, every later call to
/// [`CharacterSource::read_next`] returns `Ok(None)`.
pub struct CharacterSource<R> {
    input: Option<R>,
    at_end: bool,
}

impl CharacterSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        match File::open(path) {
            Ok(file) => {
                debug!(path = %path.display(), "opened source");
                CharacterSource::new(BufReader::new(file))
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not open source, nothing to scan");
                CharacterSource::exhausted()
            }
        }
    }
}

impl<R: Read> CharacterSource<R> {
    pub fn new(input: R) -> Self {
        CharacterSource {
            input: Some(input),
            at_end: false,
        }
    }

    pub fn exhausted() -> Self {
        CharacterSource {
            input: None,
            at_end: true,
        }
    }

    pub fn at_end(&self) -> bool {
        self.at_end
    }

    /// Decodes the next UTF-8 scalar value, pulling only the bytes it spans.
    pub fn read_next(&mut self) -> Result<Option<char>, Error> {
        match self.decode_next() {
            Ok(Some(c)) => Ok(Some(c)),
            Ok(None) => {
                self.finish();
                Ok(None)
            }
            Err(err) => {
                error!(error = %err, "source read failed");
                self.finish();
                Err(err)
            }
        }
    }

    fn finish(&mut self) {
        self.at_end = true;
        self.input = None;
    }

    fn decode_next(&mut self) -> Result<Option<char>, Error> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(invalid_encoding(&[lead])),
        };

        let mut bytes = [lead, 0, 0, 0];
        for i in 1..width {
            match self.read_byte()? {
                Some(byte) => bytes[i] = byte,
                None => return Err(invalid_encoding(&bytes[..i])),
            }
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|decoded| decoded.chars().next())
            .map(Some)
            .ok_or_else(|| invalid_encoding(&bytes[..width]))
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let Some(input) = self.input.as_mut() else {
            return Ok(None);
        };

        let mut buf = [0u8; 1];
        loop {
            match input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

fn invalid_encoding(bytes: &[u8]) -> Error {
    Error::new(ErrorImpl::InvalidEncoding {
        bytes: bytes.to_vec(),
    })
}
