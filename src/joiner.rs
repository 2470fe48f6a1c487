//! Streaming delimited-string builder

use crate::error::JoinError;
use crate::options::{JoinerOption, JoinerOptions};
use std::fmt;
use std::io;

/// Join string parts with `options` in one call.
///
/// Equivalent to feeding every part through [`Joiner::write_str`] on a fresh joiner.
pub fn join<I, S>(parts: I, options: &JoinerOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joiner = Joiner::with_options(options.clone());
    joiner.extend(parts);
    joiner.into_string()
}

/// Builds a sequence of parts separated by a step, optionally starting with a
/// prefix and ending with a suffix.
///
/// The step is written before every part except the first one written since
/// construction or the last [`reset`](Joiner::reset). Prefix and suffix never
/// enter the buffer; they are added when rendering and counted by
/// [`len`](Joiner::len) and [`cap`](Joiner::cap).
///
/// ```rust
/// use strjoin_rs::{with_joiner, Joiner};
///
/// let mut joiner = Joiner::new([with_joiner("[", ",", "]")]);
/// joiner.write_str("a");
/// joiner.write_char('b');
/// joiner.write_bytes(b"c");
/// assert_eq!(joiner.to_string(), "[a,b,c]");
/// assert_eq!(joiner.len(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Joiner {
    options: JoinerOptions,
    buf: Option<Vec<u8>>,
    /// Length of prefix plus suffix
    n: usize,
    written: bool,
}

impl Joiner {
    /// Create a joiner from a list of options applied left to right.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = JoinerOption>,
    {
        Self::with_options(JoinerOptions::from_options(options))
    }

    /// Create a joiner from finished options.
    pub fn with_options(options: JoinerOptions) -> Self {
        let n = options.prefix.len() + options.suffix.len();
        Self {
            options,
            buf: None,
            n,
            written: false,
        }
    }

    pub fn options(&self) -> &JoinerOptions {
        &self.options
    }

    /// Appends the UTF-8 encoding of `c`. Returns its encoded length.
    pub fn write_char(&mut self, c: char) -> usize {
        let mut tmp = [0u8; 4];
        self.write_bytes(c.encode_utf8(&mut tmp).as_bytes())
    }

    /// Appends `s`. Returns `s.len()`.
    pub fn write_str(&mut self, s: &str) -> usize {
        self.write_bytes(s.as_bytes())
    }

    /// Appends a single raw byte.
    pub fn write_byte(&mut self, b: u8) {
        self.start_part().push(b);
    }

    /// Appends `p`. Returns `p.len()`.
    pub fn write_bytes(&mut self, p: &[u8]) -> usize {
        self.start_part().extend_from_slice(p);
        p.len()
    }

    /// Writes the pending step, if any, and hands back the buffer for the new part.
    fn start_part(&mut self) -> &mut Vec<u8> {
        let buf = self.buf.get_or_insert_with(Vec::new);
        if self.written {
            buf.extend_from_slice(self.options.step.as_bytes());
        }
        self.written = true;
        buf
    }

    /// Grows the buffer, if necessary, so that another `additional` bytes can
    /// be written without reallocating. Allocates the buffer if it does not
    /// exist yet; does not count as a write.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes.
    pub fn grow(&mut self, additional: usize) {
        self.buf.get_or_insert_with(Vec::new).reserve(additional);
    }

    /// Like [`grow`](Joiner::grow), but reports allocation failure instead of panicking.
    pub fn try_grow(&mut self, additional: usize) -> Result<(), JoinError> {
        self.buf
            .get_or_insert_with(Vec::new)
            .try_reserve(additional)
            .map_err(|_| JoinError::AllocationFailed {
                requested: additional,
            })
    }

    /// Capacity of the buffer plus the length of prefix and suffix.
    pub fn cap(&self) -> usize {
        match &self.buf {
            Some(buf) => buf.capacity() + self.n,
            None => self.n,
        }
    }

    /// Length of the rendered output, prefix and suffix included.
    pub fn len(&self) -> usize {
        match &self.buf {
            Some(buf) => buf.len() + self.n,
            None => self.n,
        }
    }

    /// True when the rendered output would be empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears written parts. Options and the buffer allocation are kept, and
    /// the next write is treated as the first one.
    pub fn reset(&mut self) {
        if let Some(buf) = &mut self.buf {
            buf.clear();
        }
        self.written = false;
    }

    fn body(&self) -> &[u8] {
        self.buf.as_deref().unwrap_or_default()
    }

    /// The exact rendered bytes: prefix, parts and suffix.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.options.prefix.as_bytes());
        out.extend_from_slice(self.body());
        out.extend_from_slice(self.options.suffix.as_bytes());
        out
    }

    /// Renders the output, failing if raw byte writes left it invalid UTF-8.
    pub fn try_to_string(&self) -> Result<String, JoinError> {
        String::from_utf8(self.to_bytes()).map_err(|e| JoinError::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }

    /// Consumes the joiner and renders it. Invalid UTF-8 is replaced with U+FFFD.
    pub fn into_string(self) -> String {
        String::from_utf8(self.to_bytes())
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.options.prefix)?;
        f.write_str(&String::from_utf8_lossy(self.body()))?;
        f.write_str(&self.options.suffix)
    }
}

impl From<Joiner> for String {
    fn from(joiner: Joiner) -> String {
        joiner.into_string()
    }
}

/// Each call is one part; a whole `write!` invocation is one part.
impl fmt::Write for Joiner {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Joiner::write_str(self, s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        Joiner::write_char(self, c);
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        Joiner::write_str(self, &args.to_string());
        Ok(())
    }
}

impl io::Write for Joiner {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.write_bytes(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_str(&args.to_string());
        Ok(())
    }
}

impl<S: AsRef<str>> Extend<S> for Joiner {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for part in iter {
            self.write_str(part.as_ref());
        }
    }
}
