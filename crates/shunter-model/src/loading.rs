// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Instance loader for the railway-yard sequencing domain.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `Manifest`. The input convention reserves the first token as a redundant
//! car count, followed by exactly that many car weights; the loader owns the
//! stripping and cross-checking of this framing so the search core never
//! sees the header.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.
//! Lines may contain comments introduced by `#`, which are ignored during
//! tokenization. A surplus or deficit of weight tokens relative to the
//! declared count is rejected as invalid input before any search begins.

use crate::manifest::{InvalidManifestError, Manifest};
use num_traits::{PrimInt, Signed};
use std::{
    collections::VecDeque,
    fmt::{Debug, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the manifest loading process.
#[derive(Debug)]
pub enum ManifestLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended before the declared number of weights was read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The stream content violates the manifest invariants (empty stream or
    /// count-header mismatch).
    Manifest(InvalidManifestError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl Display for ManifestLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of input while reading car weights"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Manifest(e) => write!(f, "Invalid manifest: {}", e),
        }
    }
}

impl std::error::Error for ManifestLoaderError {}

impl From<std::io::Error> for ManifestLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for ManifestLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<InvalidManifestError> for ManifestLoaderError {
    fn from(e: InvalidManifestError) -> Self {
        Self::Manifest(e)
    }
}

/// A loader for sequencing instances.
///
/// The format this parser expects is as follows (whitespace-separated
/// tokens, `#` introduces a comment running to end of line):
///
/// ```raw
/// N                 // declared number of cars
/// w_1 ... w_N       // car weights in arrival order
/// ```
///
/// The declared count is redundant framing; the loader verifies it against
/// the number of weight tokens actually present and rejects any mismatch.
///
/// # Examples
///
/// ```rust
/// # use shunter_model::loading::ManifestLoader;
///
/// let manifest = ManifestLoader::new()
///     .from_str::<i64>("4  4 5 2 1")
///     .unwrap();
/// assert_eq!(manifest.num_cars(), 4);
/// assert_eq!(manifest.weights(), &[4, 5, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
    /// Creates a new `ManifestLoader`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads a manifest from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<Manifest<T>, ManifestLoaderError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
        R: BufRead,
    {
        let mut sc = Scanner::new(rdr);

        let declared: usize = match sc.next()? {
            Some(count) => count,
            None => return Err(ManifestLoaderError::UnexpectedEof),
        };

        let mut weights = Vec::with_capacity(declared);
        for _ in 0..declared {
            match sc.next::<T>()? {
                Some(weight) => weights.push(weight),
                None => return Err(ManifestLoaderError::UnexpectedEof),
            }
        }

        // The framing is redundant on purpose: trailing weight tokens mean
        // the header lied about the count, which is invalid input.
        let mut surplus = 0usize;
        while sc.next::<T>()?.is_some() {
            surplus += 1;
        }
        if surplus > 0 {
            return Err(InvalidManifestError::CountMismatch {
                declared,
                actual: declared + surplus,
            }
            .into());
        }

        Ok(Manifest::from_framed(declared, weights)?)
    }

    /// Loads a manifest from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<Manifest<T>, ManifestLoaderError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a manifest from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Manifest<T>, ManifestLoaderError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a manifest from a string slice.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str<T>(&self, s: &str) -> Result<Manifest<T>, ManifestLoaderError>
    where
        T: PrimInt + Signed + FromStr + Display + Debug,
    {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader,
/// skipping `#` comments.
struct Scanner<R> {
    rdr: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            pending: VecDeque::new(),
        }
    }

    /// Refills the pending token queue from the next non-blank line.
    /// Returns `Ok(false)` on end of input.
    fn fill_tokens(&mut self) -> Result<bool, ManifestLoaderError> {
        let mut line = String::new();
        loop {
            line.clear();
            let n = self.rdr.read_line(&mut line).map_err(ManifestLoaderError::Io)?;
            if n == 0 {
                return Ok(false);
            }

            // Strip a trailing comment before tokenizing.
            let content = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };

            self.pending
                .extend(content.split_whitespace().map(str::to_owned));
            if !self.pending.is_empty() {
                return Ok(true);
            }
        }
    }

    /// Reads the next token and parses it into `T`.
    /// Returns `Ok(None)` once the input is exhausted.
    fn next<T>(&mut self) -> Result<Option<T>, ManifestLoaderError>
    where
        T: FromStr,
    {
        if self.pending.is_empty() && !self.fill_tokens()? {
            return Ok(None);
        }

        let token = self
            .pending
            .pop_front()
            .expect("scanner token queue refilled but empty");

        match token.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(ManifestLoaderError::Parse(ParseTokenError {
                token,
                type_name: std::any::type_name::<T>(),
            })),
        }
    }
}
