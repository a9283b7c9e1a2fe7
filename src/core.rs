//! Core traits and types for alphanum.
//!
//! This module defines:
//! - [`Chunk`]: A typed segment of a key (digit run or text run).
//! - [`tokenize`]: Splits a key into chunks.
//! - [`Keyed`]: The main trait users implement to sort their custom types.
//! - [`Accessor`]: Resolves a whole-value or named-field key from a [`Keyed`] value.

use std::borrow::Cow;
use std::collections::VecDeque;

/// Key produced for a named field that the element does not have.
pub const MISSING_KEY: &str = "undefined";

/// Kind of a [`Chunk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// A run of ASCII digits, possibly with a bound sign.
    Digits,
    /// Any other maximal run of characters.
    Text,
}

/// Sign bound to a digit run.
///
/// Only produced by sign-aware tokenization. `Unsigned` and `Plus` both
/// behave as a positive sign when comparing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Unsigned,
    Plus,
    Minus,
}

impl Sign {
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Minus
    }
}

/// A typed segment of a tokenized key.
///
/// `span` is the exact slice of the source consumed by this chunk. For a
/// signed digit run it includes the leading `+`/`-`, which is not part of
/// [`Chunk::text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub kind: ChunkKind,
    pub sign: Sign,
    span: &'a str,
}

impl<'a> Chunk<'a> {
    pub(crate) fn text_run(span: &'a str) -> Self {
        Chunk {
            kind: ChunkKind::Text,
            sign: Sign::Unsigned,
            span,
        }
    }

    pub(crate) fn digit_run(span: &'a str, sign: Sign) -> Self {
        Chunk {
            kind: ChunkKind::Digits,
            sign,
            span,
        }
    }

    /// Returns the slice of the source string this chunk consumed.
    #[inline]
    pub fn span(&self) -> &'a str {
        self.span
    }

    /// Returns the chunk's own text: the digits of a signed run without its sign.
    #[inline]
    pub fn text(&self) -> &'a str {
        match self.sign {
            Sign::Unsigned => self.span,
            // Sign characters are single-byte ASCII.
            Sign::Plus | Sign::Minus => &self.span[1..],
        }
    }

    #[inline]
    pub fn is_digits(&self) -> bool {
        self.kind == ChunkKind::Digits
    }
}

#[inline(always)]
fn is_sign(byte: u8) -> bool {
    byte == b'+' || byte == b'-'
}

/// Returns `true` if a sign at `pos` binds to the digit run right after it.
#[inline(always)]
fn binds_sign(bytes: &[u8], pos: usize) -> bool {
    is_sign(bytes[pos]) && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit)
}

/// Splits `s` into alternating digit and text chunks.
///
/// Digit runs are ASCII `0`-`9` only. With `sign_aware`, a `+` or `-` that is
/// immediately followed by a digit becomes the sign of that digit run; any
/// other `+`/`-` stays text.
///
/// The spans of the returned chunks concatenate back to `s`.
///
/// # Examples
///
/// ```
/// use alphanum::core::{tokenize, ChunkKind, Sign};
///
/// let chunks = tokenize("img-12.png", true);
/// let spans: Vec<&str> = chunks.iter().map(|c| c.span()).collect();
/// assert_eq!(spans, vec!["img", "-12", ".png"]);
/// assert_eq!(chunks[1].kind, ChunkKind::Digits);
/// assert_eq!(chunks[1].sign, Sign::Minus);
/// assert_eq!(chunks[1].text(), "12");
/// ```
pub fn tokenize(s: &str, sign_aware: bool) -> Vec<Chunk<'_>> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut chunks = Vec::new();
    let mut pos = 0;

    // Every split point sits next to an ASCII byte, so slicing is always on a
    // char boundary.
    while pos < len {
        let start = pos;

        if bytes[pos].is_ascii_digit() || (sign_aware && binds_sign(bytes, pos)) {
            let sign = match bytes[pos] {
                b'+' => Sign::Plus,
                b'-' => Sign::Minus,
                _ => Sign::Unsigned,
            };
            if sign != Sign::Unsigned {
                pos += 1;
            }
            while pos < len && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            chunks.push(Chunk::digit_run(&s[start..pos], sign));
        } else {
            pos += 1;
            while pos < len
                && !bytes[pos].is_ascii_digit()
                && !(sign_aware && binds_sign(bytes, pos))
            {
                pos += 1;
            }
            chunks.push(Chunk::text_run(&s[start..pos]));
        }
    }

    chunks
}

/// A trait for producing comparison keys from a value.
///
/// `key` is the string form of the whole value. `field` is the string form of
/// a named member, or `None` when the value has no such member; the sort
/// pipeline substitutes [`MISSING_KEY`] for `None`.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use std::borrow::Cow;
/// use alphanum::core::Keyed;
///
/// struct Track {
///     title: String,
///     number: u32,
/// }
///
/// impl Keyed for Track {
///     fn key(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.title)
///     }
///
///     fn field(&self, name: &str) -> Option<Cow<'_, str>> {
///         match name {
///             "title" => Some(Cow::Borrowed(&self.title)),
///             "number" => Some(Cow::Owned(self.number.to_string())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Keyed {
    /// Returns the string form of the whole value.
    fn key(&self) -> Cow<'_, str>;

    /// Returns the string form of the field `name`, if the value has one.
    fn field(&self, _name: &str) -> Option<Cow<'_, str>> {
        None
    }
}

/// Selects which string form of a [`Keyed`] value is compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accessor<'a> {
    /// Compare the whole value.
    #[default]
    Whole,
    /// Compare a named field.
    Field(&'a str),
}

impl<'a> Accessor<'a> {
    /// Builds an accessor from an optional field name.
    pub fn from_option(name: Option<&'a str>) -> Self {
        name.map_or(Accessor::Whole, Accessor::Field)
    }

    /// Resolves the key of `value`, using [`MISSING_KEY`] for absent fields.
    pub fn resolve<'v, T: Keyed + ?Sized>(&self, value: &'v T) -> Cow<'v, str> {
        match self {
            Accessor::Whole => value.key(),
            Accessor::Field(name) => value
                .field(name)
                .unwrap_or(Cow::Borrowed(MISSING_KEY)),
        }
    }
}

impl Keyed for str {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Keyed for String {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Keyed for Cow<'_, str> {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl Keyed for char {
    fn key(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl Keyed for bool {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    fn key(&self) -> Cow<'_, str> {
        (**self).key()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
    fn key(&self) -> Cow<'_, str> {
        (**self).key()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

macro_rules! keyed_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Keyed for $t {
                fn key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

keyed_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Index-based access to a collection of [`Keyed`] elements.
///
/// Lets the sort pipeline work over any randomly indexable collection
/// without copying elements.
pub trait KeyAccessor {
    type Item: Keyed + ?Sized;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Keyed> KeyAccessor for [T] {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: Keyed> KeyAccessor for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// O(1) random access, so it is suitable for index-based sorting.
impl<T: Keyed> KeyAccessor for VecDeque<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}
