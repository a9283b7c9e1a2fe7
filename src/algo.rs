//! Natural-order comparison and the decorate/sort/undecorate pipeline.
//!
//! This module implements:
//! - **Chunk comparison**: digits before text, numeric magnitude, sign and zero-padding tie-breaks.
//! - **String comparison**: lock-step walk over two chunk sequences.
//! - **Sorting**: keys are extracted once per element, tokenized, stable-sorted, and the
//!   originals are permuted into the resulting order.
//!
//! The main entry points are [`natural_sort`], [`natural_sort_mut`] and [`natural_sort_indices`].

use crate::core::{Accessor, Chunk, ChunkKind, KeyAccessor, Keyed, tokenize};
use crate::options::SortOptions;
use std::borrow::Cow;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Where a signed digit run falls on the number line, coarsest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Negative,
    NegativeZero,
    NonNegative,
}

/// Splits a digit run into its zero-padding count and significant digits.
///
/// An all-zero run keeps one significant `0`, so `"000"` is `(2, "0")`.
#[inline]
fn split_padding(digits: &str) -> (usize, &str) {
    let zeros = digits.bytes().take_while(|&b| b == b'0').count();
    let padding = if zeros == digits.len() {
        zeros.saturating_sub(1)
    } else {
        zeros
    };
    (padding, &digits[padding..])
}

/// Compares two significant digit strings by numeric magnitude.
#[inline]
fn compare_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_digits(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    let (pad_a, mag_a) = split_padding(a.text());
    let (pad_b, mag_b) = split_padding(b.text());
    let negative = a.sign.is_negative();

    let class = |chunk: &Chunk<'_>, magnitude: &str| match (chunk.sign.is_negative(), magnitude) {
        (false, _) => Class::NonNegative,
        (true, "0") => Class::NegativeZero,
        (true, _) => Class::Negative,
    };
    let class_a = class(a, mag_a);
    let class_b = class(b, mag_b);

    class_a
        .cmp(&class_b)
        .then_with(|| match class_a {
            Class::Negative => compare_magnitude(mag_b, mag_a),
            Class::NegativeZero => Ordering::Equal,
            Class::NonNegative => compare_magnitude(mag_a, mag_b),
        })
        // Same class here, so both chunks share `negative`.
        .then_with(|| {
            if negative {
                pad_a.cmp(&pad_b)
            } else {
                pad_b.cmp(&pad_a)
            }
        })
}

/// Compares two chunks at the same position.
///
/// 1. A digit run is less than a text run.
/// 2. Text runs compare by code point; a strict prefix is less.
/// 3. Digit runs compare by signed value, with negative zero between the
///    negative numbers and zero. Equal values are ordered by zero-padding:
///    more padding first for non-negative runs (`"002"`, `"02"`, `"2"`),
///    less padding first for negative runs (`"-2"`, `"-02"`, `"-002"`).
///
/// # Examples
///
/// ```
/// use alphanum::core::tokenize;
/// use alphanum::algo::compare_chunks;
/// use std::cmp::Ordering;
///
/// let a = tokenize("002", false);
/// let b = tokenize("2", false);
/// assert_eq!(compare_chunks(&a[0], &b[0]), Ordering::Less);
/// ```
pub fn compare_chunks(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    match (a.kind, b.kind) {
        (ChunkKind::Digits, ChunkKind::Text) => Ordering::Less,
        (ChunkKind::Text, ChunkKind::Digits) => Ordering::Greater,
        (ChunkKind::Text, ChunkKind::Text) => a.text().cmp(b.text()),
        (ChunkKind::Digits, ChunkKind::Digits) => compare_digits(a, b),
    }
}

/// Compares two tokenized keys chunk by chunk.
///
/// The first non-equal chunk decides. If one sequence is a prefix of the
/// other, the shorter one is less.
pub fn compare_chunk_slices(left: &[Chunk<'_>], right: &[Chunk<'_>]) -> Ordering {
    for (a, b) in left.iter().zip(right) {
        match compare_chunks(a, b) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    left.len().cmp(&right.len())
}

/// Compares two strings in natural order.
///
/// # Examples
///
/// ```
/// use alphanum::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("img2.png", "img10.png", false), Ordering::Less);
/// assert_eq!(compare("-5", "3", true), Ordering::Less);
/// assert_eq!(compare("-5", "3", false), Ordering::Greater);
/// ```
pub fn compare(a: &str, b: &str, sign_aware: bool) -> Ordering {
    compare_chunk_slices(&tokenize(a, sign_aware), &tokenize(b, sign_aware))
}

/// A natural-order comparator bound to one set of options.
///
/// Captures `sign` and `insensitive` from [`SortOptions`] so it can be passed
/// to `sort_by` and friends. Keys are re-tokenized on every call; prefer the
/// sort functions in this module for whole collections.
///
/// # Examples
///
/// ```
/// use alphanum::{NaturalComparator, SortOptions};
///
/// let cmp = NaturalComparator::new(&SortOptions::new().with_insensitive(true));
/// let mut data = vec!["b10", "B2", "a1"];
/// data.sort_by(|a, b| cmp.compare(a, b));
/// assert_eq!(data, vec!["a1", "B2", "b10"]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalComparator {
    sign_aware: bool,
    insensitive: bool,
}

impl NaturalComparator {
    pub fn new(options: &SortOptions) -> Self {
        NaturalComparator {
            sign_aware: options.sign,
            insensitive: options.insensitive,
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let a = fold_case(Cow::Borrowed(a), self.insensitive);
        let b = fold_case(Cow::Borrowed(b), self.insensitive);
        compare(&a, &b, self.sign_aware)
    }
}

#[inline]
fn fold_case(key: Cow<'_, str>, insensitive: bool) -> Cow<'_, str> {
    if insensitive {
        Cow::Owned(key.to_lowercase())
    } else {
        key
    }
}

/// Comparison keys of one element, in source order.
type KeyPair<'k> = (Cow<'k, str>, Option<Cow<'k, str>>);

/// An element reference paired with its tokenized keys.
struct Decorated<'k> {
    index: usize,
    primary: Vec<Chunk<'k>>,
    secondary: Option<Vec<Chunk<'k>>>,
}

#[inline]
fn compare_decorated(a: &Decorated<'_>, b: &Decorated<'_>) -> Ordering {
    match compare_chunk_slices(&a.primary, &b.primary) {
        Ordering::Equal => match (&a.secondary, &b.secondary) {
            (Some(left), Some(right)) => compare_chunk_slices(left, right),
            _ => Ordering::Equal,
        },
        other => other,
    }
}

/// Tokenizes `keys`, stable-sorts them and returns the resulting order of indices.
fn sort_keys(keys: &[KeyPair<'_>], options: &SortOptions) -> Vec<usize> {
    let mut decorated: Vec<Decorated<'_>> = keys
        .iter()
        .enumerate()
        .map(|(index, (primary, secondary))| Decorated {
            index,
            primary: tokenize(primary, options.sign),
            secondary: secondary.as_deref().map(|key| tokenize(key, options.sign)),
        })
        .collect();

    decorated.sort_by(compare_decorated);

    let mut indices: Vec<usize> = decorated.into_iter().map(|d| d.index).collect();
    if options.reverse {
        indices.reverse();
    }
    indices
}

fn log_sort(len: usize, options: &SortOptions) {
    debug!(
        len,
        sign = options.sign,
        insensitive = options.insensitive,
        reverse = options.reverse,
        sort_by = ?options.sort_by,
        sort_by_secondary = ?options.sort_by_secondary,
        "natural sort"
    );
}

/// Performs an index-based natural sort on the provided collection.
///
/// This function does not modify the input collection. Instead, it returns a
/// `Vec<usize>` containing the indices that order the collection according
/// to `options`. The sort is stable before `options.reverse` is applied.
///
/// # Examples
///
/// ```
/// use alphanum::{natural_sort_indices, SortOptions};
///
/// let data = vec!["img12.png", "img10.png", "img2.png", "img1.png"];
/// let indices = natural_sort_indices(&data, &SortOptions::default());
///
/// assert_eq!(indices, vec![3, 2, 1, 0]);
/// ```
pub fn natural_sort_indices<P: KeyAccessor + ?Sized>(
    provider: &P,
    options: &SortOptions,
) -> Vec<usize> {
    let len = provider.len();
    if len < 2 {
        trace!(len, "nothing to sort");
        return (0..len).collect();
    }
    log_sort(len, options);

    let primary = Accessor::from_option(options.sort_by.as_deref());
    let secondary = options.sort_by_secondary.as_deref().map(Accessor::Field);

    let keys: Vec<KeyPair<'_>> = (0..len)
        .map(|index| {
            let item = provider.get(index);
            (
                fold_case(primary.resolve(item), options.insensitive),
                secondary.map(|accessor| fold_case(accessor.resolve(item), options.insensitive)),
            )
        })
        .collect();

    sort_keys(&keys, options)
}

/// Sorts a mutable slice in place in natural order.
///
/// Computes the order with [`natural_sort_indices`] and then applies the
/// permutation with swaps, so `T` does not need to be `Clone`.
///
/// # Examples
///
/// ```
/// use alphanum::{natural_sort_mut, SortOptions};
///
/// let mut data = vec!["5", "10", "5", "00", "01", "05", "0", "8", "1"];
/// natural_sort_mut(&mut data, &SortOptions::default());
///
/// assert_eq!(data, vec!["00", "0", "01", "1", "05", "5", "5", "8", "10"]);
/// ```
pub fn natural_sort_mut<T: Keyed>(data: &mut [T], options: &SortOptions) {
    let indices = natural_sort_indices(&*data, options);
    apply_permutation(data, indices);
}

/// Sorts a vector in natural order and returns it.
///
/// # Examples
///
/// ```
/// use alphanum::{natural_sort, SortOptions};
///
/// let sorted = natural_sort(vec![-1, -20, 3], &SortOptions::new().with_sign(true));
/// assert_eq!(sorted, vec![-20, -1, 3]);
/// ```
pub fn natural_sort<T: Keyed>(mut data: Vec<T>, options: &SortOptions) -> Vec<T> {
    natural_sort_mut(&mut data, options);
    data
}

/// Sorts a mutable slice in place using a closure as the key accessor.
///
/// The closure result is the primary key; `sort_by` and `sort_by_secondary`
/// are not consulted. `sign`, `insensitive` and `reverse` apply as usual.
///
/// # Examples
///
/// ```
/// use alphanum::{natural_sort_by_key, SortOptions};
///
/// let mut files = vec![("img10.png", 3), ("img2.png", 1)];
/// natural_sort_by_key(&mut files, |(name, _)| *name, &SortOptions::default());
///
/// assert_eq!(files, vec![("img2.png", 1), ("img10.png", 3)]);
/// ```
pub fn natural_sort_by_key<T, K, F>(data: &mut [T], mut key: F, options: &SortOptions)
where
    K: AsRef<str>,
    F: FnMut(&T) -> K,
{
    let len = data.len();
    if len < 2 {
        trace!(len, "nothing to sort");
        return;
    }
    log_sort(len, options);

    let keys: Vec<KeyPair<'static>> = data
        .iter()
        .map(|item| {
            let primary = Cow::Owned(key(item).as_ref().to_owned());
            (fold_case(primary, options.insensitive), None)
        })
        .collect();

    let indices = sort_keys(&keys, options);
    apply_permutation(data, indices);
}

/// Reorders `data` so that position `i` holds the element previously at `indices[i]`.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}
