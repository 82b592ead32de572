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

//! String-level adapters over the generic scanners.
//!
//! The kernels operate on symbol slices; these helpers run them over the
//! `char`s of a `&str` and translate the resulting char-level spans back
//! into byte offsets so that slices of the original string can be returned.

use crate::{covering::CoveringScanner, unique::UniqueRunScanner};

/// Returns the length, in characters, of the longest substring of `text`
/// without repeating characters.
///
/// # Examples
///
/// ```rust
/// # use seiche_scan::text::longest_unique_substring;
///
/// assert_eq!(longest_unique_substring("abcabcbb"), 3);
/// assert_eq!(longest_unique_substring(""), 0);
/// ```
pub fn longest_unique_substring(text: &str) -> usize {
    let symbols: Vec<char> = text.chars().collect();
    UniqueRunScanner::new().scan(&symbols).len()
}

/// Returns the shortest substring of `haystack` containing at least the
/// multiset of characters in `pattern`, or `None` if no such substring
/// exists or the pattern is empty.
///
/// Callers that need to tell an empty pattern apart from "no covering
/// window" should use [`CoveringScanner`] directly; this adapter collapses
/// both to `None`.
///
/// # Examples
///
/// ```rust
/// # use seiche_scan::text::minimum_window_substring;
///
/// assert_eq!(minimum_window_substring("ADOBECODEBANC", "ABC"), Some("BANC"));
/// assert_eq!(minimum_window_substring("a", "aa"), None);
/// ```
pub fn minimum_window_substring<'a>(haystack: &'a str, pattern: &str) -> Option<&'a str> {
    let symbols: Vec<char> = haystack.chars().collect();
    let pattern_symbols: Vec<char> = pattern.chars().collect();

    let span = CoveringScanner::new()
        .scan(&symbols, &pattern_symbols)
        .span()?;

    // Map the char-level span back to byte offsets; the extra trailing
    // offset lets the exclusive end index the end of the string.
    let mut offsets: Vec<usize> = haystack.char_indices().map(|(offset, _)| offset).collect();
    offsets.push(haystack.len());
    Some(&haystack[offsets[span.start()]..offsets[span.end()]])
}
