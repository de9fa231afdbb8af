//! String helpers used to break a command line into tokens.

use crate::constant::{FLAG_MARKER, QUOTE};

/// Whether [`split`] keeps empty segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitOptions {
    /// Keep every segment, including empty ones.
    #[default]
    None,
    /// Drop the empty segments.
    RemoveEmptyEntries,
}

/// Split `value` on any of the `delimiters`.
///
/// At each position the first delimiter (in the order given) that matches is consumed.
/// Empty delimiters are ignored.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::text::{split, SplitOptions};
///
/// assert_eq!(split("one,two;three", &[",", ";"], SplitOptions::None), vec!["one", "two", "three"]);
/// assert_eq!(split("a  b", &[" "], SplitOptions::RemoveEmptyEntries), vec!["a", "b"]);
/// ```
pub fn split<'s>(value: &'s str, delimiters: &[&str], options: SplitOptions) -> Vec<&'s str> {
    let mut segments = Vec::default();
    let mut start = 0;
    let mut index = 0;

    while index < value.len() {
        let rest = &value[index..];

        match delimiters
            .iter()
            .find(|delimiter| !delimiter.is_empty() && rest.starts_with(**delimiter))
        {
            Some(delimiter) => {
                segments.push(&value[start..index]);
                index += delimiter.len();
                start = index;
            }
            None => {
                index += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    segments.push(&value[start..]);

    if options == SplitOptions::RemoveEmptyEntries {
        segments.retain(|segment| !segment.is_empty());
    }

    segments
}

/// Split `value` into the segments outside and inside of `quote` pairs.
///
/// Segments alternate, starting with an unquoted one (which may be empty).
/// An unterminated quote runs until the end of `value`.
pub fn quoted_segments<'s>(value: &'s str, quote: &str) -> Vec<Segment<'s>> {
    split(value, &[quote], SplitOptions::None)
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            if i % 2 == 0 {
                Segment::Plain(segment)
            } else {
                Segment::Quoted(segment)
            }
        })
        .collect()
}

/// A section of text produced by [`quoted_segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'s> {
    /// Text found outside of quotes.
    Plain(&'s str),
    /// Text found between a pair of quotes (the quotes are stripped).
    Quoted(&'s str),
}

/// The part of `value` after the last occurrence of any of `patterns`, or all of `value` when none occur.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::text::substring_after_last;
///
/// assert_eq!(substring_after_last("ab-ban-ba", &['-']), "ba");
/// assert_eq!(substring_after_last("banana", &['c']), "banana");
/// ```
pub fn substring_after_last<'s>(value: &'s str, patterns: &[char]) -> &'s str {
    match value.rfind(patterns) {
        Some(index) => &value[index + char_width(value, index)..],
        None => value,
    }
}

/// Remove the program path from the front of a full command line, leaving its flags.
///
/// The program path ends at the first whitespace outside of quotes, so it may contain spaces when quoted.
/// A line which already starts with a flag marker is returned as is.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::text::strip_program;
///
/// assert_eq!(strip_program(r#""C:\My App\foo.exe" -one two"#), " -one two");
/// assert_eq!(strip_program("-one two"), "-one two");
/// ```
pub fn strip_program(line: &str) -> &str {
    let line = line.trim_start();

    if line.starts_with(FLAG_MARKER) {
        return line;
    }

    let mut quoted = false;

    for (index, character) in line.char_indices() {
        if line[index..].starts_with(QUOTE) {
            quoted = !quoted;
        } else if !quoted && character.is_whitespace() {
            return &line[index..];
        }
    }

    ""
}

fn char_width(value: &str, index: usize) -> usize {
    value[index..].chars().next().map_or(1, char::len_utf8)
}
