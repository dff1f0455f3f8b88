//! Module for handling source files and their elements.

use std::{
    cmp::Ordering,
    fmt::Debug,
    iter::Iterator,
    ops::Range,
    path::{Path, PathBuf},
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};

use super::{file_provider::FileProvider, Error};

/// Represents a source file that contains the source code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters)]
pub struct SourceFile {
    /// Get the path of the source file.
    #[get = "pub"]
    path: PathBuf,
    /// Get the content of the source file
    #[get = "pub"]
    content: String,
    lines: Vec<Range<usize>>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("lines", &self.lines)
            .finish()
    }
}

impl SourceFile {
    /// Create a source file from text that is already in memory.
    ///
    /// The path is only used for diagnostics, it does not need to exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Arc<Self> {
        let content = content.into();
        let lines = get_line_byte_positions(&content);

        Arc::new(Self {
            path: path.into(),
            content,
            lines,
        })
    }

    /// Get the line of the source file at the given line number.
    ///
    /// Numbering starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        let line = line - 1;
        self.lines
            .get(line)
            .map(|range| &self.content()[range.clone()])
    }

    /// Get the [`SourceIterator`] for the source file.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> SourceIterator<'a> {
        SourceIterator {
            source_file: self,
            iterator: self.content().char_indices(),
            offset: 0,
        }
    }

    /// Get the number of lines in the source file.
    #[must_use]
    pub fn line_amount(&self) -> usize {
        self.lines.len()
    }

    /// Load the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading the file contents.
    pub fn load(path: &Path, provider: &impl FileProvider) -> Result<Arc<Self>, Error> {
        let source = provider.read_str(path)?;
        Ok(Self::new(path.to_path_buf(), source.into_owned()))
    }

    /// Get the [`Location`] of a given byte index
    #[must_use]
    pub fn get_location(&self, byte_index: usize) -> Option<Location> {
        if self.content.is_char_boundary(byte_index) {
            // get the line number by binary searching the line ranges
            let line = self
                .lines
                .binary_search_by(|range| {
                    if range.contains(&byte_index) {
                        Ordering::Equal
                    } else if byte_index < range.start {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    }
                })
                .ok()?;

            let line_starting_byte_index = self.lines[line].start;
            let line_str = self.get_line(line + 1)?;

            // get the column number by iterating through the utf-8 characters (starts at 1)
            let column = line_str
                .char_indices()
                .take_while(|(i, _)| *i + line_starting_byte_index < byte_index)
                .count()
                + 1;

            Some(Location {
                line: line + 1,
                column,
            })
        } else {
            None
        }
    }

    /// Get the relative path of the source file from the current working directory.
    #[must_use]
    pub fn path_relative(&self) -> Option<PathBuf> {
        pathdiff::diff_paths(&self.path, std::env::current_dir().ok()?)
    }
}

/// Represents a range of characters in a source file.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Get the start byte index of the span.
    #[get_copy = "pub"]
    start: usize,

    /// Get the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: usize,

    /// Get the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

impl Span {
    /// Create a span from the given start and end byte indices in the source file.
    ///
    /// # Parameters
    /// - `start`: The start byte index of the span.
    /// - `end`: The end byte index of the span (exclusive).
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: usize, end: usize) -> Option<Self> {
        let content = source_file.content();
        if start > end
            || end > content.len()
            || !content.is_char_boundary(start)
            || !content.is_char_boundary(end)
        {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Create an empty span pointing at the end of the source file.
    #[must_use]
    pub fn at_end(source_file: Arc<SourceFile>) -> Self {
        let end = source_file.content().len();
        Self {
            start: end,
            end,
            source_file,
        }
    }

    /// Get the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str {
        &self.source_file.content()[self.start..self.end]
    }

    /// Get the starting [`Location`] of the span.
    ///
    /// Returns [`None`] if the span starts at the very end of the source file.
    #[must_use]
    pub fn start_location(&self) -> Option<Location> {
        self.source_file.get_location(self.start)
    }
}

/// Pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Line number of the location (starts at 1).
    pub line: usize,

    /// Column number of the location (starts at 1).
    pub column: usize,
}

/// Cursor over the characters of a source file with up to two characters of lookahead.
#[derive(Debug, Clone, CopyGetters)]
pub struct SourceIterator<'a> {
    /// Get the source file that the iterator is iterating over.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    iterator: CharIndices<'a>,
    /// Get the byte index of the next character to be read.
    #[get_copy = "pub"]
    offset: usize,
}

impl<'a> SourceIterator<'a> {
    /// Peek at the next character in the source file.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.iterator.clone().next().map(|(_, character)| character)
    }

    /// Peek at the character after the next one.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        self.iterator.clone().nth(1).map(|(_, character)| character)
    }

    /// Consumes the next character only if it equals `expected`.
    pub fn next_if_eq(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Whether every character has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source_file.content().len()
    }
}

impl<'a> Iterator for SourceIterator<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iterator.next();
        if let Some((index, character)) = item {
            self.offset = index + character.len_utf8();
        }
        item
    }
}

/// Get the byte positions of the lines in the given text.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    for (byte, char) in text.char_indices() {
        if char == '\n' {
            #[allow(clippy::range_plus_one)]
            results.push(current_position..byte + 1);

            current_position = byte + 1;
        }
    }

    // add the last line
    results.push(current_position..text.len());

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line() {
        let file = SourceFile::new("test.lox", "var a;\nprint a;\n");
        assert_eq!(file.line_amount(), 3);
        assert_eq!(file.get_line(0), None);
        assert_eq!(file.get_line(1), Some("var a;\n"));
        assert_eq!(file.get_line(2), Some("print a;\n"));
        assert_eq!(file.get_line(3), Some(""));
    }

    #[test]
    fn test_get_location() {
        let file = SourceFile::new("test.lox", "ab\ncd");
        assert_eq!(file.get_location(0), Some(Location { line: 1, column: 1 }));
        assert_eq!(file.get_location(4), Some(Location { line: 2, column: 2 }));
    }

    #[test]
    fn test_span_bounds() {
        let file = SourceFile::new("test.lox", "héllo");
        assert!(Span::new(file.clone(), 0, 1).is_some());
        // inside the two byte `é`
        assert!(Span::new(file.clone(), 0, 2).is_none());
        assert!(Span::new(file.clone(), 3, 2).is_none());
        assert!(Span::new(file.clone(), 0, 7).is_none());
        assert_eq!(Span::new(file.clone(), 1, 3).unwrap().str(), "é");
        assert_eq!(Span::at_end(file).str(), "");
    }

    #[test]
    fn test_iterator_lookahead() {
        let file = SourceFile::new("test.lox", "1.5");
        let mut iter = file.iter();
        assert_eq!(iter.peek(), Some('1'));
        assert_eq!(iter.peek_next(), Some('.'));
        assert_eq!(iter.next(), Some((0, '1')));
        assert!(!iter.next_if_eq('5'));
        assert!(iter.next_if_eq('.'));
        assert_eq!(iter.offset(), 2);
        assert_eq!(iter.peek_next(), None);
        iter.next();
        assert!(iter.is_at_end());
    }
}
