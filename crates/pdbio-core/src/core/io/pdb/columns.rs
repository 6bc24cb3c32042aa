use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A half-open, 0-based byte range of a fixed-column record.
///
/// Ranges index the raw line bytes, so a non-ASCII byte never shifts the
/// columns that follow it.
///
/// Displays as the 1-based inclusive column numbers used by the PDB format
/// documentation (`Columns::new(30, 38)` is `"31-38"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub start: usize,
    pub end: usize,
}

impl Columns {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the bytes of `line` covered by these columns, clipped to the
    /// end of the line. Columns that fall entirely past the end yield an
    /// empty slice.
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        let end = self.end.min(line.len());
        line.get(self.start..end).unwrap_or(&[])
    }

    /// Decodes the covered bytes as text, trimmed. Invalid UTF-8 is replaced
    /// per byte run and cannot leak into neighbouring fields.
    pub fn text<'a>(&self, line: &'a [u8]) -> Cow<'a, str> {
        match String::from_utf8_lossy(self.slice(line)) {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
        }
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.end - self.start == 1 {
            write!(f, "{}", self.end)
        } else {
            write!(f, "{}-{}", self.start + 1, self.end)
        }
    }
}

/// Outcome of converting a fixed-column field to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldParse<T> {
    /// The field held a well-formed number.
    Clean(T),
    /// The field was blank or malformed; the value is the fallback (zero).
    Fallback(T),
}

impl<T> FieldParse<T> {
    pub fn value(self) -> T {
        match self {
            FieldParse::Clean(v) | FieldParse::Fallback(v) => v,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, FieldParse::Clean(_))
    }
}

/// Parses a whitespace-padded numeric field, falling back to `T::default()`.
pub fn parse_field<T: FromStr + Default>(raw: &str) -> FieldParse<T> {
    match raw.trim().parse() {
        Ok(v) => FieldParse::Clean(v),
        Err(_) => FieldParse::Fallback(T::default()),
    }
}

/// Returns the character at a byte column, or `' '` if the line is shorter
/// or the byte is not ASCII.
pub fn char_at(line: &[u8], column: usize) -> char {
    line.get(column)
        .filter(|b| b.is_ascii())
        .map_or(' ', |&b| b as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_clips_to_line_end() {
        let cols = Columns::new(4, 10);
        assert_eq!(cols.slice(b"ATOM  12"), b"  12");
        assert_eq!(cols.slice(b"ATO"), b"");
        assert_eq!(Columns::new(6, 11).slice(b"ATOM      1"), b"    1");
    }

    #[test]
    fn text_decodes_only_its_own_bytes() {
        let line = b"ATOM   \xC5 ALA";
        assert_eq!(Columns::new(8, 12).text(line), "ALA");
        assert_eq!(Columns::new(6, 9).text(line), "\u{FFFD}");
    }

    #[test]
    fn columns_display_one_based_inclusive() {
        assert_eq!(Columns::new(30, 38).to_string(), "31-38");
        assert_eq!(Columns::new(21, 22).to_string(), "22");
    }

    #[test]
    fn parse_field_distinguishes_clean_and_fallback() {
        assert_eq!(parse_field::<f64>("  12.500"), FieldParse::Clean(12.5));
        assert_eq!(parse_field::<i32>("  -7"), FieldParse::Clean(-7));
        assert_eq!(parse_field::<f64>("        "), FieldParse::Fallback(0.0));
        assert_eq!(parse_field::<i32>("12ab"), FieldParse::Fallback(0));
        assert!(!parse_field::<f64>("x").is_clean());
        assert_eq!(parse_field::<f64>("x").value(), 0.0);
    }

    #[test]
    fn char_at_pads_short_lines_with_space() {
        assert_eq!(char_at(b"SSBOND   1 CYS A", 15), 'A');
        assert_eq!(char_at(b"SSBOND", 15), ' ');
        assert_eq!(char_at(b"SSBOND   1 CYS \xC5", 15), ' ');
    }
}
