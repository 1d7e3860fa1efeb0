//! Composite format rendering.
//!
//! Format strings use indexed placeholders rather than Rust's compile-time
//! `format!` syntax, because the format is only known at runtime:
//!
//! ```text
//! {index}            argument `index`
//! {index,alignment}  padded to |alignment| chars, right-aligned if positive
//! {index:specifier}  specifier is accepted and ignored
//! {{ and }}          literal braces
//! ```
//!
//! Indexes and widths of `WIDTH_LIMIT` or more are rejected.

use std::fmt::Display;
use std::iter;

use crate::error::FormatError;

/// Indexes and alignment widths must stay below this.
pub const WIDTH_LIMIT: u32 = 1_000_000;

/// Render `format` against `args`.
pub fn render(format: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let bytes = format.as_bytes();
    let mut out = String::with_capacity(format.len() + 16 * args.len());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                out.push_str(&format[literal_start..=i]);
                i += 2;
                literal_start = i;
            }
            b'{' => {
                out.push_str(&format[literal_start..i]);
                let close = format[i + 1..]
                    .find('}')
                    .map(|offset| i + 1 + offset)
                    .ok_or(FormatError::UnclosedPlaceholder { position: i })?;
                let placeholder = Placeholder::parse(&format[i + 1..close], i)?;
                placeholder.write(&mut out, args)?;
                i = close + 1;
                literal_start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                out.push_str(&format[literal_start..=i]);
                i += 2;
                literal_start = i;
            }
            b'}' => return Err(FormatError::UnmatchedClosingBrace { position: i }),
            _ => i += 1,
        }
    }

    out.push_str(&format[literal_start..]);
    Ok(out)
}

/// A parsed `{index,alignment:specifier}` item.
#[derive(Debug, PartialEq, Eq)]
struct Placeholder {
    index: usize,
    alignment: i32,
}

impl Placeholder {
    fn parse(body: &str, position: usize) -> Result<Self, FormatError> {
        let invalid = FormatError::InvalidPlaceholder { position };
        if body.contains('{') {
            return Err(invalid);
        }

        let head = body.split_once(':').map_or(body, |(head, _specifier)| head);
        let (index, alignment) = match head.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (head, None),
        };

        let index = index.trim().parse::<usize>().map_err(|_| invalid.clone())?;
        let alignment = match alignment {
            Some(a) => a.trim().parse::<i32>().map_err(|_| invalid.clone())?,
            None => 0,
        };
        if index >= WIDTH_LIMIT as usize || alignment.unsigned_abs() >= WIDTH_LIMIT {
            return Err(invalid);
        }

        Ok(Self { index, alignment })
    }

    fn write(&self, out: &mut String, args: &[&dyn Display]) -> Result<(), FormatError> {
        let arg = args.get(self.index).ok_or(FormatError::IndexOutOfRange {
            index: self.index,
            count: args.len(),
        })?;

        let text = arg.to_string();
        let width = self.alignment.unsigned_abs() as usize;
        let pad = width.saturating_sub(text.chars().count());

        if self.alignment < 0 {
            out.push_str(&text);
            out.extend(iter::repeat(' ').take(pad));
        } else {
            out.extend(iter::repeat(' ').take(pad));
            out.push_str(&text);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_substitution() {
        let out = render("conn failed: {0}", &[&"timeout"]).unwrap();
        assert_eq!(out, "conn failed: timeout");

        let out = render("{1} before {0}, {1} again", &[&1, &"two"]).unwrap();
        assert_eq!(out, "two before 1, two again");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(render("plain text", &[]).unwrap(), "plain text");
        assert_eq!(render("", &[]).unwrap(), "");
    }

    #[test]
    fn test_escaped_braces() {
        let out = render("{{literal}} {0}", &[&42]).unwrap();
        assert_eq!(out, "{literal} 42");
    }

    #[test]
    fn test_alignment_and_specifier() {
        assert_eq!(render("[{0,5}]", &[&"ab"]).unwrap(), "[   ab]");
        assert_eq!(render("[{0,-5}]", &[&"ab"]).unwrap(), "[ab   ]");
        assert_eq!(render("[{0,1}]", &[&"abc"]).unwrap(), "[abc]");
        assert_eq!(render("{0:X8}", &[&255]).unwrap(), "255");
        assert_eq!(render("{ 0 }", &[&"x"]).unwrap(), "x");
        assert_eq!(render("{0,999999}", &[&"x"]).unwrap().len(), 999_999);
    }

    #[test]
    fn test_non_ascii_text() {
        let out = render("héllo {0} wörld", &[&"ü"]).unwrap();
        assert_eq!(out, "héllo ü wörld");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            render("oops {0", &[&1]),
            Err(FormatError::UnclosedPlaceholder { position: 5 })
        );
        assert_eq!(
            render("oops }", &[]),
            Err(FormatError::UnmatchedClosingBrace { position: 5 })
        );
        assert_eq!(
            render("{name}", &[&1]),
            Err(FormatError::InvalidPlaceholder { position: 0 })
        );
        assert_eq!(
            render("{0,wide}", &[&1]),
            Err(FormatError::InvalidPlaceholder { position: 0 })
        );
        assert_eq!(
            render("{0,1000000000}", &[&"x"]),
            Err(FormatError::InvalidPlaceholder { position: 0 })
        );
        assert_eq!(
            render("ab{0,-1000000}", &[&"x"]),
            Err(FormatError::InvalidPlaceholder { position: 2 })
        );
        assert_eq!(
            render("{1000000}", &[&"x"]),
            Err(FormatError::InvalidPlaceholder { position: 0 })
        );
        assert_eq!(
            render("{2}", &[&1, &2]),
            Err(FormatError::IndexOutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_placeholder_parse() {
        assert_eq!(
            Placeholder::parse("3,-10:N2", 0).unwrap(),
            Placeholder { index: 3, alignment: -10 }
        );
    }
}
