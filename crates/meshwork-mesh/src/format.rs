//! Brace-literal text format configuration and the mesh writer.
//!
//! The same [`TextFormat`] drives both directions: [`write_text`] renders
//! a mesh as nested delimited text and the parser reads it back.

use std::fmt;

use meshwork_core::MeshError;

/// Delimiters and limits for brace-literal mesh text.
///
/// Validated by [`validate`](Self::validate) before use by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFormat {
    /// Opens a nesting level. Default: `{`.
    pub open: char,
    /// Closes a nesting level. Default: `}`.
    pub close: char,
    /// Separates siblings. Default: `,`.
    pub separator: char,
    /// Protects delimiters inside a leaf; stripped when parsing. Default: `"`.
    pub quote: char,
    /// Deepest nesting the parser accepts. Default: 32.
    pub max_depth: usize,
}

impl TextFormat {
    /// Default opening delimiter.
    pub const DEFAULT_OPEN: char = '{';

    /// Default closing delimiter.
    pub const DEFAULT_CLOSE: char = '}';

    /// Default sibling separator.
    pub const DEFAULT_SEPARATOR: char = ',';

    /// Default quote character.
    pub const DEFAULT_QUOTE: char = '"';

    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Format with the given brackets and default separator, quote, and depth.
    pub fn with_brackets(open: char, close: char) -> Self {
        Self {
            open,
            close,
            ..Self::default()
        }
    }

    /// Check that the delimiters are distinct, non-whitespace characters
    /// and that `max_depth` is at least 1.
    pub fn validate(&self) -> Result<(), MeshError> {
        let delimiters = [self.open, self.close, self.separator, self.quote];
        if let Some(c) = delimiters.iter().find(|c| c.is_whitespace()) {
            return Err(MeshError::InvalidConfig {
                reason: format!("delimiter {c:?} is whitespace"),
            });
        }
        for (i, a) in delimiters.iter().enumerate() {
            if delimiters[i + 1..].contains(a) {
                return Err(MeshError::InvalidConfig {
                    reason: format!("delimiter {a:?} is used twice"),
                });
            }
        }
        if self.max_depth == 0 {
            return Err(MeshError::InvalidConfig {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            open: Self::DEFAULT_OPEN,
            close: Self::DEFAULT_CLOSE,
            separator: Self::DEFAULT_SEPARATOR,
            quote: Self::DEFAULT_QUOTE,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Write `cells` (row-major, of the given shape) as nested delimited text
/// using each element's `Display` form.
pub fn write_text<W, T>(
    out: &mut W,
    shape: &[usize],
    cells: &[T],
    format: &TextFormat,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: fmt::Display,
{
    write_text_with(out, shape, cells, format, &mut |out, cell| write!(out, "{cell}"))
}

/// Like [`write_text`], with a caller-supplied element writer.
pub fn write_text_with<W, T, F>(
    out: &mut W,
    shape: &[usize],
    cells: &[T],
    format: &TextFormat,
    write_cell: &mut F,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    if shape.is_empty() {
        return out.write_char(format.open).and(out.write_char(format.close));
    }
    out.write_char(format.open)?;
    let extent = shape[0];
    if shape.len() == 1 {
        for (i, cell) in cells.iter().take(extent).enumerate() {
            if i > 0 {
                out.write_char(format.separator)?;
                out.write_char(' ')?;
            }
            write_cell(out, cell)?;
        }
    } else {
        let chunk: usize = shape[1..].iter().product();
        for i in 0..extent {
            if i > 0 {
                out.write_char(format.separator)?;
                out.write_char(' ')?;
            }
            let start = i * chunk;
            write_text_with(out, &shape[1..], &cells[start..start + chunk], format, write_cell)?;
        }
    }
    out.write_char(format.close)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: fmt::Display>(shape: &[usize], cells: &[T], format: &TextFormat) -> String {
        let mut out = String::new();
        write_text(&mut out, shape, cells, format).unwrap();
        out
    }

    #[test]
    fn default_format_is_valid() {
        assert!(TextFormat::default().validate().is_ok());
    }

    #[test]
    fn duplicate_delimiters_rejected() {
        let format = TextFormat {
            separator: '{',
            ..TextFormat::default()
        };
        assert!(matches!(
            format.validate(),
            Err(MeshError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn whitespace_delimiter_rejected() {
        let format = TextFormat {
            separator: ' ',
            ..TextFormat::default()
        };
        assert!(format.validate().is_err());
    }

    #[test]
    fn zero_depth_rejected() {
        let format = TextFormat {
            max_depth: 0,
            ..TextFormat::default()
        };
        assert!(format.validate().is_err());
    }

    #[test]
    fn renders_2x2() {
        let text = render(&[2, 2], &[1, 2, 3, 4], &TextFormat::default());
        assert_eq!(text, "{{1, 2}, {3, 4}}");
    }

    #[test]
    fn renders_custom_brackets() {
        let text = render(&[3], &[0.5, 1.0, 1.5], &TextFormat::with_brackets('[', ']'));
        assert_eq!(text, "[0.5, 1, 1.5]");
    }

    #[test]
    fn renders_zero_extent_rows() {
        let cells: [i32; 0] = [];
        assert_eq!(render(&[2, 0], &cells, &TextFormat::default()), "{{}, {}}");
        assert_eq!(render(&[0, 3], &cells, &TextFormat::default()), "{}");
    }
}
