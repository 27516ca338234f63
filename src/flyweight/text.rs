// Flyweight: text formatting
//
// `FormattedText` keeps one flag per character. `RangeFormattedText` keeps a short
// list of ranges instead and resolves them while rendering.

use std::fmt;

use colored::Colorize;

use crate::error::{Result, WorkshopError};

fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end >= len {
        return Err(WorkshopError::InvalidRange { start, end, len });
    }
    Ok(())
}

/// Naive formatting: a capitalisation mask as long as the text itself.
#[derive(Debug, Clone)]
pub struct FormattedText {
    plain: Vec<char>,
    capitalize: Vec<bool>,
}

impl FormattedText {
    pub fn new(plain: &str) -> Self {
        let plain: Vec<char> = plain.chars().collect();
        let capitalize = vec![false; plain.len()];
        Self { plain, capitalize }
    }

    /// Marks the inclusive character range `start..=end` for capitalisation.
    pub fn capitalize(&mut self, start: usize, end: usize) -> Result<()> {
        check_range(start, end, self.plain.len())?;
        self.capitalize[start..=end].fill(true);
        Ok(())
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&c, &upper) in self.plain.iter().zip(&self.capitalize) {
            if upper {
                for u in c.to_uppercase() {
                    write!(f, "{u}")?;
                }
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Inclusive character range with style flags.
///
/// Bounds are fixed once the range is registered; only the flags are editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRange {
    start: usize,
    end: usize,
    pub capitalize: bool,
    pub bold: bool,
    pub italic: bool,
}

impl TextRange {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn covers(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Style {
    capitalize: bool,
    bold: bool,
    italic: bool,
}

/// Flyweight formatting: styles are stored per range and OR-ed together per character.
#[derive(Debug, Clone)]
pub struct RangeFormattedText {
    plain: Vec<char>,
    formatting: Vec<TextRange>,
}

impl RangeFormattedText {
    pub fn new(plain: &str) -> Self {
        Self {
            plain: plain.chars().collect(),
            formatting: Vec::new(),
        }
    }

    /// Registers the inclusive range `start..=end` and returns it for flag edits.
    ///
    /// Ranges may overlap. `start > end` or an `end` past the last character is rejected.
    pub fn add_range(&mut self, start: usize, end: usize) -> Result<&mut TextRange> {
        check_range(start, end, self.plain.len())?;
        self.formatting.push(TextRange {
            start,
            end,
            ..TextRange::default()
        });
        let last = self.formatting.len() - 1;
        Ok(&mut self.formatting[last])
    }

    pub fn ranges(&self) -> &[TextRange] {
        &self.formatting
    }

    fn style_at(&self, position: usize) -> Style {
        self.formatting
            .iter()
            .filter(|range| range.covers(position))
            .fold(Style::default(), |acc, range| Style {
                capitalize: acc.capitalize || range.capitalize,
                bold: acc.bold || range.bold,
                italic: acc.italic || range.italic,
            })
    }

    fn styled_chars(&self) -> impl Iterator<Item = (String, Style)> + '_ {
        self.plain.iter().enumerate().map(|(position, &c)| {
            let style = self.style_at(position);
            let text = if style.capitalize {
                c.to_uppercase().collect()
            } else {
                c.to_string()
            };
            (text, style)
        })
    }

    /// Renders with terminal bold/italic applied on top of capitalisation.
    pub fn render_styled(&self) -> String {
        self.styled_chars()
            .map(|(text, style)| {
                let mut styled = text.as_str().normal();
                if style.bold {
                    styled = styled.bold();
                }
                if style.italic {
                    styled = styled.italic();
                }
                styled.to_string()
            })
            .collect()
    }
}

impl fmt::Display for RangeFormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (text, _) in self.styled_chars() {
            f.write_str(&text)?;
        }
        Ok(())
    }
}
