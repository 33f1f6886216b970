//! Parser for `Format` templates
//!
//! A template is literal text with positional placeholders such as `{0}` and
//! `{1}`. The same index may appear more than once; each occurrence is filled
//! by a separate draw. `{{` and `}}` stand for literal braces.
use crate::error::TemplateError;
use crate::span::Span;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Placeholder { index: usize, span: Span },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Template, TemplateError> {
        let segments = TemplateParser::new(source).parse()?;
        Ok(Template {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Group indices in the order their placeholders appear
    pub fn placeholders(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { index, .. } => Some(*index),
            Segment::Literal(_) => None,
        })
    }

    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Check that every placeholder has a group and every group is used
    pub fn check_groups(&self, groups: usize) -> Result<(), TemplateError> {
        let mut used = vec![false; groups];
        for segment in &self.segments {
            if let Segment::Placeholder { index, span } = segment {
                match used.get_mut(*index) {
                    Some(slot) => *slot = true,
                    None => {
                        return Err(TemplateError::MissingGroup {
                            index: *index,
                            groups,
                            span: *span,
                        })
                    }
                }
            }
        }

        match used.iter().position(|used| !used) {
            Some(index) => Err(TemplateError::UnusedGroup { index }),
            None => Ok(()),
        }
    }

    /// Fill the placeholders with `fills`, which are consumed in placeholder
    /// order
    pub fn render<S: AsRef<str>>(&self, fills: &[S]) -> String {
        let mut output = String::with_capacity(self.source.len());
        let mut fills = fills.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder { .. } => {
                    if let Some(fill) = fills.next() {
                        output.push_str(fill.as_ref());
                    }
                }
            }
        }
        output
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

struct TemplateParser<'a> {
    source: &'a str,
    input: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    fn new(source: &'a str) -> Self {
        TemplateParser {
            source,
            input: source.char_indices().collect(),
            pos: 0,
        }
    }

    fn parse(&mut self) -> Result<Vec<Segment>, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '{' if self.peek_next() == Some('{') => {
                    literal.push('{');
                    self.pos += 2;
                }
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(self.parse_placeholder()?);
                }
                '}' if self.peek_next() == Some('}') => {
                    literal.push('}');
                    self.pos += 2;
                }
                '}' => {
                    let start = self.offset(self.pos);
                    return Err(TemplateError::UnmatchedBrace {
                        span: Span::new(start, start + 1),
                    });
                }
                _ => {
                    literal.push(ch);
                    self.pos += 1;
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(segments)
    }

    fn parse_placeholder(&mut self) -> Result<Segment, TemplateError> {
        let start = self.offset(self.pos);
        self.pos += 1; // Skip '{'

        let content_start = self.pos;
        while let Some(ch) = self.peek() {
            if ch == '}' {
                break;
            }
            self.pos += 1;
        }

        if self.is_eof() {
            return Err(TemplateError::UnterminatedPlaceholder {
                span: Span::new(start, self.source.len()),
            });
        }

        let text = &self.source[self.offset(content_start)..self.offset(self.pos)];
        self.pos += 1; // Skip '}'
        let span = Span::new(start, self.offset(self.pos));

        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(TemplateError::InvalidPlaceholder {
                text: text.to_string(),
                span,
            });
        }

        let index = text
            .parse::<usize>()
            .map_err(|_| TemplateError::InvalidPlaceholder {
                text: text.to_string(),
                span,
            })?;

        Ok(Segment::Placeholder { index, span })
    }

    /// Byte offset of the character at `pos`, or the end of the source
    fn offset(&self, pos: usize) -> usize {
        self.input
            .get(pos)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.source.len())
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).map(|(_, ch)| *ch)
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.pos + 1).map(|(_, ch)| *ch)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
