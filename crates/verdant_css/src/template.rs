//! Value templates
//!
//! Component and utility values are written as templates: literal CSS text
//! interleaved with `theme(path)` lookups.
//!
//! ```text
//! 1px solid theme(colors.primary.300)
//! theme('spacing.2') theme('spacing.4')
//! linear-gradient(to right, theme(colors.primary.400), theme(colors.primary.600))
//! ```
//!
//! Lookups are substituted left to right; literal fragments are copied
//! unchanged. `theme(` only opens a lookup at a word boundary, so
//! `mytheme(x)` stays literal.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, cut, map},
    error::{context, ErrorKind, ParseError as NomParseError, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::{delimited, preceded, terminated},
    Finish, IResult,
};
use verdant_theme::TokenRegistry;

use crate::error::{CssError, Result};

/// Custom parser result type using VerboseError for better diagnostics
type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

const LOOKUP_OPEN: &str = "theme(";

/// One piece of a value template
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim
    Literal(String),
    /// A dotted token path resolved against the registry
    Lookup(String),
}

/// A parsed property value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueTemplate {
    segments: Vec<Segment>,
}

impl ValueTemplate {
    /// Parse a value string into literal and lookup segments
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = all_consuming(many0(segment))(value).finish();
        let (_, raw) = parsed.map_err(|err| CssError::InvalidTemplate {
            value: value.to_string(),
            message: describe_error(value, &err),
        })?;

        let mut segments = Vec::with_capacity(raw.len());
        for seg in raw {
            match seg {
                Segment::Lookup(path) => {
                    let path = path.trim();
                    if path.is_empty() {
                        return Err(CssError::InvalidTemplate {
                            value: value.to_string(),
                            message: "empty token path".to_string(),
                        });
                    }
                    segments.push(Segment::Lookup(path.to_string()));
                }
                literal => segments.push(literal),
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the template contains no lookups
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Token paths referenced by this template, in order
    pub fn lookups(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Lookup(path) => Some(path.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every lookup and concatenate the result
    pub fn render(&self, registry: &TokenRegistry) -> verdant_theme::Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Lookup(path) => out.push_str(&registry.resolve_css(path)?),
            }
        }
        Ok(out)
    }
}

/// Parse and render in one step
pub fn render_value(value: &str, registry: &TokenRegistry) -> Result<String> {
    let template = ValueTemplate::parse(value)?;
    Ok(template.render(registry)?)
}

fn segment(input: &str) -> ParseResult<Segment> {
    alt((
        map(lookup, |path: &str| Segment::Lookup(path.to_string())),
        map(literal, |text: &str| Segment::Literal(text.to_string())),
    ))(input)
}

/// `theme(path)`, `theme('path')` or `theme("path")`
fn lookup(input: &str) -> ParseResult<&str> {
    context(
        "theme() lookup",
        preceded(
            tag(LOOKUP_OPEN),
            cut(terminated(
                delimited(multispace0, context("token path", token_path), multispace0),
                context("closing `)`", char(')')),
            )),
        ),
    )(input)
}

fn token_path(input: &str) -> ParseResult<&str> {
    alt((
        delimited(char('\''), take_while1(|c: char| c != '\''), char('\'')),
        delimited(char('"'), take_while1(|c: char| c != '"'), char('"')),
        take_while1(|c: char| !c.is_whitespace() && !matches!(c, ')' | ',' | '\'' | '"')),
    ))(input)
}

/// Everything up to the next lookup (or the end of input)
fn literal(input: &str) -> ParseResult<&str> {
    if input.is_empty() {
        return Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Eof,
        )));
    }
    match find_lookup_start(input) {
        Some(0) => Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::TakeUntil,
        ))),
        Some(idx) => Ok((&input[idx..], &input[..idx])),
        None => Ok(("", input)),
    }
}

fn find_lookup_start(input: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = input[from..].find(LOOKUP_OPEN) {
        let idx = from + offset;
        let at_boundary = input[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !is_ident_char(c));
        if at_boundary {
            return Some(idx);
        }
        from = idx + LOOKUP_OPEN.len();
    }
    None
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn describe_error(input: &str, err: &VerboseError<&str>) -> String {
    let column = err
        .errors
        .first()
        .map(|(fragment, _)| input.len() - fragment.len() + 1)
        .unwrap_or(1);
    let expected = err.errors.iter().find_map(|(_, kind)| match kind {
        VerboseErrorKind::Context(ctx) => Some(*ctx),
        _ => None,
    });
    match expected {
        Some(ctx) => format!("expected {ctx} at column {column}"),
        None => format!("unexpected input at column {column}"),
    }
}
