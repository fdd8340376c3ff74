//! Selectors for locating elements inside a subtree.
//!
//! A selector is a comma-separated list of chains. Each chain is one or more
//! compounds joined by whitespace (descendant combinator), and a compound is
//! an optional tag or `*` followed by any number of `.class`, `#id`,
//! `[attr]` and `[attr=value]` parts. Pseudo-classes and the `>`, `+` and `~`
//! combinators are rejected. Attribute values cannot contain whitespace.

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

use crate::document::{Document, NodeId};

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unsupported character '{0}'")]
    Unsupported(char),
    #[error("expected a name after '{0}'")]
    ExpectedName(char),
    #[error("unterminated attribute selector")]
    UnterminatedAttribute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        // The document root is never a match target.
        if node == doc.root() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if tag != "*" && doc.tag(node) != Some(tag.as_str()) {
                return false;
            }
        }
        if self.ids.iter().any(|id| doc.id_of(node) != Some(id.as_str())) {
            return false;
        }
        if self.classes.iter().any(|class| !doc.has_class(node, class)) {
            return false;
        }
        self.attrs.iter().all(|attr| match (&attr.value, doc.get_attr(node, &attr.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
        })
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Each chain lists its compounds outermost first.
    chains: Vec<Vec<Compound>>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let chains = input
            .split(',')
            .map(parse_chain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { chains })
    }

    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.chains.iter().any(|chain| chain_matches(chain, doc, node))
    }
}

/// The last compound must match `node`; each earlier one must match some
/// ancestor above the previous match. Taking the nearest matching ancestor
/// each time is enough for descendant-only chains.
fn chain_matches(chain: &[Compound], doc: &Document, node: NodeId) -> bool {
    let Some((last, outer)) = chain.split_last() else {
        return false;
    };
    if !last.matches(doc, node) {
        return false;
    }
    let mut ancestors = doc.ancestors(node).into_iter();
    outer
        .iter()
        .rev()
        .all(|compound| ancestors.any(|ancestor| compound.matches(doc, ancestor)))
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

fn parse_chain(part: &str) -> Result<Vec<Compound>, SelectorError> {
    let chain = part
        .split_whitespace()
        .map(parse_compound)
        .collect::<Result<Vec<_>, _>>()?;
    if chain.is_empty() {
        return Err(SelectorError::Empty);
    }
    Ok(chain)
}

fn take_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(ch) = chars.next_if(|ch| is_name_char(*ch)) {
        name.push(ch);
    }
    name
}

fn parse_compound(token: &str) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let mut chars = token.chars().peekable();

    if chars.next_if_eq(&'*').is_some() {
        compound.tag = Some("*".to_string());
    } else {
        let tag = take_name(&mut chars);
        if !tag.is_empty() {
            compound.tag = Some(tag.to_ascii_lowercase());
        }
    }

    while let Some(ch) = chars.next() {
        match ch {
            '.' | '#' => {
                let name = take_name(&mut chars);
                if name.is_empty() {
                    return Err(SelectorError::ExpectedName(ch));
                }
                if ch == '.' {
                    compound.classes.push(name);
                } else {
                    compound.ids.push(name);
                }
            }
            '[' => {
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed {
                    return Err(SelectorError::UnterminatedAttribute);
                }
                compound.attrs.push(parse_attr(&body)?);
            }
            other => return Err(SelectorError::Unsupported(other)),
        }
    }

    Ok(compound)
}

fn parse_attr(body: &str) -> Result<AttrMatch, SelectorError> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (
            name,
            Some(value.trim_matches(|c| c == '"' || c == '\'').to_string()),
        ),
        None => (body, None),
    };
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(SelectorError::ExpectedName('['));
    }
    Ok(AttrMatch {
        name: name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound_parts() {
        let compound = parse_compound("ul.drop-content#menu[data-state=on]").unwrap();
        assert_eq!(compound.tag.as_deref(), Some("ul"));
        assert_eq!(compound.classes, vec!["drop-content"]);
        assert_eq!(compound.ids, vec!["menu"]);
        assert_eq!(compound.attrs[0].value.as_deref(), Some("on"));
    }

    #[test]
    fn test_parse_chains() {
        let sel = Selector::parse("nav ul li, .menu").unwrap();
        assert_eq!(sel.chains.len(), 2);
        assert_eq!(sel.chains[0].len(), 3);
        assert_eq!(sel.chains[1][0].classes, vec!["menu"]);
    }

    #[test]
    fn test_quoted_attribute_value() {
        let attr = parse_attr("data-state='off'").unwrap();
        assert_eq!(attr.name, "data-state");
        assert_eq!(attr.value.as_deref(), Some("off"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("ul,"), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("ul >"), Err(SelectorError::Unsupported('>')));
        assert_eq!(
            Selector::parse("[data-x"),
            Err(SelectorError::UnterminatedAttribute)
        );
        assert_eq!(Selector::parse("ul."), Err(SelectorError::ExpectedName('.')));
        assert_eq!(Selector::parse("[=on]"), Err(SelectorError::ExpectedName('[')));
    }
}
