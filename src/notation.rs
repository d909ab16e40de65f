use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::prelude::{DenseSet, Set};
use crate::utils::prelude::*;

static LITERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*\{(?<body>.*)\}\s*$").expect("set literal pattern compiles")
});

/// A syntactically valid set literal of the form `{a, b, c}`, split into its raw elements.
///
/// Elements are separated by commas and trimmed. An element that must keep a comma, a quote,
/// surrounding whitespace or that is empty is written in double quotes, with `\"` and `\\` as
/// escapes: `{"a, b", " c", ""}`. Turning elements into values (and collapsing duplicates) is
/// left to whichever set the literal is parsed into.
#[derive(Clone, Debug)]
pub struct SetLiteral {
    pub repr: String,
    pub elements: Vec<String>
}

/// Renders one element so that `SetLiteral` reads it back unchanged.
pub fn quote(element: &str) -> String {
    let plain = !element.is_empty()
        && element.trim() == element
        && !element.contains([',', '"', '\\']);
    match plain {
        true => element.to_owned(),
        _    => format!("\"{}\"", element.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

/// Splits the inside of a literal's braces into unquoted elements.
fn _split_elements(body: &str) -> Result<Vec<String>> {
    let mut elements = vec![];
    let mut chars = body.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let element = if chars.next_if_eq(&'"').is_some() {
            let mut quoted = String::new();
            loop {
                match chars.next() {
                    Some('\\') => match chars.next() {
                        Some(c) => quoted.push(c),
                        None    => return Err(anyhow!("dangling escape in element at position {}", elements.len())),
                    },
                    Some('"') => break,
                    Some(c)   => quoted.push(c),
                    None      => return Err(anyhow!("unterminated quote in element at position {}", elements.len())),
                }
            }
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            quoted
        } else {
            let raw = chars.peeking_take_while(|c| *c != ',').collect::<String>();
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(anyhow!("empty element at position {}", elements.len()));
            }
            raw.to_owned()
        };
        elements.push(element);

        match chars.next() {
            None      => return Ok(elements),
            Some(',') => continue,
            Some(c)   => return Err(anyhow!("unexpected {c:?} after element at position {}", elements.len() - 1)),
        }
    }
}

impl FromStr for SetLiteral {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some(matches) = LITERAL_PATTERN.captures(s) else {
            return Err(anyhow!("could not parse set literal {s}"));
        };

        let body = matches.name("body").map_or("", |m| m.as_str());
        let elements = match body.trim().is_empty() {
            true => vec![],
            _    => _split_elements(body).with_context(|| format!("in set literal {s}"))?
        };

        Ok(SetLiteral { repr: s.trim().to_owned(), elements })
    }
}

impl<T> FromStr for Set<T>
where
    T: FromStr + Eq + Hash,
    T::Err: Display,
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let SetLiteral { repr: _, elements } = s.parse::<SetLiteral>()?;
        let mut set = Set::with_capacity(elements.len());
        for element in elements {
            let value = element.parse::<T>().map_err(|e| anyhow!("could not parse element {element}: {e}"))?;
            set.add(value);
        }
        Ok(set)
    }
}

impl FromStr for DenseSet {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let SetLiteral { repr: _, elements } = s.parse::<SetLiteral>()?;
        let mut set = DenseSet::new();
        for element in elements {
            let value = element.parse::<usize>().with_context(|| format!("could not parse element {element}"))?;
            set.try_add(value)?;
        }
        Ok(set)
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.into_iter().map(|v| quote(&v.to_string())).join(", "))
    }
}

impl Display for DenseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

impl<T: Display + Ord> Set<T> {
    /// The canonical notation of the set lists its members in ascending order, so that equal
    /// sets always render identically.
    pub fn notate(&self) -> String {
        format!("{{{}}}", self.into_iter().sorted().map(|v| quote(&v.to_string())).join(", "))
    }
}
