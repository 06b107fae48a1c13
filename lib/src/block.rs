use std::collections::HashSet;

use crate::Error;
use crate::parser::parse_lines;

/// An ordered sequence of opaque lines, borrowed from the text they were
/// split out of.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Block<'a>(pub Vec<&'a str>);

impl<'a> Block<'a> {
    pub fn parse(text: &'a str) -> Result<Self, Error> {
        let (_, lines) = parse_lines(text)
            .map_err(|_| Error::ParseError)?;
        tracing::debug!(lines = lines.len(), "split block");
        Ok(Block(lines))
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership view of the block; order and duplicates are dropped.
    pub fn to_set(&self) -> HashSet<&'a str> {
        self.0.iter().copied().collect()
    }
}

impl<'b, 'a> IntoIterator for &'b Block<'a> {
    type Item = &'a str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a str>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_duplicates() {
        let b = Block::parse("b: 2\na: 1\nb: 2").unwrap();
        assert_eq!(b.lines(), &["b: 2", "a: 1", "b: 2"]);
        assert_eq!(b.len(), 3);
        assert_eq!(b.to_set().len(), 2);
    }

    #[test]
    fn empty() {
        let b = Block::parse("").unwrap();
        assert!(b.is_empty());
        assert_eq!(b, Block::default());
        assert!(b.to_set().is_empty());
    }
}
