use std::collections::HashSet;

use crate::Error;
use crate::block::Block;

/// Lines of a candidate block with no exact match in a reference block.
///
/// The reference is reduced to a set once, up front; iterating the
/// difference walks the candidate in order and yields each line that is
/// missing from that set.  Matching is whole-line and byte-exact, so a move
/// whose count differs between the two blocks is reported.
#[derive(Clone, Debug)]
pub struct Difference<'a, 'r> {
    candidate: Block<'a>,
    reference: HashSet<&'r str>,
}

impl<'a, 'r> Difference<'a, 'r> {
    pub fn new(candidate: Block<'a>, reference: &Block<'r>) -> Self {
        let reference = reference.to_set();
        tracing::debug!(candidate = candidate.len(),
                        reference = reference.len(),
                        "built reference set");
        Difference { candidate, reference }
    }

    /// Returns a fresh iterator over the missing lines.  Each call starts
    /// again from the top of the candidate block.
    pub fn iter(&self) -> Missing<'_, 'a, 'r> {
        Missing {
            lines: self.candidate.lines().iter(),
            reference: &self.reference,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'d, 'a, 'r> IntoIterator for &'d Difference<'a, 'r> {
    type Item = &'a str;
    type IntoIter = Missing<'d, 'a, 'r>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Missing<'d, 'a, 'r> {
    lines: std::slice::Iter<'d, &'a str>,
    reference: &'d HashSet<&'r str>,
}

impl<'d, 'a, 'r> Iterator for Missing<'d, 'a, 'r> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        let reference = self.reference;
        let line = self.lines.find(|line| !reference.contains(**line))?;
        tracing::trace!(line = *line, "unmatched");
        Some(*line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.lines.size_hint().1)
    }
}

/// Splits both blobs and collects the candidate lines missing from the
/// reference, in candidate order.
pub fn missing_lines<'a>(candidate: &'a str, reference: &str)
    -> Result<Vec<&'a str>, Error>
{
    let reference = Block::parse(reference)?;
    let diff = Difference::new(Block::parse(candidate)?, &reference);
    Ok(diff.iter().collect())
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(a: &[&'static str], b: &[&'static str]) -> Vec<&'static str> {
        let b = Block(b.to_vec());
        Difference::new(Block(a.to_vec()), &b).iter().collect()
    }

    #[test]
    fn count_mismatch_is_reported() {
        assert_eq!(diff(&["g4g3: 4781", "e2e4: 686"],
                        &["g4g3: 4780", "e2e4: 686"]),
                   vec!["g4g3: 4781"]);
    }

    #[test]
    fn identical_blocks() {
        assert!(diff(&["e2e4: 686"], &["e2e4: 686"]).is_empty());
    }

    #[test]
    fn empty_candidate() {
        assert!(diff(&[], &["x: 1"]).is_empty());
    }

    #[test]
    fn empty_reference() {
        assert_eq!(diff(&["x: 1"], &[]), vec!["x: 1"]);
    }

    #[test]
    fn duplicates_reported_per_occurrence() {
        assert_eq!(diff(&["a: 1", "a: 1"], &[]), vec!["a: 1", "a: 1"]);
        assert!(diff(&["a: 1", "a: 1"], &["a: 1"]).is_empty());
    }

    #[test]
    fn reference_order_is_irrelevant() {
        assert_eq!(diff(&["a: 1", "b: 2", "c: 3"], &["c: 3", "a: 1"]),
                   vec!["b: 2"]);
    }

    #[test]
    fn no_normalisation() {
        assert_eq!(diff(&["a: 1 ", "A: 1", "a:1"], &["a: 1"]),
                   vec!["a: 1 ", "A: 1", "a:1"]);
    }

    #[test]
    fn blank_lines() {
        assert_eq!(diff(&["", "a: 1"], &["a: 1"]), vec![""]);
        assert!(diff(&["", "a: 1"], &["a: 1", ""]).is_empty());
    }

    #[test]
    fn iteration_restarts() {
        let reference = Block(vec!["b: 2"]);
        let d = Difference::new(Block(vec!["a: 1", "b: 2", "c: 3"]), &reference);
        let first: Vec<_> = d.iter().collect();
        let second: Vec<_> = (&d).into_iter().collect();
        assert_eq!(first, vec!["a: 1", "c: 3"]);
        assert_eq!(first, second);
        assert!(!d.is_empty());

        let mut it = d.iter();
        assert_eq!(it.next(), Some("a: 1"));
        let fork = it.clone();
        assert_eq!(it.collect::<Vec<_>>(), fork.collect::<Vec<_>>());
    }

    #[test]
    fn from_text() {
        let out = missing_lines("g4g3: 4781\ne2e4: 686\n",
                                "e2e4: 686\r\ng4g3: 4780").unwrap();
        assert_eq!(out, vec!["g4g3: 4781"]);
    }

    #[test]
    fn separators_differ_between_blobs() {
        assert!(missing_lines("a: 1\x0cb: 2", "a: 1\nb: 2").unwrap().is_empty());
        assert!(missing_lines("a: 1\u{2028}b: 2\u{85}", "b: 2\r\na: 1\x1e")
            .unwrap().is_empty());
        assert_eq!(missing_lines("a: 1\x0bb: 3", "a: 1\rb: 2").unwrap(),
                   vec!["b: 3"]);
    }
}
