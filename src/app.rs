use std::io::Write;

use anyhow::{Context, Result};
use linediff::{Block, Difference, Source};

use crate::reference;

pub struct App {
    candidate: Source,
    reference: Source,
}

impl App {
    pub fn new(candidate: Source, reference: Source) -> App {
        App { candidate, reference }
    }

    /// The captured perft run that ships with the binary.
    pub fn builtin() -> App {
        Self::new(reference::CANDIDATE.into(), reference::REFERENCE.into())
    }

    /// Writes every candidate line that has no exact match in the reference,
    /// one per line, in candidate order.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let candidate = self.candidate.load()
            .context("loading candidate block")?;
        let reference = self.reference.load()
            .context("loading reference block")?;

        let reference = Block::parse(&reference)?;
        let diff = Difference::new(Block::parse(&candidate)?, &reference);
        let mut reported = 0;
        for line in &diff {
            writeln!(out, "{}", line)?;
            reported += 1;
        }
        out.flush()?;
        tracing::debug!(reported, "done");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
