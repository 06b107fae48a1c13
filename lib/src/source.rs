use std::borrow::Cow;
use std::path::PathBuf;

use crate::Error;

/// Where a block's text comes from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    Text(String),
    File(PathBuf),
}

impl Source {
    /// Inline text is borrowed; files are read fresh on every call.
    pub fn load(&self) -> Result<Cow<'_, str>, Error> {
        match self {
            Source::Text(t) => Ok(Cow::Borrowed(t)),
            Source::File(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|source| Error::InputUnavailable {
                        path: path.clone(),
                        source,
                    })?;
                tracing::info!(path = %path.display(), bytes = text.len(),
                               "loaded block");
                Ok(Cow::Owned(text))
            },
        }
    }
}

impl From<&str> for Source {
    fn from(t: &str) -> Self {
        Source::Text(t.to_owned())
    }
}

impl From<PathBuf> for Source {
    fn from(p: PathBuf) -> Self {
        Source::File(p)
    }
}
