use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input unavailable: `{path}`")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line splitter stopped early.  Every `&str` splits cleanly, so this
    /// is only reachable if the splitter grows a rejecting branch.
    #[error("parsing failed")]
    ParseError,
}
