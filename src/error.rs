//! The error type for top-level errors in jqlb.

use std::{fmt::Display, io};

#[derive(Debug)]
#[non_exhaustive]
pub(crate) struct Error {
    pub kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::ParseFlags(_) => write!(f, "unable to parse command-line flags"),
            ErrorKind::WriteQuery(_) => write!(f, "unable to write query to output stream"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::ParseFlags(err) => Some(err),
            ErrorKind::WriteQuery(err) => Some(err),
        }
    }
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
    #[non_exhaustive]
    ParseFlags(clap::Error),
    #[non_exhaustive]
    WriteQuery(io::Error),
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        Self {
            kind: ErrorKind::ParseFlags(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self {
            kind: ErrorKind::WriteQuery(err),
        }
    }
}
