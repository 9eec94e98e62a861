use std::ffi::OsString;

use clap::Parser;

use crate::{cli::Cli, field::Field, filter_set::FilterSet};

/// Whether issues that are already resolved or closed may match the query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ResolvedOrClosed {
    Include,
    Exclude,
}

impl From<bool> for ResolvedOrClosed {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Include,
            false => Self::Exclude,
        }
    }
}

pub(crate) struct SanitizedArgs {
    pub filters: FilterSet,
    pub resolved_or_closed: ResolvedOrClosed,
}

impl SanitizedArgs {
    pub(crate) fn try_parse_from<I, T>(args: I) -> Result<SanitizedArgs, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into())
    }
}

impl From<Cli> for SanitizedArgs {
    fn from(value: Cli) -> Self {
        let Cli {
            project,
            issue_type,
            component,
            status,
            assignee,
            resolution,
            enable_resolved_or_closed,
        } = value;
        Self {
            filters: [
                (Field::Project, project),
                (Field::Type, issue_type),
                (Field::Component, component),
                (Field::Status, status),
                (Field::Assignee, assignee),
                (Field::Resolution, resolution),
            ]
            .into_iter()
            .collect(),
            resolved_or_closed: enable_resolved_or_closed.into(),
        }
    }
}
