use std::fmt::Display;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A Jira field that can be filtered on.
///
/// Declaration order is the order clauses appear in the built query.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub(crate) enum Field {
    Project,
    Type,
    Component,
    Status,
    Assignee,
    Resolution,
}

impl Field {
    pub(crate) const ALL: [Field; 6] = [
        Field::Project,
        Field::Type,
        Field::Component,
        Field::Status,
        Field::Assignee,
        Field::Resolution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Project => "project",
            Field::Type => "type",
            Field::Component => "component",
            Field::Status => "status",
            Field::Assignee => "assignee",
            Field::Resolution => "resolution",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
