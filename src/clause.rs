use std::fmt::Display;

use crate::field::Field;

/// A single `field=value` or `field!=value` fragment of a query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Clause<'a> {
    Equals(Field, &'a str),
    NotEquals(Field, &'a str),
}

impl<'a> Display for Clause<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Clause::Equals(field, value) => write!(f, "{field}={value}"),
            Clause::NotEquals(field, value) => write!(f, "{field}!={value}"),
        }
    }
}
