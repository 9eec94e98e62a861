//! Assembly of the JQL filter expression.

use std::fmt::Display;

use crate::{
    clause::Clause, field::Field, filter_set::FilterSet, sanitized_args::ResolvedOrClosed,
};

/// Separator placed between consecutive clauses.
pub(crate) const CONJUNCTION: &str = " AND ";

/// Statuses hidden unless resolved or closed issues are requested.
///
/// "Resoved" is misspelled, but existing filters depend on the exact literal,
/// so it must not be corrected here.
pub(crate) const EXCLUDED_STATUSES: [&str; 2] = ["Closed", "Resoved"];

/// A JQL filter built from a set of field filters.
///
/// Renders as the clauses joined by [`CONJUNCTION`]; an empty query renders as
/// the empty string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Query<'a> {
    clauses: Vec<Clause<'a>>,
}

impl<'a> Query<'a> {
    pub fn build(filters: &'a FilterSet, resolved_or_closed: ResolvedOrClosed) -> Self {
        let mut clauses: Vec<Clause<'a>> = filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| Clause::Equals(*field, value.as_str()))
            .collect();

        let status = filters.get(Field::Status).as_str();
        if resolved_or_closed == ResolvedOrClosed::Exclude && !EXCLUDED_STATUSES.contains(&status)
        {
            clauses.extend(
                EXCLUDED_STATUSES
                    .iter()
                    .map(|excluded| Clause::NotEquals(Field::Status, *excluded)),
            );
        }

        Self { clauses }
    }
}

impl<'a> Display for Query<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, clause) in self.clauses.iter().enumerate() {
            if index != 0 {
                write!(f, "{CONJUNCTION}")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}
