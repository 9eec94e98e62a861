use std::fmt::Display;

/// Placeholder go-jira renders for a custom-command option that was not set.
pub(crate) const UNSET_SENTINEL: &str = "<no value>";

/// The value of a single filter, inserted verbatim into the query.
///
/// An empty value means "no filter on this field".
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub(crate) struct FilterValue(String);

impl FilterValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        match value.as_str() {
            UNSET_SENTINEL => Self::default(),
            _ => Self(value),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl From<Option<String>> for FilterValue {
    fn from(value: Option<String>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
