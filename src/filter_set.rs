use indexmap::IndexMap;

use crate::{field::Field, filter_value::FilterValue};

/// Filter values keyed by field, always iterated in `Field::ALL` order.
///
/// Every field is present from construction; an unset field holds the empty
/// value. Replacing a value keeps the field in its original position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FilterSet(IndexMap<Field, FilterValue>);

impl Default for FilterSet {
    fn default() -> Self {
        Self(
            Field::ALL
                .into_iter()
                .map(|field| (field, FilterValue::default()))
                .collect(),
        )
    }
}

impl FilterSet {
    pub fn set(&mut self, field: Field, value: impl Into<FilterValue>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> &FilterValue {
        // Default populates every field, so the lookup cannot miss.
        &self.0[&field]
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Field, FilterValue> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = (&'a Field, &'a FilterValue);

    type IntoIter = indexmap::map::Iter<'a, Field, FilterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> FromIterator<(Field, V)> for FilterSet
where
    V: Into<FilterValue>,
{
    fn from_iter<T: IntoIterator<Item = (Field, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut filters, (field, value)| {
                filters.set(field, value);
                filters
            })
    }
}
