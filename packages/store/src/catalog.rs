//! Client-side store of the last fetched collections.
//!
//! [`Catalog`] holds at most one collection per [`EntityKind`]. A fetch replaces
//! the collection wholesale; nothing is diffed or merged. The UI provides it as
//! a `Signal<Catalog>` context and renders tables and counters from it.

use crate::models::{CustomerRecord, PropertyRecord, Resource};

/// State of one collection in the [`Catalog`].
#[derive(Clone, Debug, PartialEq)]
pub enum Collection<R> {
    /// No fetch has succeeded yet.
    NotLoaded,
    Loaded(Vec<R>),
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Collection::NotLoaded
    }
}

impl<R> Collection<R> {
    pub fn records(&self) -> Option<&[R]> {
        match self {
            Collection::NotLoaded => None,
            Collection::Loaded(records) => Some(records),
        }
    }

    /// Number of records, zero until the first successful fetch.
    pub fn len(&self) -> usize {
        self.records().map_or(0, <[R]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The most recent fetch result for each entity type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub properties: Collection<PropertyRecord>,
    pub customers: Collection<CustomerRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection<R: Resource>(&self) -> &Collection<R> {
        R::collection(self)
    }

    /// Replace the collection for `R`, dropping whatever was there before.
    pub fn replace<R: Resource>(&mut self, records: Vec<R>) {
        *R::collection_mut(self) = Collection::Loaded(records);
    }

    pub fn count<R: Resource>(&self) -> usize {
        R::collection(self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerStatus;

    fn customer(id: i64) -> CustomerRecord {
        CustomerRecord {
            id,
            name: format!("Customer {id}"),
            email: format!("c{id}@example.com"),
            phone: None,
            status: CustomerStatus::Active,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_starts_not_loaded() {
        let catalog = Catalog::new();
        assert_eq!(catalog.properties, Collection::NotLoaded);
        assert_eq!(catalog.count::<PropertyRecord>(), 0);
        assert!(catalog.collection::<CustomerRecord>().records().is_none());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![customer(1), customer(2), customer(3)]);
        assert_eq!(catalog.count::<CustomerRecord>(), 3);

        catalog.replace(vec![customer(9)]);
        let ids: Vec<i64> = catalog
            .collection::<CustomerRecord>()
            .records()
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![9]);
    }

    #[test]
    fn test_collections_are_independent() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![customer(1)]);
        assert_eq!(catalog.properties, Collection::NotLoaded);

        catalog.replace(Vec::<PropertyRecord>::new());
        assert_eq!(catalog.properties, Collection::Loaded(vec![]));
        assert_eq!(catalog.count::<CustomerRecord>(), 1);
    }
}
