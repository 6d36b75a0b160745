use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::time::Duration;

use tracing::debug;

use crate::compare::{Direction, SortField};
use crate::error::{Error, InvalidArgument, OutOfRange, ValidationError};
use crate::filter::Query;
use crate::ingredient::{Ingredient, Record, RecordId};
use crate::orst::{self, Algorithm};
use crate::price::{Currency, Price, PriceFormat};

/// Quantities accepted into an inventory.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=1000;

/// Records holding this many units or fewer are reported by [`Inventory::low_stock`] by default.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Checks the rules every record in an [`Inventory`] obeys.
pub fn validate(ingredient: &Ingredient) -> Result<(), ValidationError> {
    if ingredient.name().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !QUANTITY_RANGE.contains(&ingredient.quantity()) {
        return Err(ValidationError::QuantityOutOfRange(ingredient.quantity()));
    }
    if ingredient.price() > Price::MAX {
        return Err(ValidationError::PriceOutOfRange(ingredient.price()));
    }
    Ok(())
}

/// An ordered collection of ingredient records.
///
/// Records stay in the order they were added until a sort commits a new one. The inventory knows
/// nothing about how it is shown; the currency `C` is only used to build the text that
/// [`Inventory::filter`] searches through.
///
/// ```
/// use larder_inventory::{Algorithm, Ingredient, Inventory, Price, SortField};
/// # use chrono::NaiveDate;
/// # let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
///
/// let mut inventory = Inventory::new();
/// inventory.add(Ingredient::new("Yeast", "Dry Goods", 67, date, Price::from_cents(5550)))?;
/// inventory.add(Ingredient::new("Basil", "Produce", 30, date, Price::from_cents(4020)))?;
///
/// let sorted = inventory.sort(SortField::Name, Algorithm::Merge);
/// assert_eq!(sorted.records[0].name(), "Basil");
/// assert_eq!(inventory.list()[1].name(), "Yeast");
/// # Ok::<(), larder_inventory::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Inventory<C = Currency> {
    records: Vec<Record>,
    next_id: u64,
    currency: C,
}

impl Inventory {
    /// An empty inventory priced in pesos.
    pub fn new() -> Self {
        Self::with_currency(Currency::default())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Inventory<C>
where
    C: PriceFormat,
{
    pub fn with_currency(currency: C) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            currency,
        }
    }

    pub fn currency(&self) -> &C {
        &self.currency
    }

    /// Appends `ingredient` and returns the id it was filed under.
    ///
    /// A rejected ingredient leaves the inventory untouched.
    pub fn add(&mut self, ingredient: Ingredient) -> Result<RecordId, ValidationError> {
        validate(&ingredient)?;

        let id = RecordId(self.next_id);
        self.next_id += 1;

        debug!(%id, name = ingredient.name(), "adding record");
        self.records.push(Record::new(id, ingredient));
        Ok(id)
    }

    /// Adds every ingredient in turn, stopping at the first one that is rejected.
    pub fn extend<I>(&mut self, ingredients: I) -> Result<Vec<RecordId>, ValidationError>
    where
        I: IntoIterator<Item = Ingredient>,
    {
        ingredients
            .into_iter()
            .map(|ingredient| self.add(ingredient))
            .collect()
    }

    /// Removes and returns the record at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Record, OutOfRange> {
        self.check_index(index)?;

        let record = self.records.remove(index);
        debug!(index, id = %record.id(), name = record.name(), "removed record");
        Ok(record)
    }

    /// Swaps the ingredient at `index` for `ingredient`, keeping the record's position and id.
    ///
    /// Fails with [`Error::OutOfRange`] or [`Error::Validation`] without changing anything.
    pub fn replace_at(&mut self, index: usize, ingredient: Ingredient) -> Result<RecordId, Error> {
        self.check_index(index)?;
        validate(&ingredient)?;

        let id = self.records[index].id();
        debug!(index, %id, name = ingredient.name(), "replacing record");
        self.records[index] = Record::new(id, ingredient);
        Ok(id)
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Where the record with `id` currently sits.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in their current order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Commits a new order.
    ///
    /// `new_order` must hold exactly the records already in the inventory, as returned by
    /// [`orst::sort`] over [`Inventory::list`]. Anything else is an [`InvalidArgument`] and the
    /// current order is kept.
    pub fn replace_all(&mut self, new_order: Vec<Record>) -> Result<(), InvalidArgument> {
        let current: HashSet<RecordId> = self.records.iter().map(Record::id).collect();
        let mut seen = HashSet::with_capacity(new_order.len());

        let same_records = new_order.len() == self.records.len()
            && new_order
                .iter()
                .all(|record| current.contains(&record.id()) && seen.insert(record.id()));

        if !same_records {
            return Err(InvalidArgument(
                "a new order must hold exactly the records already in the inventory".to_string(),
            ));
        }

        self.commit(new_order);
        Ok(())
    }

    /// Sorts ascending on `field` with `algorithm` and keeps the result.
    pub fn sort(&mut self, field: SortField, algorithm: Algorithm) -> SortedView<'_> {
        self.sort_with(field, algorithm, Direction::Ascending)
    }

    /// Sorts on `field` with `algorithm` in `direction` and keeps the result.
    pub fn sort_with(
        &mut self,
        field: SortField,
        algorithm: Algorithm,
        direction: Direction,
    ) -> SortedView<'_> {
        let sorted = orst::sort(&self.records, algorithm, field.comparator::<Record>(direction));
        debug!(%field, %algorithm, ?direction, elapsed = ?sorted.elapsed, "sorted inventory");

        // A sorted copy is a permutation of what is already here.
        self.commit(sorted.records);

        SortedView {
            records: &self.records,
            field,
            algorithm,
            direction,
            elapsed: sorted.elapsed,
        }
    }

    /// The records matching `query`, in current order, next to their index in the inventory.
    pub fn filter(&self, query: &str) -> FilteredView<'_> {
        let query = Query::new(query);
        let matches = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| query.matches(record, &self.currency))
            .collect();

        FilteredView { query, matches }
    }

    /// Name and quantity of every record holding `threshold` units or fewer, in current order.
    pub fn low_stock(&self, threshold: u32) -> Vec<(&str, u32)> {
        self.records
            .iter()
            .filter(|record| record.quantity() <= threshold)
            .map(|record| (record.name(), record.quantity()))
            .collect()
    }

    fn commit(&mut self, new_order: Vec<Record>) {
        debug!(len = new_order.len(), "committing new order");
        self.records = new_order;
    }

    fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(OutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}

impl<'a, C> IntoIterator for &'a Inventory<C> {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The inventory right after a sort.
#[derive(Debug, Clone, Copy)]
pub struct SortedView<'a> {
    pub records: &'a [Record],
    pub field: SortField,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub elapsed: Duration,
}

/// The records a query matched. The inventory itself is not reordered or changed.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    query: Query,
    matches: Vec<(usize, &'a Record)>,
}

impl<'a> FilteredView<'a> {
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Each match paired with its index in the inventory, for use with
    /// [`Inventory::remove_at`] and [`Inventory::replace_at`].
    pub fn matches(&self) -> &[(usize, &'a Record)] {
        &self.matches
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.matches.iter().map(|&(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
