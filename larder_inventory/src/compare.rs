//! Turns a choice of column into a three-way comparison between two ingredients.
//!
//! ```
//! use std::cmp::Ordering;
//! use larder_inventory::{Ingredient, Price, SortField};
//! # use chrono::NaiveDate;
//! # let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//!
//! let apple = Ingredient::new("apple", "Produce", 20, date, Price::from_cents(100));
//! let banana = Ingredient::new("Banana", "Produce", 5, date, Price::from_cents(100));
//!
//! assert_eq!(SortField::Name.compare(&apple, &banana), Ordering::Less);
//! assert_eq!(SortField::Quantity.compare(&apple, &banana), Ordering::Greater);
//! assert_eq!(SortField::Price.compare(&apple, &banana), Ordering::Equal);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::InvalidArgument;
use crate::ingredient::Ingredient;

/// The key records are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SortField {
    /// Case-insensitive name
    Name,

    /// Case-insensitive category, then name within a category
    Category,

    Quantity,

    /// Earliest date first
    ExpirationDate,

    Price,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Category,
        SortField::Quantity,
        SortField::ExpirationDate,
        SortField::Price,
    ];

    /// Compares two ingredients on this field, ascending.
    ///
    /// Only [`SortField::Category`] has a tie-break. Everything else returns
    /// [`Ordering::Equal`] for equal keys and leaves the tie to the sorting algorithm.
    pub fn compare(self, a: &Ingredient, b: &Ingredient) -> Ordering {
        match self {
            SortField::Name => cmp_ignore_case(a.name(), b.name()),
            SortField::Category => cmp_ignore_case(a.category(), b.category())
                .then_with(|| cmp_ignore_case(a.name(), b.name())),
            SortField::Quantity => a.quantity().cmp(&b.quantity()),
            SortField::ExpirationDate => a.expiration_date().cmp(&b.expiration_date()),
            SortField::Price => a.price().cmp(&b.price()),
        }
    }

    /// A comparator for this field running in `direction`.
    pub fn comparator<T>(self, direction: Direction) -> impl Fn(&T, &T) -> Ordering + Copy
    where
        T: AsRef<Ingredient>,
    {
        move |a: &T, b: &T| direction.apply(self.compare(a.as_ref(), b.as_ref()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Category => "Category",
            SortField::Quantity => "Quantity",
            SortField::ExpirationDate => "Expiration Date",
            SortField::Price => "Price",
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the column titles (`Expiration Date`) as well as the command line spellings
/// (`expiration-date`), in any case. Anything else is an [`InvalidArgument`].
impl FromStr for SortField {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "category" => Ok(SortField::Category),
            "quantity" => Ok(SortField::Quantity),
            "expiration-date" | "expiration date" | "expiration_date" | "expiration" => {
                Ok(SortField::ExpirationDate)
            }
            "price" => Ok(SortField::Price),
            _ => Err(InvalidArgument(format!("unknown sort field `{s}`"))),
        }
    }
}

/// Which way round a sort runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Lexicographic comparison after lowercasing every character.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use chrono::NaiveDate;

    fn ingredient(name: &str, category: &str, quantity: u32, day: u32, cents: u64) -> Ingredient {
        let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
        Ingredient::new(name, category, quantity, date, Price::from_cents(cents))
    }

    #[test]
    fn ignores_case() {
        assert_eq!(cmp_ignore_case("apple", "APPLE"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Zucchini", "apple"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("Jalapeños", "JALAPEÑOS"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("", "a"), Ordering::Less);
    }

    #[test]
    fn category_breaks_ties_on_name() {
        let apple = ingredient("apple", "PRODUCE", 1, 1, 1);
        let banana = ingredient("Banana", "produce", 1, 1, 1);
        let milk = ingredient("Milk", "Dairy", 1, 1, 1);

        assert_eq!(SortField::Category.compare(&apple, &banana), Ordering::Less);
        assert_eq!(SortField::Category.compare(&banana, &apple), Ordering::Greater);
        assert_eq!(SortField::Category.compare(&milk, &apple), Ordering::Less);
    }

    #[test]
    fn other_fields_have_no_tie_break() {
        let a = ingredient("A", "Meat", 7, 4, 500);
        let b = ingredient("B", "Dairy", 7, 4, 500);

        for field in [SortField::Quantity, SortField::ExpirationDate, SortField::Price] {
            assert_eq!(field.compare(&a, &b), Ordering::Equal, "{field}");
        }
    }

    #[test]
    fn numeric_and_date_fields() {
        let early_cheap = ingredient("A", "Meat", 9, 2, 950);
        let late_dear = ingredient("B", "Meat", 10, 20, 1000);

        assert_eq!(SortField::Quantity.compare(&early_cheap, &late_dear), Ordering::Less);
        assert_eq!(SortField::ExpirationDate.compare(&early_cheap, &late_dear), Ordering::Less);
        assert_eq!(SortField::Price.compare(&early_cheap, &late_dear), Ordering::Less);
    }

    #[test]
    fn descending_reverses() {
        let a = ingredient("A", "Meat", 1, 1, 1);
        let b = ingredient("B", "Meat", 2, 1, 1);

        let asc = SortField::Quantity.comparator::<Ingredient>(Direction::Ascending);
        let desc = SortField::Quantity.comparator::<Ingredient>(Direction::Descending);
        assert_eq!(asc(&a, &b), Ordering::Less);
        assert_eq!(desc(&a, &b), Ordering::Greater);
        assert_eq!(desc(&a, &a), Ordering::Equal);
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("Name".parse(), Ok(SortField::Name));
        assert_eq!("expiration date".parse(), Ok(SortField::ExpirationDate));
        assert_eq!("Expiration-Date".parse(), Ok(SortField::ExpirationDate));
        assert_eq!(" PRICE ".parse(), Ok(SortField::Price));
        assert!("supplier".parse::<SortField>().is_err());
        assert!("".parse::<SortField>().is_err());
    }
}
