use crate::ingredient::Ingredient;
use crate::price::PriceFormat;

/// A search-as-you-type query.
///
/// A record matches when the query, ignoring case, appears anywhere in one of the fields as the
/// user sees them: name, category, the `MM/DD/YYYY` expiration date, the formatted price or the
/// quantity. The query is plain text, so `.` or `(` match only themselves.
///
/// ```
/// use larder_inventory::{Currency, Ingredient, Price, Query};
/// # use chrono::NaiveDate;
/// # let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
///
/// let oil = Ingredient::new("Olive Oil", "Produce", 80, date, Price::from_cents(5299));
/// let peso = Currency::peso();
///
/// assert!(Query::new("olive").matches(&oil, &peso));
/// assert!(Query::new("₱52.9").matches(&oil, &peso));
/// assert!(Query::new("03/14").matches(&oil, &peso));
/// assert!(!Query::new("dairy").matches(&oil, &peso));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    /// Surrounding whitespace is ignored; a blank query matches everything.
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches<P>(&self, ingredient: &Ingredient, format: &P) -> bool
    where
        P: PriceFormat + ?Sized,
    {
        if self.is_empty() {
            return true;
        }

        [
            ingredient.name().to_string(),
            ingredient.category().to_string(),
            ingredient.formatted_date(),
            format.format_price(ingredient.price()),
            ingredient.quantity().to_string(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
