use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ValidationError;
use crate::price::Price;

/// Format used to display expiration dates, e.g. `03/14/2025`.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// One ingredient on the shelf.
///
/// An `Ingredient` is a plain value. Editing a record replaces its ingredient wholesale, see
/// [`Inventory::replace_at`](crate::Inventory::replace_at). Nothing is validated here; the
/// [`Inventory`](crate::Inventory) checks names, quantities and prices when a value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    name: String,
    category: String,
    quantity: u32,
    expiration_date: NaiveDate,
    price: Price,
}

impl Ingredient {
    /// Builds an ingredient. Surrounding whitespace is trimmed off the name and category.
    pub fn new(
        name: impl AsRef<str>,
        category: impl AsRef<str>,
        quantity: u32,
        expiration_date: NaiveDate,
        price: Price,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            category: category.as_ref().trim().to_string(),
            quantity,
            expiration_date,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// The expiration date as it is displayed.
    pub fn formatted_date(&self) -> String {
        self.expiration_date.format(DATE_FORMAT).to_string()
    }
}

/// Reads `NAME,CATEGORY,QUANTITY,DATE,PRICE`, the format taken by `--add` on the command line.
///
/// The date may be written as `MM/DD/YYYY` or `YYYY-MM-DD`.
///
/// ```
/// use larder_inventory::Ingredient;
///
/// let basil: Ingredient = "Basil, Spices, 38, 03/14/2026, 110.25".parse().unwrap();
/// assert_eq!(basil.name(), "Basil");
/// assert_eq!(basil.quantity(), 38);
/// assert_eq!(basil.price().cents(), 11025);
/// ```
impl FromStr for Ingredient {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[name, category, quantity, date, price] = fields.as_slice() else {
            return Err(ValidationError::Malformed {
                field: "record",
                value: s.to_string(),
            });
        };

        let quantity = quantity
            .parse()
            .map_err(|_| ValidationError::Malformed {
                field: "quantity",
                value: quantity.to_string(),
            })?;

        let expiration_date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
            .map_err(|_| ValidationError::Malformed {
                field: "expiration date",
                value: date.to_string(),
            })?;

        Ok(Ingredient::new(
            name,
            category,
            quantity,
            expiration_date,
            price.parse()?,
        ))
    }
}

/// The categories a kitchen usually files its stock under.
///
/// Categories on an [`Ingredient`] are free text; this list only offers the common spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Seafood,
    DryGoods,
    Spices,
    Beverages,
    Frozen,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Produce,
        Category::Dairy,
        Category::Meat,
        Category::Seafood,
        Category::DryGoods,
        Category::Spices,
        Category::Beverages,
        Category::Frozen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Seafood => "Seafood",
            Category::DryGoods => "Dry Goods",
            Category::Spices => "Spices",
            Category::Beverages => "Beverages",
            Category::Frozen => "Frozen",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Identifies a record for as long as it stays in its [`Inventory`](crate::Inventory), across
/// sorts and edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordId(pub(crate) u64);

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An [`Ingredient`] that has been accepted into an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: RecordId,
    #[serde(flatten)]
    ingredient: Ingredient,
}

impl Record {
    pub(crate) fn new(id: RecordId, ingredient: Ingredient) -> Self {
        Self { id, ingredient }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn ingredient(&self) -> &Ingredient {
        &self.ingredient
    }

    pub fn into_ingredient(self) -> Ingredient {
        self.ingredient
    }
}

impl AsRef<Ingredient> for Ingredient {
    fn as_ref(&self) -> &Ingredient {
        self
    }
}

impl AsRef<Ingredient> for Record {
    fn as_ref(&self) -> &Ingredient {
        &self.ingredient
    }
}

impl std::ops::Deref for Record {
    type Target = Ingredient;

    fn deref(&self) -> &Self::Target {
        &self.ingredient
    }
}
