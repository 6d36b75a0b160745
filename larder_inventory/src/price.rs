use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ValidationError;

/// A non-negative currency amount, held exactly as a count of hundredths.
///
/// Prices are compared on this integer value, never on their formatted text, so `₱9.50` sorts
/// before `₱10.00`.
///
/// ```
/// use larder_inventory::Price;
///
/// let price: Price = "52.9".parse().unwrap();
/// assert_eq!(price.cents(), 5290);
/// assert_eq!(price.to_string(), "52.90");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// Highest price accepted into an inventory.
    pub const MAX: Price = Price(100_000);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::Malformed {
            field: "price",
            value: s.to_string(),
        };

        let (whole, fraction) = match s.trim().split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s.trim(), ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 2 {
            return Err(malformed());
        }

        let whole: u64 = whole.parse().map_err(|_| malformed())?;
        // "5" means fifty hundredths, "05" five.
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| malformed())? * 10,
            _ => fraction.parse().map_err(|_| malformed())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Price)
            .ok_or_else(malformed)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Turns a [`Price`] into the text a user sees.
///
/// This is the seam through which the presentation layer decides on currency. The inventory only
/// uses it to build the text that search queries are matched against.
pub trait PriceFormat {
    fn format_price(&self, price: Price) -> String;
}

/// A [`PriceFormat`] that prefixes the amount with a currency symbol, e.g. `₱52.99`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    symbol: String,
}

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Philippine peso, `₱`.
    pub fn peso() -> Self {
        Self::new("₱")
    }

    /// `$`
    pub fn dollar() -> Self {
        Self::new("$")
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::peso()
    }
}

impl PriceFormat for Currency {
    fn format_price(&self, price: Price) -> String {
        format!("{}{price}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("52.99".parse::<Price>(), Ok(Price::from_cents(5299)));
        assert_eq!("52.9".parse::<Price>(), Ok(Price::from_cents(5290)));
        assert_eq!("52.09".parse::<Price>(), Ok(Price::from_cents(5209)));
        assert_eq!("52".parse::<Price>(), Ok(Price::from_cents(5200)));
        assert_eq!("52.".parse::<Price>(), Ok(Price::from_cents(5200)));
        assert_eq!(" 0.5 ".parse::<Price>(), Ok(Price::from_cents(50)));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", ".5", "-1", "+1", "1.234", "1,50", "abc", "1.2.3", "₱5"] {
            assert!(bad.parse::<Price>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn display_always_has_two_decimals() {
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(26230).to_string(), "262.30");
    }

    #[test]
    fn orders_on_value_not_text() {
        let nine_fifty: Price = "9.50".parse().unwrap();
        let ten: Price = "10".parse().unwrap();
        assert!(nine_fifty < ten);
        assert!(nine_fifty.to_string() > ten.to_string());
    }

    #[test]
    fn currency_prefixes_symbol() {
        let price = Price::from_cents(5299);
        assert_eq!(Currency::peso().format_price(price), "₱52.99");
        assert_eq!(Currency::dollar().format_price(price), "$52.99");
        assert_eq!(Currency::new("EUR ").format_price(price), "EUR 52.99");
    }
}
