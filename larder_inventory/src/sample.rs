//! Stock for a small pizza restaurant, used to seed a fresh inventory.

use chrono::{Days, Months, NaiveDate};

use crate::ingredient::{Category, Ingredient};
use crate::price::Price;

enum Shelf {
    Days(u64),
    Weeks(u64),
    Months(u32),
}

use Category::*;
use Shelf::{Days as D, Months as M, Weeks as W};

#[rustfmt::skip]
const STOCK: &[(&str, Category, u32, Shelf, u64)] = &[
    ("Pizza Sauce", Produce, 25, M(2), 120_75),
    ("Tomato Paste", Produce, 18, M(6), 95_50),
    ("Olive Oil", Produce, 15, M(12), 350_00),
    ("Garlic Puree", Produce, 12, M(3), 85_25),
    ("Basil Pesto", Produce, 8, M(4), 280_50),
    ("Mozzarella", Dairy, 45, W(2), 320_75),
    ("Parmesan", Dairy, 22, M(3), 450_00),
    ("Provolone", Dairy, 18, W(3), 380_25),
    ("Ricotta", Dairy, 15, D(10), 275_50),
    ("Cheddar", Dairy, 20, W(4), 295_80),
    ("Pepperoni", Meat, 35, W(3), 520_75),
    ("Italian Sausage", Meat, 28, W(2), 480_50),
    ("Ham", Meat, 25, W(2), 420_25),
    ("Bacon", Meat, 30, W(3), 380_00),
    ("Chicken Breast", Meat, 22, D(7), 350_75),
    ("Ground Beef", Meat, 20, D(5), 450_25),
    ("Salami", Meat, 18, W(4), 510_50),
    ("Mushrooms", Produce, 32, D(10), 120_75),
    ("Green Peppers", Produce, 28, D(14), 95_50),
    ("Onions", Produce, 40, D(21), 65_25),
    ("Black Olives", Produce, 25, M(6), 145_80),
    ("Tomatoes", Produce, 35, D(7), 88_90),
    ("Spinach", Produce, 20, D(5), 75_25),
    ("Jalapeños", Produce, 15, D(12), 110_50),
    ("Pineapple", Produce, 18, D(8), 165_75),
    ("Pizza Flour", DryGoods, 50, M(8), 280_00),
    ("Bread Flour", DryGoods, 35, M(9), 245_50),
    ("Yeast", DryGoods, 25, M(6), 185_75),
    ("Sugar", DryGoods, 40, M(12), 65_25),
    ("Salt", DryGoods, 60, M(24), 45_80),
    ("Oregano", Spices, 45, M(18), 95_50),
    ("Basil", Spices, 38, M(12), 110_25),
    ("Garlic Powder", Spices, 42, M(15), 85_75),
    ("Red Pepper Flakes", Spices, 35, M(20), 75_50),
    ("Black Pepper", Spices, 48, M(24), 120_00),
    ("Anchovies", Seafood, 12, M(3), 320_75),
    ("Shrimp", Seafood, 15, D(5), 580_50),
    ("Clams", Seafood, 10, D(4), 450_25),
    ("Artichoke Hearts", Produce, 18, M(6), 220_50),
    ("Sun-Dried Tomatoes", Produce, 22, M(8), 285_75),
    ("Goat Cheese", Dairy, 16, W(3), 380_25),
    ("Feta Cheese", Dairy, 20, W(4), 320_50),
    ("Cola", Beverages, 72, M(9), 45_00),
    ("Lemonade", Beverages, 65, M(8), 52_50),
    ("Iced Tea", Beverages, 58, M(7), 48_75),
    ("Orange Soda", Beverages, 45, M(10), 47_25),
    ("French Fries", Frozen, 35, M(6), 185_50),
    ("Garlic Bread", Frozen, 28, M(5), 220_75),
    ("Mozzarella Sticks", Frozen, 32, M(4), 280_25),
];

/// The sample stock, with expiration dates counted from `today`.
pub fn sample_ingredients(today: NaiveDate) -> Vec<Ingredient> {
    STOCK
        .iter()
        .map(|(name, category, quantity, shelf, cents)| {
            let expires = match *shelf {
                D(days) => today.checked_add_days(Days::new(days)),
                W(weeks) => today.checked_add_days(Days::new(weeks * 7)),
                M(months) => today.checked_add_months(Months::new(months)),
            };

            Ingredient::new(
                name,
                category,
                *quantity,
                expires.unwrap_or(NaiveDate::MAX),
                Price::from_cents(*cents),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{validate, Inventory};

    #[test]
    fn every_sample_is_accepted() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let samples = sample_ingredients(today);
        assert_eq!(samples.len(), 49);

        for ingredient in &samples {
            assert_eq!(validate(ingredient), Ok(()));
            assert!(ingredient.expiration_date() > today);
        }

        let mut inventory = Inventory::new();
        assert!(inventory.extend(samples).is_ok());
        assert_eq!(inventory.list()[0].name(), "Pizza Sauce");
    }

    #[test]
    fn dates_count_from_today() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let samples = sample_ingredients(today);

        let sauce = &samples[0];
        assert_eq!(sauce.expiration_date(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());

        let mozzarella = samples.iter().find(|i| i.name() == "Mozzarella").unwrap();
        assert_eq!(mozzarella.expiration_date(), NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
    }
}
