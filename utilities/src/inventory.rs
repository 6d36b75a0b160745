use std::sync::LazyLock;

use chrono::NaiveDate;
use larder_inventory::orst::benchmark::random_ingredients;
use larder_inventory::sample::sample_ingredients;
use larder_inventory::*;
use rand::{rngs::StdRng, SeedableRng};

pub static INVENTORY: LazyLock<TestInventory> = LazyLock::new(TestInventory::new);

/// The day every fixture counts its expiration dates from.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("a valid date")
}

/// An ingredient that only differs from others in the given fields.
pub fn ingredient(name: &str, category: &str, quantity: u32) -> Ingredient {
    Ingredient::new(name, category, quantity, today(), Price::from_cents(1000))
}

pub struct TestInventory {
    /// Banana/Produce/5, Apple/Produce/20, Apple/Dairy/3, in that order.
    pub example: Inventory,

    /// The restaurant's sample stock.
    pub sample: Inventory,

    /// 500 seeded random records with plenty of equal keys.
    pub random: Inventory,

    /// Records that are all equal on every field but the name.
    pub equal_keys: Inventory,
}

impl TestInventory {
    pub fn new() -> Self {
        let mut example = Inventory::new();
        example
            .extend([
                ingredient("Banana", "Produce", 5),
                ingredient("Apple", "Produce", 20),
                ingredient("Apple", "Dairy", 3),
            ])
            .expect("Unable to add the example shelf");

        let mut sample = Inventory::new();
        sample
            .extend(sample_ingredients(today()))
            .expect("Unable to add the sample stock");

        let mut rng = StdRng::seed_from_u64(26);
        let mut random = Inventory::new();
        random
            .extend(random_ingredients(&mut rng, 500, today()))
            .expect("Unable to add random records");

        let mut equal_keys = Inventory::new();
        equal_keys
            .extend((0..40).map(|i| ingredient(&format!("Flour {i:02}"), "Dry Goods", 12)))
            .expect("Unable to add equal records");

        TestInventory {
            example,
            sample,
            random,
            equal_keys,
        }
    }
}

impl Default for TestInventory {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether no neighbouring pair in `records` is out of order on `field` in `direction`.
pub fn is_sorted_by<T>(records: &[T], field: SortField, direction: Direction) -> bool
where
    T: AsRef<Ingredient>,
{
    let compare = field.comparator::<T>(direction);
    records
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != std::cmp::Ordering::Greater)
}
