use anyhow::Result;
use chrono::{Days, NaiveDate};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{run_algorithm, Algorithm};
use crate::compare::SortField;
use crate::ingredient::{Category, Ingredient};
use crate::price::Price;

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;

const NAMES: [&str; 12] = [
    "Basil", "Cheddar", "Clams", "Cola", "Flour", "Ham", "Milk", "Onions", "Oregano", "Salami",
    "Shrimp", "Yeast",
];

/// Builds `n` random ingredients expiring within a year of `today`.
///
/// Names, categories, quantities and prices are drawn from small ranges so that every field sees
/// plenty of equal keys.
pub fn random_ingredients<R>(rng: &mut R, n: usize, today: NaiveDate) -> Vec<Ingredient>
where
    R: Rng + ?Sized,
{
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        let name = NAMES.choose(rng).copied().unwrap_or("Salt");
        let category = Category::ALL.choose(rng).copied().unwrap_or(Category::Produce);
        let expires = today
            .checked_add_days(Days::new(rng.gen_range(0..365)))
            .unwrap_or(today);

        values.push(Ingredient::new(
            format!("{name} {}", rng.gen_range(1..=50)),
            category,
            rng.gen_range(1..=1000),
            expires,
            Price::from_cents(rng.gen_range(0..=Price::MAX.cents())),
        ));
    }
    values
}

/// Prints, for growing amounts of random ingredients, how many comparisons each [`Algorithm`]
/// makes when sorting on `field` and how long it takes.
pub fn run_orst(field: SortField) -> Result<()> {
    let mut random = rand::thread_rng();
    let today = chrono::Local::now().date_naive();

    for &n in &[
        ZERO,
        ONE,
        HUNDRED,
        THOUSAND,
        TEN_THOUSAND,
        HUNDRED_THOUSAND,
    ] {
        let values = random_ingredients(&mut random, n, today);

        println!(
            "{} {} {} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold(),
            "sorted by".dimmed(),
            field.to_string().bold()
        );

        let pb = ProgressBar::new(Algorithm::ALL.len() as u64);
        pb.set_style(ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {msg}",
        )?);

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        for algorithm in Algorithm::ALL {
            pb.set_message(algorithm.as_str());

            if algorithm == Algorithm::Bubble && n > TEN_THOUSAND {
                table.add_row(row![algorithm, "Not Doing It".red(), "It is Stupid"]);
            } else {
                let run = run_algorithm(&values, field, algorithm);
                table.add_row(row![
                    algorithm,
                    run.comparisons.to_string(),
                    format!("{:?}", run.elapsed)
                ]);
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        table.printstd();
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_ingredients_stay_in_bounds() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let ingredients = random_ingredients(&mut rng, 500, today);

        assert_eq!(ingredients.len(), 500);
        for i in &ingredients {
            assert!(!i.name().is_empty());
            assert!((1..=1000).contains(&i.quantity()));
            assert!(i.price() <= Price::MAX);
            assert!(i.expiration_date() >= today);
        }
    }

    #[test]
    fn comparisons_grow_with_the_algorithm() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let ingredients = random_ingredients(&mut rng, 400, today);

        let merge = run_algorithm(&ingredients, SortField::Price, Algorithm::Merge);
        let bubble = run_algorithm(&ingredients, SortField::Price, Algorithm::Bubble);
        assert!(merge.comparisons < bubble.comparisons);
    }
}
