//! # Introduction
//!
//! The core of a restaurant's food inventory: keep ingredient records, search through them and
//! sort them on any column with a choice of hand written sorting algorithms.
//!
//! ```
//! use larder_inventory::{Algorithm, Ingredient, Inventory, Price, SortField};
//! # use chrono::NaiveDate;
//! # let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
//!
//! let mut inventory = Inventory::new();
//! inventory.add(Ingredient::new("Banana", "Produce", 5, date, Price::from_cents(100)))?;
//! inventory.add(Ingredient::new("Apple", "Produce", 20, date, Price::from_cents(100)))?;
//! inventory.add(Ingredient::new("Apple", "Dairy", 3, date, Price::from_cents(100)))?;
//!
//! assert_eq!(inventory.low_stock(10), [("Banana", 5), ("Apple", 3)]);
//!
//! inventory.sort(SortField::Category, Algorithm::Quick);
//! let order: Vec<_> = inventory.iter().map(|r| (r.name(), r.category())).collect();
//! assert_eq!(
//!     order,
//!     [("Apple", "Dairy"), ("Apple", "Produce"), ("Banana", "Produce")]
//! );
//! # Ok::<(), larder_inventory::Error>(())
//! ```

pub mod compare;
pub mod error;
pub mod filter;
pub mod ingredient;
pub mod orst;
pub mod price;
pub mod sample;
pub mod store;

pub use compare::{Direction, SortField};
pub use error::{Error, InvalidArgument, OutOfRange, Result, ValidationError};
pub use filter::Query;
pub use ingredient::{Category, Ingredient, Record, RecordId};
pub use orst::Algorithm;
pub use price::{Currency, Price, PriceFormat};
pub use store::{FilteredView, Inventory, SortedView, DEFAULT_LOW_STOCK_THRESHOLD};

use anyhow::Context;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use prettytable::{row, Table};

/// Clap arguments for the `inventory` command. Install the `larder` binary and run
/// `larder inventory --help` to see what options are available.
///
/// Nothing is saved between runs. Every run starts from the sample stock (or nothing, with
/// `--empty`), adds the `--add` records and then carries out one command.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct InventoryArgs {
    /// Start from an empty inventory instead of the sample stock.
    #[arg(long)]
    empty: bool,

    /// Currency symbol prices are shown and searched with.
    #[arg(long, default_value_t = Currency::default().symbol().to_string())]
    currency: String,

    /// Add a record before running the command. May be repeated.
    #[arg(long = "add", value_name = "NAME,CATEGORY,QUANTITY,MM/DD/YYYY,PRICE")]
    records: Vec<Ingredient>,

    #[command(subcommand)]
    command: InventoryCommands,
}

#[derive(Clone, Subcommand, Debug)]
enum InventoryCommands {
    /// Show the records, optionally only those matching a search.
    List {
        /// Case-insensitive text to look for in any displayed column.
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Sort the records on a column and show them.
    Sort {
        #[arg(short, long, value_enum)]
        by: SortField,

        #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,

        #[arg(long)]
        descending: bool,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Sort the records with every algorithm and compare how they did.
    Compare {
        #[arg(short, long, value_enum, default_value_t = SortField::Name)]
        by: SortField,
    },

    /// List the records that are running low.
    LowStock {
        #[arg(short, long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
        threshold: u32,
    },

    /// Delete the record at an index.
    Remove {
        #[arg(short, long)]
        index: usize,
    },

    /// Replace the record at an index, keeping its place.
    Edit {
        #[arg(short, long)]
        index: usize,

        #[arg(short, long, value_name = "NAME,CATEGORY,QUANTITY,MM/DD/YYYY,PRICE")]
        record: Ingredient,
    },

    /// Count the comparisons each algorithm makes on growing sets of random ingredients.
    Bench {
        #[arg(short, long, value_enum, default_value_t = SortField::Price)]
        by: SortField,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

impl InventoryArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let today = chrono::Local::now().date_naive();
        let mut inventory = Inventory::with_currency(Currency::new(self.currency));

        if !self.empty {
            inventory.extend(sample::sample_ingredients(today))?;
        }
        inventory
            .extend(self.records)
            .context("could not add record")?;

        let currency = inventory.currency().clone();

        match self.command {
            InventoryCommands::List { query, format } => {
                let view = inventory.filter(query.as_deref().unwrap_or_default());
                if !view.query().is_empty() {
                    println!(
                        "{} {} of {} records match `{}`",
                        "Search:".bold().blue(),
                        view.len(),
                        inventory.len(),
                        view.query().as_str()
                    );
                }
                print_records(view.matches().iter().copied(), &currency, format)?;
            }

            InventoryCommands::Sort {
                by,
                algorithm,
                descending,
                format,
            } => {
                let direction = if descending {
                    Direction::Descending
                } else {
                    Direction::Ascending
                };

                let view = inventory.sort_with(by, algorithm, direction);
                if format == Format::Table {
                    println!(
                        "{} {} {} {} {}",
                        "Sorted by".bold().blue(),
                        by.to_string().bold(),
                        "with".dimmed(),
                        algorithm.to_string().bold(),
                        format!("in {:?}", view.elapsed).dimmed()
                    );
                }
                print_records(view.records.iter().enumerate(), &currency, format)?;
            }

            InventoryCommands::Compare { by } => {
                let runs = orst::compare_algorithms(inventory.list(), by)?;

                println!(
                    "{} {} {} {}",
                    "Sorting".bold().underline().blue(),
                    inventory.len().to_string().bold(),
                    "records by".dimmed(),
                    by.to_string().bold()
                );

                let mut table = Table::new();
                table.add_row(row![
                    "Sorter".bold(),
                    "Complexity".bold(),
                    "Stable".bold(),
                    "Comparisons Made".bold(),
                    "Time Taken".bold()
                ]);
                for run in runs {
                    let stable = if run.algorithm.is_stable() { "yes" } else { "no" };
                    table.add_row(row![
                        run.algorithm,
                        run.algorithm.complexity(),
                        stable,
                        run.comparisons.to_string(),
                        format!("{:?}", run.elapsed)
                    ]);
                }
                table.printstd();
            }

            InventoryCommands::LowStock { threshold } => {
                let low = inventory.low_stock(threshold);
                if low.is_empty() {
                    println!("{}", "All ingredients are well stocked.".green());
                } else {
                    println!(
                        "{} {}",
                        "Low stock alert:".bold().red(),
                        format!("{threshold} or fewer left").dimmed()
                    );
                    for (name, quantity) in low {
                        println!("  {} {}", name.bold(), format!("({quantity} left)").yellow());
                    }
                }
            }

            InventoryCommands::Remove { index } => {
                let record = inventory.remove_at(index)?;
                println!("{} {}", "Removed".bold().red(), record.name().bold());
                print_records(inventory.iter().enumerate(), &currency, Format::Table)?;
            }

            InventoryCommands::Edit { index, record } => {
                inventory.replace_at(index, record)?;
                println!("{} {}", "Updated record".bold().green(), index);
                print_records(inventory.iter().enumerate(), &currency, Format::Table)?;
            }

            InventoryCommands::Bench { by } => orst::benchmark::run_orst(by)?,
        }

        Ok(())
    }
}

fn print_records<'a, I>(records: I, currency: &Currency, format: Format) -> anyhow::Result<()>
where
    I: IntoIterator<Item = (usize, &'a Record)>,
{
    match format {
        Format::Json => {
            let records: Vec<&Record> = records.into_iter().map(|(_, record)| record).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Format::Table => {
            let mut table = Table::new();
            table.add_row(row![
                "Index".bold(),
                "Name".bold(),
                "Category".bold(),
                "Quantity".bold(),
                "Expiration Date".bold(),
                "Price".bold()
            ]);

            for (index, record) in records {
                let quantity = if record.quantity() <= DEFAULT_LOW_STOCK_THRESHOLD {
                    record.quantity().to_string().red()
                } else {
                    record.quantity().to_string().normal()
                };

                table.add_row(row![
                    index,
                    record.name(),
                    record.category(),
                    quantity,
                    record.formatted_date(),
                    currency.format_price(record.price())
                ]);
            }

            table.printstd();
        }
    }

    Ok(())
}
