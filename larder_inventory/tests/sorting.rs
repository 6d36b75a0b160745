use larder_inventory::orst::{self, compare_algorithms, Sorted};
use larder_inventory::*;
use utilities::inventory::{ingredient, is_sorted_by, INVENTORY};

fn ids(records: &[Record]) -> Vec<RecordId> {
    records.iter().map(Record::id).collect()
}

#[test]
fn every_field_and_algorithm_orders_neighbours() {
    for inventory in [&INVENTORY.sample, &INVENTORY.random, &INVENTORY.equal_keys] {
        for field in SortField::ALL {
            for algorithm in Algorithm::ALL {
                for direction in [Direction::Ascending, Direction::Descending] {
                    let compare = field.comparator::<Record>(direction);
                    let sorted = orst::sort(inventory.list(), algorithm, compare);

                    assert_eq!(sorted.records.len(), inventory.len());
                    assert!(
                        is_sorted_by(&sorted.records, field, direction),
                        "{algorithm} on {field} {direction:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn sorting_keeps_every_record() {
    let inventory = &INVENTORY.random;
    let mut original: Vec<RecordId> = inventory.iter().map(Record::id).collect();
    original.sort();

    for algorithm in Algorithm::ALL {
        let sorted = orst::sort_by_field(inventory.list(), SortField::Price, algorithm);
        let mut ids: Vec<RecordId> = sorted.records.iter().map(Record::id).collect();
        ids.sort();
        assert_eq!(ids, original, "{algorithm}");
    }
}

#[test]
fn merge_sort_keeps_equal_records_in_order() {
    for inventory in [&INVENTORY.random, &INVENTORY.equal_keys, &INVENTORY.sample] {
        for field in SortField::ALL {
            let Sorted { records, .. } =
                orst::sort_by_field(inventory.list(), field, Algorithm::Merge);

            for pair in records.windows(2) {
                if field.compare(&pair[0], &pair[1]).is_eq() {
                    let before = inventory.position(pair[0].id()).unwrap();
                    let after = inventory.position(pair[1].id()).unwrap();
                    assert!(before < after, "{field}: {} / {}", pair[0].name(), pair[1].name());
                }
            }
        }
    }
}

#[test]
fn sorting_twice_changes_nothing() {
    for field in SortField::ALL {
        for algorithm in Algorithm::ALL {
            let mut inventory = INVENTORY.random.clone();

            let once = ids(inventory.sort(field, algorithm).records);
            let twice = ids(inventory.sort(field, algorithm).records);

            assert_eq!(once, twice, "{algorithm} on {field}");
            assert!(is_sorted_by(inventory.list(), field, Direction::Ascending));
        }
    }
}

#[test]
fn category_ties_are_broken_by_name() {
    for algorithm in Algorithm::ALL {
        let mut inventory = Inventory::new();
        inventory
            .extend([
                ingredient("Salami", "Meat", 18),
                ingredient("bacon", "meat", 30),
                ingredient("Ham", "Meat", 25),
                ingredient("Cola", "Beverages", 72),
            ])
            .unwrap();

        let sorted = inventory.sort(SortField::Category, algorithm);
        let names: Vec<&str> = sorted.records.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Cola", "bacon", "Ham", "Salami"], "{algorithm}");
    }
}

#[test]
fn apple_and_banana() {
    for algorithm in Algorithm::ALL {
        let mut inventory = INVENTORY.example.clone();

        let sorted = inventory.sort(SortField::Category, algorithm);
        let order: Vec<(&str, &str)> = sorted
            .records
            .iter()
            .map(|r| (r.name(), r.category()))
            .collect();

        assert_eq!(
            order,
            [("Apple", "Dairy"), ("Apple", "Produce"), ("Banana", "Produce")],
            "{algorithm}"
        );
        assert_eq!(sorted.field, SortField::Category);
        assert_eq!(sorted.algorithm, algorithm);
    }
}

#[test]
fn empty_and_single_inventories_sort_to_themselves() {
    for algorithm in Algorithm::ALL {
        for field in SortField::ALL {
            let mut empty = Inventory::new();
            assert!(empty.sort(field, algorithm).records.is_empty());

            let mut single = Inventory::new();
            let id = single.add(ingredient("Yeast", "Dry Goods", 25)).unwrap();
            let sorted = single.sort(field, algorithm);
            assert_eq!(ids(sorted.records), [id], "{algorithm} on {field}");
            assert_eq!(sorted.records[0].name(), "Yeast");
        }
    }
}

#[test]
fn sort_leaves_the_callers_records_alone() {
    let inventory = &INVENTORY.sample;
    let before: Vec<RecordId> = inventory.iter().map(Record::id).collect();

    for algorithm in Algorithm::ALL {
        let _ = orst::sort_by_field(inventory.list(), SortField::Quantity, algorithm);
    }

    let after: Vec<RecordId> = inventory.iter().map(Record::id).collect();
    assert_eq!(before, after);
}

#[test]
fn comparing_algorithms() {
    let runs = compare_algorithms(INVENTORY.sample.list(), SortField::Name).unwrap();
    let algorithms: Vec<Algorithm> = runs.iter().map(|run| run.algorithm).collect();
    assert_eq!(algorithms, Algorithm::ALL);
    assert!(runs.iter().all(|run| run.comparisons > 0));

    let two = &INVENTORY.example.list()[..2];
    assert!(matches!(
        compare_algorithms(two, SortField::Name),
        Err(InvalidArgument(_))
    ));
    assert!(compare_algorithms::<Record>(&[], SortField::Name).is_err());
}

#[test]
fn selectors_are_parsed_or_refused() {
    assert_eq!("Expiration Date".parse(), Ok(SortField::ExpirationDate));
    assert_eq!("price".parse(), Ok(SortField::Price));
    assert!("weight".parse::<SortField>().is_err());

    assert_eq!("Quick Sort".parse(), Ok(Algorithm::Quick));
    assert!("heapsort".parse::<Algorithm>().is_err());
}
