pub(crate) mod bubble_sorter;
pub(crate) mod merge_sorter;
pub(crate) mod quick_sorter;
