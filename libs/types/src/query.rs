//! Id-filtered selection over a dataset
//!
//! Output follows the dataset's order, never the order of the filter.
//! Unknown ids are skipped and repeated ids do not repeat records.

use crate::dataset::Dataset;
use crate::entity::Entity;
use crate::filter::IdentifierFilter;

/// Records admitted by `filter`; the whole dataset when it is empty
pub fn select<T>(dataset: &Dataset<T>, filter: &IdentifierFilter) -> Vec<T>
where
    T: Entity + Clone,
{
    if filter.is_empty() {
        return dataset.all().to_vec();
    }

    let wanted = filter.id_set();
    dataset
        .all()
        .iter()
        .filter(|record| wanted.contains(record.id().as_str()))
        .cloned()
        .collect()
}
