//! Built-in demo catalog, used when no remote catalog is configured.

use catalog_lib::model::Record;
use catalog_lib::source::MemoryRecordSource;

const CATEGORIES: [(&str, &str); 4] = [
    ("lamps", "lamp"),
    ("desks", "desk"),
    ("chairs", "chair"),
    ("shelves", "shelf"),
];
const ITEMS: i64 = 50;

/// Builds a deterministic catalog of 50 items.
pub fn catalog(page_size: usize) -> MemoryRecordSource {
    let records = (1..=ITEMS)
        .map(|id| {
            let (category, noun) = CATEGORIES[(id as usize - 1) % CATEGORIES.len()];
            Record::new(id)
                .set("name", format!("{} #{}", noun, id))
                .set("category", category)
                .set("price", (id * 7 % 90 + 10) as f64 - 0.01)
        })
        .collect();
    MemoryRecordSource::new(records).with_page_size(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_pages() {
        let source = catalog(12);
        assert_eq!(source.len(), 50);
        assert_eq!(source.total_pages(), 5);

        let first = source.page(1).unwrap();
        assert_eq!(first.records()[0].get_str("name"), Some("lamp #1"));
        assert_eq!(first.records()[1].get_str("category"), Some("desks"));
    }
}
