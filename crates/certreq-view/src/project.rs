use crate::filter::{FilterState, StatusFilter};
use crate::row::ListRow;
use crate::stats::{duplicate_names, normalized_name};

/// One derived page of a filtered dataset.
///
/// `total_items` and `total_pages` reflect the filtered count, never the
/// unfiltered dataset size. Zero matching rows means zero pages; callers must
/// treat page 0 as "no pages" rather than clamping to 1.
#[derive(Debug, Clone)]
pub struct Projection<'a, T> {
    pub page_items: Vec<&'a T>,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Projection<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }
}

/// Derive the current page: discriminant filter, then search, then pagination.
///
/// `page_size` must be at least 1; a zero page size degenerates to "no pages",
/// mirroring the beyond-last-page rule instead of panicking.
pub fn project<'a, T: ListRow>(
    dataset: &'a [T],
    state: &FilterState,
    page_size: usize,
) -> Projection<'a, T> {
    let mut filtered: Vec<&T> = match state.filter() {
        StatusFilter::All => dataset.iter().collect(),
        StatusFilter::Status(wanted) => dataset
            .iter()
            .filter(|row| row.status() == Some(wanted))
            .collect(),
        StatusFilter::Duplicates => {
            let duplicated = duplicate_names(dataset);
            let mut rows: Vec<&T> = dataset
                .iter()
                .filter(|row| duplicated.contains(&normalized_name(row.display_name())))
                .collect();
            rows.sort_by_key(|row| normalized_name(row.display_name()));
            rows
        }
    };

    let needle = state.search().trim().to_lowercase();
    if !needle.is_empty() {
        filtered.retain(|row| row.matches_search(&needle));
    }

    let total_items = filtered.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };
    let (start, end) = page_bounds(total_items, state.page(), page_size);
    Projection {
        page_items: filtered[start..end].to_vec(),
        total_items,
        total_pages,
    }
}

/// Slice bounds for a 1-based page, clipped to the collection length. Pages
/// beyond the end yield an empty slice, not an error.
fn page_bounds(len: usize, page: usize, page_size: usize) -> (usize, usize) {
    if page == 0 || page_size == 0 {
        return (0, 0);
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::page_bounds;

    #[test]
    fn bounds_clip_to_length() {
        assert_eq!(page_bounds(5, 1, 2), (0, 2));
        assert_eq!(page_bounds(5, 3, 2), (4, 5));
        assert_eq!(page_bounds(5, 4, 2), (5, 5));
        assert_eq!(page_bounds(0, 1, 2), (0, 0));
    }
}
