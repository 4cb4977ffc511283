//! Page slicing with clamping.

use serde::Serialize;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total number of pages, never below 1
    pub page_count: usize,
    /// The 1-based page actually shown after clamping
    pub page: usize,
}

impl<T> Page<T> {
    /// True if a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// True if a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Returns the number of pages for `len` items, never below 1.
#[inline]
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slices out page `page` (1-based) of `items`.
///
/// The page number is clamped into `[1, page_count]`, so stale or
/// out-of-range requests land on the nearest valid page. A page size of 0
/// is treated as 1.
///
/// # Example
/// ```
/// use cafe_catalog::paginate;
///
/// let empty: Vec<u32> = vec![];
/// let page = paginate(&empty, 6, 5);
/// assert_eq!(page.page_count, 1);
/// assert!(page.items.is_empty());
/// ```
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page_count = page_count(items.len(), page_size);
    let page = page.clamp(1, page_count);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        items,
        page_count,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_has_one_page() {
        let page = paginate::<u32>(&[], 6, 5);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_middle_and_last_page() {
        let items: Vec<u32> = (1..=14).collect();
        let second = paginate(&items, 6, 2);
        assert_eq!(second.items, vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(second.page_count, 3);
        assert!(second.has_prev() && second.has_next());

        let last = paginate(&items, 6, 3);
        assert_eq!(last.items, vec![13, 14]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let items: Vec<u32> = (1..=14).collect();
        assert_eq!(paginate(&items, 6, 99).page, 3);
        assert_eq!(paginate(&items, 6, 0).page, 1);
        assert_eq!(paginate(&items, 6, 0).items, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let items = vec!['a', 'b'];
        let page = paginate(&items, 0, 2);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.items, vec!['b']);
    }

    proptest! {
        #[test]
        fn prop_pages_partition_input(len in 0usize..100, size in 1usize..20) {
            let items: Vec<usize> = (0..len).collect();
            let count = page_count(len, size);
            prop_assert!(count >= 1);

            let mut seen = Vec::new();
            for p in 1..=count {
                let page = paginate(&items, size, p);
                prop_assert!(page.items.len() <= size);
                seen.extend(page.items);
            }
            prop_assert_eq!(seen, items);
        }
    }
}
