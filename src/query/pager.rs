//! Result-set paging.

/// Films shown per page.
pub const FILMS_PER_PAGE: usize = 12;

/// Total number of pages for a result set, never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// The 1-based `page` slice of `items`.
///
/// Past the end this is the empty slice, not an error.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1) * page_size;
    if start >= items.len() {
        return &[];
    }

    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_result_set_still_has_one_page() {
        assert_eq!(total_pages(0, FILMS_PER_PAGE), 1);
        assert_eq!(total_pages(1, FILMS_PER_PAGE), 1);
        assert_eq!(total_pages(12, FILMS_PER_PAGE), 1);
        assert_eq!(total_pages(13, FILMS_PER_PAGE), 2);
        assert_eq!(total_pages(25, FILMS_PER_PAGE), 3);
    }

    #[test]
    fn pages_partition_the_result_set() {
        let items: Vec<usize> = (0..25).collect();
        let pages = total_pages(items.len(), FILMS_PER_PAGE);
        assert_eq!(pages, 3);

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(page_slice(&items, page, FILMS_PER_PAGE));
        }
        assert_eq!(rebuilt, items);

        assert_eq!(page_slice(&items, 3, FILMS_PER_PAGE).len(), 1);
    }

    #[test]
    fn slices_past_the_end_are_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(page_slice(&items, 2, FILMS_PER_PAGE).is_empty());
        assert!(page_slice::<usize>(&[], 1, FILMS_PER_PAGE).is_empty());
    }
}
