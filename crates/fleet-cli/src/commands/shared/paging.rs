/// Rows per page when neither `--limit` nor `general.page_size` applies.
pub const FALLBACK_PAGE_SIZE: u32 = 10;

/// Compute the effective page size: `--limit` wins over config, which wins
/// over the fallback.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    let limit = flag.unwrap_or(configured);
    if limit == 0 { FALLBACK_PAGE_SIZE } else { limit }
}

/// Slice one 1-based page out of the full record list.
///
/// The backend returns every record; paging happens client-side the way the
/// web tables paged. A page past the end is empty, not an error.
#[must_use]
pub fn paginate<T: Clone>(records: &[T], page: u32, limit: u32) -> Vec<T> {
    let page = page.max(1);
    let start = ((page - 1) as usize).saturating_mul(limit as usize);
    records
        .iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{FALLBACK_PAGE_SIZE, effective_limit, paginate};

    #[test]
    fn flag_wins_over_config() {
        assert_eq!(effective_limit(Some(5), 25), 5);
        assert_eq!(effective_limit(None, 25), 25);
    }

    #[test]
    fn zero_limit_falls_back() {
        assert_eq!(effective_limit(Some(0), 25), FALLBACK_PAGE_SIZE);
        assert_eq!(effective_limit(None, 0), FALLBACK_PAGE_SIZE);
    }

    #[test]
    fn pages_slice_in_order() {
        let records: Vec<u32> = (1..=7).collect();
        assert_eq!(paginate(&records, 1, 3), vec![1, 2, 3]);
        assert_eq!(paginate(&records, 2, 3), vec![4, 5, 6]);
        assert_eq!(paginate(&records, 3, 3), vec![7]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let records: Vec<u32> = (1..=4).collect();
        assert!(paginate(&records, 9, 3).is_empty());
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let records: Vec<u32> = (1..=4).collect();
        assert_eq!(paginate(&records, 0, 2), vec![1, 2]);
    }
}
