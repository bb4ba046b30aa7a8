//! Page-window computation over ordered record lists

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Return the 1-based `page` of `items`, at most `page_size` long.
///
/// Page 0 and pages past the end are empty.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };

    let start = (index as usize).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// Number of non-empty pages for `len` items, saturating at `u32::MAX`
pub fn page_count(len: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(len.div_ceil(page_size)).unwrap_or(u32::MAX)
}
