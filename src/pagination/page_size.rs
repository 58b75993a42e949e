pub const STANDARD_PAGE_SIZES: [u64; 5] = [5, 10, 20, 50, 100];

/// Rows-per-page choices: the standard sizes plus the active limit, sorted.
///
/// Sizes past the first one that already fits every record are dropped,
/// except the active limit which is always offered.
pub fn page_size_options(sizes: &[u64], page_limit: u64, total_records: u64) -> Vec<u64> {
    let mut options: Vec<u64> = sizes
        .iter()
        .copied()
        .chain(std::iter::once(page_limit))
        .filter(|size| *size > 0)
        .collect();
    options.sort_unstable();
    options.dedup();

    if let Some(cutoff) = options.iter().copied().find(|size| *size >= total_records) {
        options.retain(|size| *size <= cutoff || *size == page_limit);
    }
    options
}
