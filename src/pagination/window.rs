use super::token::PageToken;

/// Compute the ordered token sequence for a page control.
///
/// Page 1 and the last page are always shown. Around `current_page` up to
/// `page_neighbours` numbers are shown on each side; whatever lies beyond is
/// collapsed into an ellipsis. When only one side collapses, the other side
/// reveals extra numbers instead so the control keeps a stable width while
/// paging through the collapsed region.
///
/// A `current_page` outside `[1, total_pages]` is windowed as the nearest
/// valid page.
pub fn compute_tokens(current_page: u64, total_pages: u64, page_neighbours: u8) -> Vec<PageToken> {
    let total_pages = i64::try_from(total_pages).unwrap_or(i64::MAX);
    let neighbours = i64::from(page_neighbours);

    // current page, its neighbours, first and last
    let total_numbers = neighbours * 2 + 3;
    // plus room for both ellipsis markers
    let total_blocks = total_numbers + 2;

    if total_pages <= total_blocks {
        return numbers(1, total_pages);
    }

    let current_page = i64::try_from(current_page)
        .unwrap_or(i64::MAX)
        .clamp(1, total_pages);
    let before_last_page = total_pages - 1;

    let start_page = (current_page - neighbours).max(2);
    let end_page = (current_page + neighbours).min(before_last_page);

    let middle = numbers(start_page, end_page);
    let single_spill_offset = total_numbers - middle.len() as i64 - 1;

    let left_spill = start_page > 2;
    let right_spill = end_page < before_last_page;

    let mut tokens = Vec::with_capacity(total_blocks as usize);
    tokens.push(PageToken::Number(1));
    match (left_spill, right_spill) {
        (true, false) => {
            tokens.push(PageToken::LeftEllipsis);
            tokens.extend(numbers(start_page - single_spill_offset, start_page - 1));
            tokens.extend(middle);
        }
        (false, true) => {
            tokens.extend(middle);
            tokens.extend(numbers(end_page + 1, end_page + single_spill_offset));
            tokens.push(PageToken::RightEllipsis);
        }
        (true, true) => {
            tokens.push(PageToken::LeftEllipsis);
            tokens.extend(middle);
            tokens.push(PageToken::RightEllipsis);
        }
        (false, false) => tokens.extend(middle),
    }
    tokens.push(PageToken::Number(total_pages as u64));
    tokens
}

fn numbers(from: i64, to: i64) -> Vec<PageToken> {
    (from..=to).map(|page| PageToken::Number(page as u64)).collect()
}
