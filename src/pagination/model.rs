use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::config::{ClampMode, PaginationConfig};
use super::input::PaginationInput;
use super::page_size::{page_size_options, STANDARD_PAGE_SIZES};
use super::token::{NavIntent, PageToken, TokenView};
use super::window::compute_tokens;
use crate::utils::error::{PaginationError, Result};

/// Emitted after every navigation, including the initial one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChange {
    pub current_page: u64,
    pub total_pages: u64,
    pub page_limit: u64,
    pub total_records: u64,
}

/// Data for the "rows per page N out of M" status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatus {
    pub page_limit: u64,
    pub total_records: u64,
    /// 1-based index of the first record on the current page, 0 when there is none.
    pub first_record: u64,
    pub last_record: u64,
}

pub type OnPageChanged = Box<dyn FnMut(&PageChange) + Send>;

fn noop_observer() -> OnPageChanged {
    Box::new(|_| {})
}

/// Owns the current page of one page control.
pub struct PaginationModel {
    config: PaginationConfig,
    total_pages: u64,
    current_page: u64,
    clamp_mode: ClampMode,
    page_sizes: Vec<u64>,
    on_page_changed: OnPageChanged,
}

impl fmt::Debug for PaginationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationModel")
            .field("config", &self.config)
            .field("total_pages", &self.total_pages)
            .field("current_page", &self.current_page)
            .field("clamp_mode", &self.clamp_mode)
            .finish_non_exhaustive()
    }
}

impl PaginationModel {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            total_pages: config.total_pages(),
            config,
            current_page: 1,
            clamp_mode: ClampMode::default(),
            page_sizes: STANDARD_PAGE_SIZES.to_vec(),
            on_page_changed: noop_observer(),
        }
    }

    pub fn from_input(input: &PaginationInput) -> Self {
        Self::new(input.derive_config())
    }

    pub fn with_observer(mut self, observer: impl FnMut(&PageChange) + Send + 'static) -> Self {
        self.on_page_changed = Box::new(observer);
        self
    }

    pub fn with_clamp_mode(mut self, clamp_mode: ClampMode) -> Self {
        self.clamp_mode = clamp_mode;
        self
    }

    pub fn with_page_sizes(mut self, page_sizes: Vec<u64>) -> Self {
        self.page_sizes = page_sizes;
        self
    }

    /// Replace the observer; `None` restores the no-op default.
    pub fn set_observer(&mut self, observer: Option<OnPageChanged>) {
        self.on_page_changed = observer.unwrap_or_else(noop_observer);
    }

    /// Select and announce page 1. Call once the observer is registered.
    pub fn initialize(&mut self) -> Result<PageChange> {
        info!(
            total_records = self.config.total_records,
            page_limit = self.config.page_limit,
            page_neighbours = self.config.page_neighbours,
            total_pages = self.total_pages,
            "initializing pagination"
        );
        self.goto_page(1)
    }

    /// Swap in a new config and re-clamp the current page against it.
    pub fn reconfigure(&mut self, config: PaginationConfig) -> Result<PageChange> {
        info!(from = ?self.config, to = ?config, "reconfiguring pagination");
        self.config = config;
        self.total_pages = config.total_pages();
        self.goto_page(self.current())
    }

    /// Like `reconfigure`, deriving the config from loosely typed input.
    pub fn reconfigure_from_input(&mut self, input: &PaginationInput) -> Result<PageChange> {
        self.reconfigure(input.derive_config())
    }

    pub fn goto_page(&mut self, requested: i64) -> Result<PageChange> {
        let page = self.clamp_target(requested)?;
        debug!(
            from = self.current_page,
            to = page,
            requested = requested,
            "page changed"
        );
        self.current_page = page;
        let change = self.page_change();
        (self.on_page_changed)(&change);
        Ok(change)
    }

    /// Step back one page; does nothing on the first page.
    pub fn move_left_one_step(&mut self) -> Result<Option<PageChange>> {
        if self.current_page <= 1 {
            debug!(current_page = self.current_page, "already on the first page");
            return Ok(None);
        }
        self.goto_page(self.current() - 1).map(Some)
    }

    pub fn move_right_one_step(&mut self) -> Result<PageChange> {
        self.goto_page(self.current().saturating_add(1))
    }

    /// Skip left past the whole visible neighbour window.
    pub fn move_left_block(&mut self) -> Result<PageChange> {
        self.goto_page(self.current().saturating_sub(self.config.block_step()))
    }

    /// Skip right past the whole visible neighbour window.
    pub fn move_right_block(&mut self) -> Result<PageChange> {
        self.goto_page(self.current().saturating_add(self.config.block_step()))
    }

    /// Route a view intent to the matching navigation operation.
    pub fn dispatch(&mut self, intent: NavIntent) -> Result<Option<PageChange>> {
        match intent {
            NavIntent::GotoPage(page) => self.goto_page(page).map(Some),
            NavIntent::Previous => self.move_left_one_step(),
            NavIntent::Next => self.move_right_one_step().map(Some),
            NavIntent::SkipLeftBlock => self.move_left_block().map(Some),
            NavIntent::SkipRightBlock => self.move_right_block().map(Some),
        }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Whether the control has anything to render.
    pub fn is_visible(&self) -> bool {
        self.config.total_records > 0 && self.total_pages > 1
    }

    pub fn is_previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    /// Tokens to render; empty when the control is hidden.
    pub fn tokens(&self) -> Vec<PageToken> {
        if !self.is_visible() {
            return vec![];
        }
        compute_tokens(self.current_page, self.total_pages, self.config.page_neighbours)
    }

    pub fn token_views(&self) -> Vec<TokenView> {
        self.tokens()
            .into_iter()
            .map(|token| TokenView::new(token, self.current_page))
            .collect()
    }

    pub fn page_change(&self) -> PageChange {
        PageChange {
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_limit: self.config.page_limit,
            total_records: self.config.total_records,
        }
    }

    pub fn status(&self) -> PageStatus {
        let PaginationConfig {
            total_records,
            page_limit,
            ..
        } = self.config;
        let (first_record, last_record) = if total_records == 0 || self.current_page == 0 {
            (0, 0)
        } else {
            let first = (self.current_page - 1)
                .saturating_mul(page_limit)
                .saturating_add(1);
            let last = self.current_page.saturating_mul(page_limit).min(total_records);
            (first.min(total_records), last)
        };
        PageStatus {
            page_limit,
            total_records,
            first_record,
            last_record,
        }
    }

    /// Choices for the rows-per-page selector.
    pub fn page_size_options(&self) -> Vec<u64> {
        page_size_options(&self.page_sizes, self.config.page_limit, self.config.total_records)
    }

    fn current(&self) -> i64 {
        i64::try_from(self.current_page).unwrap_or(i64::MAX)
    }

    fn clamp_target(&self, requested: i64) -> Result<u64> {
        let total_pages = i64::try_from(self.total_pages).unwrap_or(i64::MAX);
        let page = requested.min(total_pages).max(0);
        match self.clamp_mode {
            ClampMode::Permissive => Ok(page as u64),
            ClampMode::FirstPage if total_pages > 0 => Ok(page.max(1) as u64),
            ClampMode::FirstPage => Ok(0),
            ClampMode::Strict if page == 0 && total_pages > 0 => {
                warn!(
                    requested = requested,
                    total_pages = self.total_pages,
                    "rejecting navigation to page 0"
                );
                Err(PaginationError::InvalidPage {
                    requested,
                    total_pages: self.total_pages,
                })
            }
            ClampMode::Strict => Ok(page as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::pagination::token::PageToken::{Number as N, RightEllipsis as R};

    fn recording(config: PaginationConfig) -> (PaginationModel, Arc<Mutex<Vec<PageChange>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let model = PaginationModel::new(config)
            .with_observer(move |change| sink.lock().unwrap().push(*change));
        (model, seen)
    }

    #[test_log::test]
    fn initialize_announces_the_first_page() {
        let (mut model, seen) = recording(PaginationConfig::new(500, 10, 1));
        let change = model.initialize().unwrap();
        assert_eq!(
            change,
            PageChange {
                current_page: 1,
                total_pages: 50,
                page_limit: 10,
                total_records: 500,
            }
        );
        assert_eq!(*seen.lock().unwrap(), vec![change]);
    }

    #[test]
    fn nothing_is_announced_before_initialize() {
        let (model, seen) = recording(PaginationConfig::new(500, 10, 1));
        assert_eq!(model.current_page(), 1);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test_log::test]
    fn goto_current_page_notifies_once_without_change() {
        let (mut model, seen) = recording(PaginationConfig::new(500, 10, 1));
        model.goto_page(7).unwrap();
        seen.lock().unwrap().clear();
        let change = model.goto_page(7).unwrap();
        assert_eq!(change.current_page, 7);
        assert_eq!(model.current_page(), 7);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn goto_clamps_into_zero_and_total() {
        let mut model = PaginationModel::new(PaginationConfig::new(500, 10, 1));
        assert_eq!(model.goto_page(100).unwrap().current_page, 50);
        assert_eq!(model.goto_page(-50).unwrap().current_page, 0);
    }

    #[test]
    fn first_page_mode_clamps_to_one() {
        let mut model =
            PaginationModel::new(PaginationConfig::new(500, 10, 1)).with_clamp_mode(ClampMode::FirstPage);
        assert_eq!(model.goto_page(-50).unwrap().current_page, 1);
        assert_eq!(model.goto_page(0).unwrap().current_page, 1);
    }

    #[test_log::test]
    fn strict_mode_rejects_page_zero_without_notifying() {
        let (model, seen) = recording(PaginationConfig::new(500, 10, 1));
        let mut model = model.with_clamp_mode(ClampMode::Strict);
        model.goto_page(3).unwrap();
        let err = model.goto_page(-2).unwrap_err();
        assert!(matches!(
            err,
            PaginationError::InvalidPage {
                requested: -2,
                total_pages: 50
            }
        ));
        assert_eq!(model.current_page(), 3);
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(model.goto_page(80).unwrap().current_page, 50);
    }

    #[test_log::test]
    fn strict_mode_leaves_an_empty_list_inert() {
        let (model, seen) = recording(PaginationConfig::new(0, 10, 1));
        let mut model = model.with_clamp_mode(ClampMode::Strict);
        assert_eq!(model.initialize().unwrap().current_page, 0);
        assert_eq!(model.dispatch(NavIntent::Next).unwrap().map(|c| c.current_page), Some(0));
        assert_eq!(seen.lock().unwrap().len(), 2);
        assert!(model.tokens().is_empty());
    }

    #[test]
    fn previous_stays_enabled_on_page_zero() {
        let mut model = PaginationModel::new(PaginationConfig::new(500, 10, 1));
        model.initialize().unwrap();
        assert!(model.is_previous_disabled());
        model.goto_page(-1).unwrap();
        assert_eq!(model.current_page(), 0);
        assert!(!model.is_previous_disabled());
        // clicking it still does nothing
        assert_eq!(model.dispatch(NavIntent::Previous).unwrap(), None);
        assert_eq!(model.current_page(), 0);
    }

    #[test]
    fn left_step_is_guarded_on_the_first_page() {
        let (mut model, seen) = recording(PaginationConfig::new(500, 10, 1));
        model.initialize().unwrap();
        assert_eq!(model.move_left_one_step().unwrap(), None);
        assert_eq!(model.current_page(), 1);
        assert_eq!(seen.lock().unwrap().len(), 1);

        model.goto_page(5).unwrap();
        assert_eq!(model.move_left_one_step().unwrap().map(|c| c.current_page), Some(4));
    }

    #[test]
    fn right_step_stops_at_the_last_page() {
        let mut model = PaginationModel::new(PaginationConfig::new(25, 10, 0));
        assert_eq!(model.move_right_one_step().unwrap().current_page, 2);
        assert_eq!(model.move_right_one_step().unwrap().current_page, 3);
        assert_eq!(model.move_right_one_step().unwrap().current_page, 3);
    }

    #[test]
    fn block_moves_skip_the_neighbour_window() {
        let mut model = PaginationModel::new(PaginationConfig::new(500, 10, 1));
        model.goto_page(25).unwrap();
        assert_eq!(model.move_right_block().unwrap().current_page, 28);
        assert_eq!(model.move_left_block().unwrap().current_page, 25);
        model.goto_page(2).unwrap();
        // lands on page 0 under the permissive clamp
        assert_eq!(model.move_left_block().unwrap().current_page, 0);
    }

    #[test]
    fn dispatch_routes_intents() {
        let mut model = PaginationModel::new(PaginationConfig::new(500, 10, 2));
        model.initialize().unwrap();
        let page = |c: Option<PageChange>| c.map(|c| c.current_page);
        assert_eq!(page(model.dispatch(NavIntent::GotoPage(20)).unwrap()), Some(20));
        assert_eq!(page(model.dispatch(NavIntent::Next).unwrap()), Some(21));
        assert_eq!(page(model.dispatch(NavIntent::Previous).unwrap()), Some(20));
        assert_eq!(page(model.dispatch(NavIntent::SkipRightBlock).unwrap()), Some(25));
        assert_eq!(page(model.dispatch(NavIntent::SkipLeftBlock).unwrap()), Some(20));
        model.goto_page(1).unwrap();
        assert_eq!(model.dispatch(NavIntent::Previous).unwrap(), None);
    }

    #[test]
    fn hidden_when_empty_or_single_page() {
        let mut empty = PaginationModel::new(PaginationConfig::new(0, 10, 1));
        assert_eq!(empty.initialize().unwrap().current_page, 0);
        assert!(!empty.is_visible());
        assert!(empty.tokens().is_empty());

        let single = PaginationModel::new(PaginationConfig::new(10, 10, 1));
        assert_eq!(single.total_pages(), 1);
        assert!(!single.is_visible());
        assert!(single.tokens().is_empty());
    }

    #[test]
    fn token_views_mark_the_active_page() {
        let mut model = PaginationModel::new(PaginationConfig::new(500, 10, 1));
        model.goto_page(2).unwrap();
        let views = model.token_views();
        let tokens: Vec<PageToken> = views.iter().map(|v| v.token).collect();
        assert_eq!(tokens, vec![N(1), N(2), N(3), N(4), N(5), R, N(50)]);
        let active: Vec<PageToken> = views.iter().filter(|v| v.active).map(|v| v.token).collect();
        assert_eq!(active, vec![N(2)]);
        assert!(!model.is_previous_disabled());
    }

    #[test]
    fn reconfigure_reclamps_current_page() {
        let (mut model, seen) = recording(PaginationConfig::new(500, 10, 1));
        model.goto_page(40).unwrap();
        let change = model.reconfigure(PaginationConfig::new(500, 50, 1)).unwrap();
        assert_eq!(change.current_page, 10);
        assert_eq!(change.total_pages, 10);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn reconfigure_from_input_falls_back_to_defaults() {
        let (mut model, seen) = recording(PaginationConfig::new(500, 10, 1));
        model.goto_page(30).unwrap();
        let input: PaginationInput = serde_json::from_value(serde_json::json!({
            "totalRecords": 120,
            "pageLimit": "twenty",
            "pageNeighbours": 5,
        }))
        .unwrap();
        let change = model.reconfigure_from_input(&input).unwrap();
        assert_eq!(model.config(), &PaginationConfig::new(120, 10, 2));
        assert_eq!(change.current_page, 12);
        assert_eq!(change.total_pages, 12);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn status_reports_the_record_range() {
        let mut model = PaginationModel::new(PaginationConfig::new(25, 10, 0));
        model.goto_page(3).unwrap();
        let status = model.status();
        assert_eq!((status.first_record, status.last_record), (21, 25));
        assert_eq!(status.page_limit, 10);
        assert_eq!(status.total_records, 25);

        model.goto_page(0).unwrap();
        assert_eq!((model.status().first_record, model.status().last_record), (0, 0));
    }

    #[test]
    fn observer_can_be_reset_to_noop() {
        let (mut model, seen) = recording(PaginationConfig::new(500, 10, 1));
        model.set_observer(None);
        model.goto_page(4).unwrap();
        assert!(seen.lock().unwrap().is_empty());
    }
}
