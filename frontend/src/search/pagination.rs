/// Current page and page count of the last search. `current_page` always stays
/// within `1..=total_pages` and `total_pages` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Back to page 1, keeping the known page count.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `page` if it exists; returns whether the page changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Recomputes the page count from a result total: `ceil(total / limit)`.
    pub fn set_total(&mut self, total: u64, limit: u32) {
        let limit = u64::from(limit.max(1));
        let pages = total.div_ceil(limit).max(1);
        self.total_pages = u32::try_from(pages).unwrap_or(u32::MAX);
        self.current_page = self.current_page.min(self.total_pages);
    }

    pub fn prev_disabled(&self) -> bool {
        self.total_pages == 1 || self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.total_pages == 1 || self.current_page >= self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(total: u64, limit: u32) -> PaginationState {
        let mut state = PaginationState::default();
        state.set_total(total, limit);
        state
    }

    #[test]
    fn total_pages_is_ceiling_of_total_over_limit() {
        assert_eq!(with_total(25, 10).total_pages(), 3);
        assert_eq!(with_total(30, 10).total_pages(), 3);
        assert_eq!(with_total(1, 10).total_pages(), 1);
        assert_eq!(with_total(0, 10).total_pages(), 1);
    }

    #[test]
    fn button_state_follows_position() {
        let mut state = with_total(25, 10);
        assert!(state.prev_disabled());
        assert!(!state.next_disabled());

        assert!(state.go_to(3));
        assert!(!state.prev_disabled());
        assert!(state.next_disabled());

        assert!(state.go_to(2));
        assert!(!state.prev_disabled());
        assert!(!state.next_disabled());
    }

    #[test]
    fn single_page_disables_both_directions() {
        let state = with_total(4, 10);
        assert!(state.prev_disabled());
        assert!(state.next_disabled());
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let mut state = with_total(25, 10);
        let before = state;
        assert!(!state.go_to(0));
        assert!(!state.go_to(4));
        assert_eq!(state, before);
    }

    #[test]
    fn shrinking_total_pulls_current_page_back_in_range() {
        let mut state = with_total(100, 10);
        state.go_to(8);
        state.set_total(15, 10);
        assert_eq!(state.current_page(), 2);
    }
}
