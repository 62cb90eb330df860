use super::state::PageState;
use super::url_params::{BrowserLocation, UrlParamsService};

/// Page numbers shown around the current page
pub const WINDOW_SIZE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub active: bool,
}

/// What the pagination strip renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationModel {
    pub previous: bool,
    pub pages: Vec<PageLink>,
    pub next: bool,
}

impl PaginationModel {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            previous: current > 1,
            pages: page_window(current, total)
                .map(|number| PageLink {
                    number,
                    active: number == current,
                })
                .collect(),
            next: current < total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && !self.previous && !self.next
    }
}

/// Up to three page numbers around `current`, shifted left at the end
/// of the range. Empty when `total` is 0.
pub fn page_window(current: u32, total: u32) -> std::ops::RangeInclusive<u32> {
    if total == 0 {
        return std::ops::RangeInclusive::new(1, 0);
    }
    let mut start = current.saturating_sub(1).max(1);
    let end = start.saturating_add(WINDOW_SIZE - 1).min(total);
    if end == total {
        start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    }
    start..=end
}

pub struct PaginationService<'a, L: BrowserLocation> {
    url_params: &'a UrlParamsService<L>,
}

impl<'a, L: BrowserLocation> PaginationService<'a, L> {
    pub fn new(url_params: &'a UrlParamsService<L>) -> Self {
        Self { url_params }
    }

    /// Re-read the page from the URL into `state` and build the strip
    pub fn update(&self, state: &mut PageState) -> PaginationModel {
        let page = self.url_params.current_query().page;
        if let Err(e) = state.set_page(i64::from(page)) {
            log::warn!("Ignoring page from URL: {}", e);
        }
        PaginationModel::new(state.page(), state.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_dish::ui::list::url_params::tests::MemoryLocation;

    fn window(current: u32, total: u32) -> Vec<u32> {
        page_window(current, total).collect()
    }

    #[test]
    fn test_page_window() {
        assert_eq!(window(5, 10), vec![4, 5, 6]);
        assert_eq!(window(1, 10), vec![1, 2, 3]);
        assert_eq!(window(10, 10), vec![8, 9, 10]);
        assert_eq!(window(9, 10), vec![8, 9, 10]);
        assert_eq!(window(2, 10), vec![1, 2, 3]);
        assert_eq!(window(1, 1), vec![1]);
        assert_eq!(window(2, 2), vec![1, 2]);
        assert!(window(1, 0).is_empty());
    }

    #[test]
    fn test_window_contains_current_page() {
        for total in 1..=12 {
            for current in 1..=total {
                let pages = window(current, total);
                assert!(pages.contains(&current), "current {} of {}", current, total);
                assert!(pages.len() <= WINDOW_SIZE as usize);
                assert!(pages.iter().all(|n| (1..=total).contains(n)));
            }
        }
    }

    #[test]
    fn test_model_arrows() {
        let first = PaginationModel::new(1, 10);
        assert!(!first.previous);
        assert!(first.next);
        assert_eq!(
            first.pages.iter().filter(|link| link.active).count(),
            1
        );

        let last = PaginationModel::new(10, 10);
        assert!(last.previous);
        assert!(!last.next);

        assert!(PaginationModel::new(1, 0).is_empty());
    }

    #[test]
    fn test_update_reads_page_from_url() {
        let url_params = UrlParamsService::new(MemoryLocation::new("/", "?page=5"));
        let mut state = PageState::new();
        state.set_total_pages(10).unwrap();

        let model = PaginationService::new(&url_params).update(&mut state);
        assert_eq!(state.page(), 5);
        assert_eq!(
            model.pages.iter().map(|link| link.number).collect::<Vec<_>>(),
            vec![4, 5, 6]
        );
        assert!(model.pages[1].active);
    }

    #[test]
    fn test_window_near_u32_max() {
        assert_eq!(window(u32::MAX, 10), vec![8, 9, 10]);
        assert_eq!(
            window(u32::MAX - 1, u32::MAX),
            vec![u32::MAX - 2, u32::MAX - 1, u32::MAX]
        );
        assert_eq!(window(u32::MAX, u32::MAX).last(), Some(&u32::MAX));
    }

    #[test]
    fn test_update_with_huge_url_page() {
        let url_params = UrlParamsService::new(MemoryLocation::new("/", "?page=4294967295"));
        let mut state = PageState::new();
        state.set_total_pages(10).unwrap();

        let model = PaginationService::new(&url_params).update(&mut state);
        assert_eq!(state.page(), u32::MAX);
        assert_eq!(
            model.pages.iter().map(|link| link.number).collect::<Vec<_>>(),
            vec![8, 9, 10]
        );
        assert!(model.previous);
        assert!(!model.next);
    }

    #[test]
    fn test_update_with_invalid_url_page() {
        let url_params = UrlParamsService::new(MemoryLocation::new("/", "?page=abc"));
        let mut state = PageState::new();
        state.set_page(7).unwrap();
        state.set_total_pages(10).unwrap();

        let model = PaginationService::new(&url_params).update(&mut state);
        assert_eq!(state.page(), 1);
        assert!(!model.previous);
    }
}
