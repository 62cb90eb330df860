use contracts::domain::a001_dish::aggregate::DishSorting;
use contracts::domain::common::DomainError;

/// Pagination, filter and sort selection of the dish listing.
///
/// Fields are private: every change goes through a method so that
/// `page >= 1` holds even when the input comes from a hand-edited URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page: u32,
    total_pages: u32,
    is_vegetarian: bool,
    selected_categories: Vec<String>,
    current_sorting: Option<DishSorting>,
}

/// Loggable snapshot of a `PageState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStateSummary {
    pub page: u32,
    pub total_pages: u32,
    pub is_vegetarian: bool,
    pub selected_categories: Vec<String>,
    pub current_sorting: Option<DishSorting>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            is_vegetarian: false,
            selected_categories: Vec::new(),
            current_sorting: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: i64) -> Result<(), DomainError> {
        if page < 1 {
            return Err(DomainError::invalid_argument(format!(
                "page number must be greater than 0, got {}",
                page
            )));
        }
        self.page = u32::try_from(page)
            .map_err(|_| DomainError::invalid_argument(format!("page number too large: {}", page)))?;
        Ok(())
    }

    /// 0 until the first listing response arrives
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn set_total_pages(&mut self, total: i64) -> Result<(), DomainError> {
        if total < 0 {
            return Err(DomainError::invalid_argument(format!(
                "total pages cannot be negative, got {}",
                total
            )));
        }
        self.total_pages = u32::try_from(total)
            .map_err(|_| DomainError::invalid_argument(format!("total pages too large: {}", total)))?;
        Ok(())
    }

    /// The sorting the server applies when none is requested
    pub fn default_sorting(&self) -> DishSorting {
        DishSorting::DEFAULT
    }

    pub fn is_vegetarian(&self) -> bool {
        self.is_vegetarian
    }

    pub fn set_vegetarian(&mut self, is_vegetarian: bool) {
        self.is_vegetarian = is_vegetarian;
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    /// Replace the selection. `None` clears it; duplicates keep their first
    /// position.
    pub fn set_selected_categories<I, S>(&mut self, categories: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_categories.clear();
        if let Some(categories) = categories {
            for category in categories {
                self.add_category(category);
            }
        }
    }

    pub fn add_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.selected_categories.contains(&category) {
            self.selected_categories.push(category);
        }
    }

    pub fn remove_category(&mut self, category: &str) {
        self.selected_categories.retain(|c| c != category);
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    pub fn current_sorting(&self) -> Option<DishSorting> {
        self.current_sorting
    }

    pub fn set_current_sorting(&mut self, sorting: Option<DishSorting>) {
        self.current_sorting = sorting;
    }

    /// Used whenever a filter or sort change invalidates the current page
    pub fn reset_to_first_page(&mut self) {
        self.page = 1;
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn next_page(&mut self) {
        if !self.is_last_page() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if !self.is_first_page() {
            self.page -= 1;
        }
    }

    /// The menu has no vegetarian soups; the listing answers this
    /// combination with a message instead of a request.
    pub fn is_vegetarian_soup_only(&self) -> bool {
        self.is_vegetarian && self.selected_categories.len() == 1 && self.selected_categories[0] == "Soup"
    }

    pub fn summary(&self) -> PageStateSummary {
        PageStateSummary {
            page: self.page,
            total_pages: self.total_pages,
            is_vegetarian: self.is_vegetarian,
            selected_categories: self.selected_categories.clone(),
            current_sorting: self.current_sorting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_page_rejects_non_positive() {
        let mut state = PageState::new();
        for n in [0, -1, -100, i64::MIN] {
            assert!(matches!(state.set_page(n), Err(DomainError::InvalidArgument(_))));
            assert_eq!(state.page(), 1);
        }
        for n in [1, 2, 57, u32::MAX as i64] {
            state.set_page(n).unwrap();
            assert_eq!(state.page() as i64, n);
        }
    }

    #[test]
    fn test_set_total_pages() {
        let mut state = PageState::new();
        assert_eq!(state.total_pages(), 0);
        for n in [0, 1, 40] {
            state.set_total_pages(n).unwrap();
            assert_eq!(state.total_pages() as i64, n);
        }
        assert!(state.set_total_pages(-1).is_err());
        assert_eq!(state.total_pages(), 40);
    }

    #[test]
    fn test_category_selection_is_idempotent() {
        let mut state = PageState::new();
        state.add_category("Soup");
        state.add_category("Soup");
        state.add_category("Wok");
        assert_eq!(state.selected_categories(), ["Soup", "Wok"]);

        state.remove_category("Pizza");
        state.remove_category("Soup");
        state.remove_category("Soup");
        assert_eq!(state.selected_categories(), ["Wok"]);

        state.set_selected_categories(Some(vec!["Pizza", "Drink", "Pizza"]));
        assert_eq!(state.selected_categories(), ["Pizza", "Drink"]);

        state.set_selected_categories(None::<Vec<String>>);
        assert!(state.selected_categories().is_empty());
    }

    #[test]
    fn test_page_navigation_stops_at_bounds() {
        let mut state = PageState::new();
        state.set_total_pages(3).unwrap();

        state.previous_page();
        assert_eq!(state.page(), 1);

        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);
        assert!(state.is_last_page());

        state.next_page();
        assert_eq!(state.page(), 3);

        state.previous_page();
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_next_page_before_first_load_is_noop() {
        let mut state = PageState::new();
        state.next_page();
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_reset_keeps_filters() {
        let mut state = PageState::new();
        state.set_page(3).unwrap();
        state.set_vegetarian(true);
        state.set_selected_categories(Some(["Soup", "Salad"]));
        state.set_current_sorting(Some(DishSorting::PriceAsc));

        state.reset_to_first_page();

        let summary = state.summary();
        assert_eq!(summary.page, 1);
        assert!(summary.is_vegetarian);
        assert_eq!(summary.selected_categories, vec!["Soup", "Salad"]);
        assert_eq!(summary.current_sorting, Some(DishSorting::PriceAsc));
    }

    #[test]
    fn test_vegetarian_soup_only() {
        let mut state = PageState::new();
        state.set_vegetarian(true);
        state.add_category("Soup");
        assert!(state.is_vegetarian_soup_only());

        state.add_category("Wok");
        assert!(!state.is_vegetarian_soup_only());

        state.set_selected_categories(Some(["Soup"]));
        state.set_vegetarian(false);
        assert!(!state.is_vegetarian_soup_only());
    }

    #[test]
    fn test_default_sorting_is_independent_of_selection() {
        let mut state = PageState::new();
        assert_eq!(state.current_sorting(), None);
        assert_eq!(state.default_sorting(), DishSorting::NameAsc);

        state.set_current_sorting(Some(DishSorting::PriceDesc));
        assert_eq!(state.default_sorting(), DishSorting::NameAsc);
    }
}
