//! Address bar synchronisation of the dish listing.
//!
//! The listing URL carries the same query string that is sent to
//! `GET /dish`, so reloading or sharing a link reproduces the selection.

use contracts::domain::a001_dish::aggregate::DishSorting;
use contracts::domain::a001_dish::query::{first_value, parse_pairs, DishListQuery, PARAM_SORTING};

use super::state::PageState;

/// Value of the sort selector that means "no explicit sorting"
pub const NO_SORTING: &str = "None";

/// Read and rewrite access to the current URL
pub trait BrowserLocation {
    fn pathname(&self) -> String;

    /// Query string including the leading `?`, empty when there is none
    fn search(&self) -> String;

    /// Replace the current history entry
    fn replace(&self, url: &str);
}

/// `window.location` + `window.history`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLocation;

impl BrowserLocation for WindowLocation {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace(&self, url: &str) {
        let Some(w) = web_sys::window() else {
            return;
        };
        match w.history() {
            Ok(history) => {
                if let Err(e) =
                    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
                {
                    log::error!("Failed to replace URL with {}: {:?}", url, e);
                }
            }
            Err(e) => log::error!("History API unavailable: {:?}", e),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UrlParamsService<L: BrowserLocation> {
    location: L,
}

impl<L: BrowserLocation> UrlParamsService<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Parsed query of the current URL
    pub fn current_query(&self) -> DishListQuery {
        let pairs = parse_pairs(&self.location.search());
        if let Some(raw) = first_value(&pairs, PARAM_SORTING) {
            warn_unknown_sorting(raw);
        }
        DishListQuery::from_pairs(&pairs)
    }

    /// Copy page, vegetarian flag, categories and sorting from the URL into
    /// `state`. Missing or malformed values fall back to their defaults.
    pub fn update_page_state_from_url(&self, state: &mut PageState) {
        let query = self.current_query();

        if let Err(e) = state.set_page(i64::from(query.page)) {
            log::warn!("Ignoring page from URL: {}", e);
        }
        state.set_vegetarian(query.vegetarian);
        if query.categories.is_empty() {
            state.clear_categories();
        } else {
            state.set_selected_categories(Some(query.categories));
        }
        state.set_current_sorting(query.sorting);

        log::debug!("Page state restored from URL: {:?}", state.summary());
    }

    /// Replace the current history entry with `{pathname}?{query}`
    pub fn update_url(&self, query: &DishListQuery) {
        let url = format!("{}?{}", self.location.pathname(), query.to_query_string());
        log::debug!("Replacing listing URL with {}", url);
        self.location.replace(&url);
    }

    /// Request parameters for the current state and the sort selector value
    pub fn build_api_params(&self, state: &PageState, active_sort: &str) -> DishListQuery {
        warn_unknown_sorting(active_sort);
        DishListQuery {
            vegetarian: state.is_vegetarian(),
            page: state.page(),
            categories: state.selected_categories().to_vec(),
            sorting: DishSorting::from_code(active_sort),
        }
    }
}

fn warn_unknown_sorting(raw: &str) {
    if !raw.is_empty() && raw != NO_SORTING && DishSorting::from_code(raw).is_none() {
        log::warn!("Ignoring unknown sorting '{}'", raw);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory location; `replace` splits the URL back into path and query
    #[derive(Debug, Default)]
    pub(crate) struct MemoryLocation {
        pathname: RefCell<String>,
        search: RefCell<String>,
        pub(crate) replaced: RefCell<Vec<String>>,
    }

    impl MemoryLocation {
        pub(crate) fn new(pathname: &str, search: &str) -> Self {
            Self {
                pathname: RefCell::new(pathname.to_string()),
                search: RefCell::new(search.to_string()),
                replaced: RefCell::new(Vec::new()),
            }
        }
    }

    impl BrowserLocation for MemoryLocation {
        fn pathname(&self) -> String {
            self.pathname.borrow().clone()
        }

        fn search(&self) -> String {
            self.search.borrow().clone()
        }

        fn replace(&self, url: &str) {
            let (path, query) = url.split_once('?').unwrap_or((url, ""));
            *self.pathname.borrow_mut() = path.to_string();
            *self.search.borrow_mut() = if query.is_empty() {
                String::new()
            } else {
                format!("?{}", query)
            };
            self.replaced.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_state_from_full_url() {
        let service = UrlParamsService::new(MemoryLocation::new(
            "/",
            "?page=3&vegetarian=true&categories=Soup&categories=Salad&sorting=PriceAsc",
        ));
        let mut state = PageState::new();
        service.update_page_state_from_url(&mut state);

        assert_eq!(state.page(), 3);
        assert!(state.is_vegetarian());
        assert_eq!(state.selected_categories(), ["Soup", "Salad"]);
        assert_eq!(state.current_sorting(), Some(DishSorting::PriceAsc));

        state.reset_to_first_page();
        assert_eq!(state.page(), 1);
        assert!(state.is_vegetarian());
        assert_eq!(state.selected_categories(), ["Soup", "Salad"]);
        assert_eq!(state.current_sorting(), Some(DishSorting::PriceAsc));
    }

    #[test]
    fn test_empty_url_resets_state() {
        let service = UrlParamsService::new(MemoryLocation::new("/", ""));
        let mut state = PageState::new();
        state.set_page(4).unwrap();
        state.set_vegetarian(true);
        state.add_category("Wok");
        state.set_current_sorting(Some(DishSorting::RatingDesc));

        service.update_page_state_from_url(&mut state);
        assert_eq!(state, PageState::new());
    }

    #[test]
    fn test_malformed_url_values_fall_back() {
        let service = UrlParamsService::new(MemoryLocation::new(
            "/",
            "?page=-2&vegetarian=1&sorting=Cheapest",
        ));
        let mut state = PageState::new();
        service.update_page_state_from_url(&mut state);

        assert_eq!(state.page(), 1);
        assert!(!state.is_vegetarian());
        assert_eq!(state.current_sorting(), None);
    }

    #[test]
    fn test_build_api_params_omits_inactive_filters() {
        let service = UrlParamsService::new(MemoryLocation::new("/", ""));
        let state = PageState::new();

        let query = service.build_api_params(&state, NO_SORTING);
        assert_eq!(query.to_query_string(), "page=1");

        let query = service.build_api_params(&state, "NameDesc");
        assert_eq!(query.to_query_string(), "page=1&sorting=NameDesc");
    }

    #[test]
    fn test_update_url_keeps_pathname() {
        let service = UrlParamsService::new(MemoryLocation::new("/", "?page=1"));
        let mut state = PageState::new();
        state.set_page(2).unwrap();
        state.add_category("Pizza");

        let query = service.build_api_params(&state, "PriceDesc");
        service.update_url(&query);

        assert_eq!(
            service.location().replaced.borrow().as_slice(),
            ["/?page=2&categories=Pizza&sorting=PriceDesc"]
        );
    }

    #[test]
    fn test_url_round_trip_restores_state() {
        let service = UrlParamsService::new(MemoryLocation::new("/", ""));
        let mut state = PageState::new();
        state.set_page(5).unwrap();
        state.set_vegetarian(true);
        state.set_selected_categories(Some(["Wok", "Dessert"]));
        state.set_current_sorting(Some(DishSorting::RatingAsc));

        let query = service.build_api_params(&state, DishSorting::RatingAsc.code());
        service.update_url(&query);

        let mut restored = PageState::new();
        service.update_page_state_from_url(&mut restored);
        assert_eq!(restored, state);
    }
}
