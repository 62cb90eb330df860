pub mod pagination;
pub mod state;
pub mod url_params;

use self::pagination::{PaginationModel, PaginationService};
use self::state::PageState;
use self::url_params::{UrlParamsService, WindowLocation, NO_SORTING};
use crate::domain::a001_dish::api;
use crate::domain::a001_dish::ui::card::DishCard;
use crate::domain::a002_basket::api as basket_api;
use crate::shared::components::pagination_controls::{PageTarget, PaginationControls};
use crate::shared::api_utils::ApiError;
use crate::shared::notification::{use_notifications, NotificationService};
use crate::shared::sequence::SharedSequence;
use crate::system::auth::context::{handle_api_error, use_auth, AuthState};
use crate::system::auth::storage;
use contracts::domain::a001_dish::aggregate::{Dish, DishCategory, DishPagedList, DishSorting};
use contracts::domain::a002_basket::aggregate::{BasketItem, BasketState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Owns the listing state and runs the load cycle:
/// state -> URL -> basket -> dishes -> render.
#[derive(Clone, Copy)]
pub struct DishListController {
    state: RwSignal<PageState>,
    url_params: UrlParamsService<WindowLocation>,
    sequence: SharedSequence,
    active_sort: RwSignal<String>,
    dishes: RwSignal<Vec<Dish>>,
    basket: RwSignal<BasketState>,
    pagination: RwSignal<PaginationModel>,
    loading: RwSignal<bool>,
    notifications: NotificationService,
    set_auth_state: WriteSignal<AuthState>,
}

impl DishListController {
    pub fn new(notifications: NotificationService, set_auth_state: WriteSignal<AuthState>) -> Self {
        Self {
            state: RwSignal::new(PageState::new()),
            url_params: UrlParamsService::new(WindowLocation),
            sequence: SharedSequence::new(),
            active_sort: RwSignal::new(NO_SORTING.to_string()),
            dishes: RwSignal::new(Vec::new()),
            basket: RwSignal::new(BasketState::default()),
            pagination: RwSignal::new(PaginationModel::default()),
            loading: RwSignal::new(false),
            notifications,
            set_auth_state,
        }
    }

    /// Restore the selection from the address bar and load the first page
    pub fn init(&self) {
        let url_params = self.url_params;
        self.state
            .update(|state| url_params.update_page_state_from_url(state));
        let sort = self
            .state
            .with_untracked(|state| state.current_sorting())
            .map(|sorting| sorting.code().to_string())
            .unwrap_or_else(|| NO_SORTING.to_string());
        self.active_sort.set(sort);
        self.load();
    }

    pub fn load(&self) {
        let this = *self;
        let active_sort = self.active_sort.get_untracked();
        let query = self
            .state
            .with_untracked(|state| self.url_params.build_api_params(state, &active_sort));
        self.url_params.update_url(&query);

        let ticket = self.sequence.begin();
        self.loading.set(true);
        log::debug!("Loading dishes: {}", query.to_query_string());

        spawn_local(async move {
            let basket = if storage::has_token() {
                let (basket, session_error) =
                    basket_from_response(basket_api::fetch_basket().await);
                if let Some(e) = session_error {
                    handle_api_error(this.set_auth_state, &e);
                }
                basket
            } else {
                BasketState::default()
            };

            let result = api::fetch_dishes(&query).await;

            if !this.sequence.is_latest(ticket) {
                log::warn!("Discarding stale dish listing for page {}", query.page);
                return;
            }
            this.loading.set(false);

            match result {
                Ok(page) => this.apply_page(page, basket),
                Err(e) => {
                    log::error!("Failed to fetch dishes: {}", e);
                    this.notifications.error(format!("Failed to load the menu: {}", e));
                }
            }
        });
    }

    fn apply_page(&self, page: DishPagedList, basket: BasketState) {
        let url_params = self.url_params;
        let mut model = PaginationModel::default();
        let mut selected = Vec::new();
        self.state.update(|state| {
            if let Err(e) = state.set_total_pages(page.pagination.count) {
                log::warn!("Ignoring page count from API: {}", e);
            }
            model = PaginationService::new(&url_params).update(state);
            selected = state.selected_categories().to_vec();
        });

        let dishes = page.retain_categories(&selected);
        log::debug!(
            "Showing {} of {} dishes, page {}/{}",
            dishes.len(),
            page.dishes.len(),
            page.pagination.current,
            page.pagination.count
        );

        self.basket.set(basket);
        self.dishes.set(dishes);

        let offset = scroll_offset();
        self.pagination.set(model);
        request_animation_frame(move || restore_scroll(offset));
    }

    /// Apply the filter form. A vegetarian soup-only selection is answered
    /// with a message and leaves the state untouched.
    pub fn apply_filters(&self, vegetarian: bool, categories: Vec<String>) {
        let mut candidate = self.state.get_untracked();
        candidate.set_vegetarian(vegetarian);
        candidate.set_selected_categories(Some(categories));
        if candidate.is_vegetarian_soup_only() {
            log::info!("Refusing vegetarian soup filter");
            self.notifications
                .validation("Sorry, there are no vegetarian soups on the menu");
            return;
        }

        candidate.reset_to_first_page();
        self.state.set(candidate);
        self.load();
    }

    pub fn change_sort(&self, value: String) {
        let sorting = DishSorting::from_code(&value);
        self.active_sort.set(value);
        self.state.update(|state| {
            state.set_current_sorting(sorting);
            state.reset_to_first_page();
        });
        self.load();
    }

    pub fn go_to(&self, target: PageTarget) {
        self.state.update(|state| match target {
            PageTarget::Previous => state.previous_page(),
            PageTarget::Next => state.next_page(),
            PageTarget::Page(number) => {
                if let Err(e) = state.set_page(i64::from(number)) {
                    log::warn!("{}", e);
                }
            }
        });
        self.load();
        scroll_to_top();
    }
}

/// Basket shown next to the listing. Any failure degrades to an empty
/// basket; errors that end the session are handed back.
fn basket_from_response(
    result: Result<Vec<BasketItem>, ApiError>,
) -> (BasketState, Option<ApiError>) {
    match result {
        Ok(items) => (BasketState::from_items(items), None),
        Err(e) => {
            log::warn!("Basket unavailable, showing empty cart: {}", e);
            let session_error = e.requires_login().then_some(e);
            (BasketState::default(), session_error)
        }
    }
}

fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn restore_scroll(offset: f64) {
    if let Some(w) = web_sys::window() {
        w.scroll_to_with_x_and_y(0.0, offset);
    }
}

fn scroll_to_top() {
    if let Some(w) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DishList() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let controller = DishListController::new(use_notifications(), set_auth_state);
    controller.init();

    // Filter form draft, applied on submit
    let veg_draft = RwSignal::new(controller.state.with_untracked(|s| s.is_vegetarian()));
    let categories_draft = RwSignal::new(
        controller
            .state
            .with_untracked(|s| s.selected_categories().to_vec()),
    );

    let toggle_category = move |code: &'static str, checked: bool| {
        categories_draft.update(|selected| {
            if checked {
                if !selected.iter().any(|c| c == code) {
                    selected.push(code.to_string());
                }
            } else {
                selected.retain(|c| c != code);
            }
        });
    };

    let on_apply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.apply_filters(veg_draft.get_untracked(), categories_draft.get_untracked());
    };

    view! {
        <div class="dish-list">
            <form class="filter-panel" on:submit=on_apply>
                <div class="filter-panel__categories">
                    {DishCategory::all()
                        .into_iter()
                        .map(|category| {
                            let code = category.code();
                            view! {
                                <label class="filter-panel__option">
                                    <input
                                        type="checkbox"
                                        value=code
                                        prop:checked=move || categories_draft.with(|s| s.iter().any(|c| c == code))
                                        on:change=move |ev| toggle_category(code, event_target_checked(&ev))
                                    />
                                    {code}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>

                <label class="filter-panel__option">
                    <input
                        type="checkbox"
                        prop:checked=move || veg_draft.get()
                        on:change=move |ev| veg_draft.set(event_target_checked(&ev))
                    />
                    "Vegetarian only"
                </label>

                <select
                    class="filter-panel__sort"
                    prop:value=move || controller.active_sort.get()
                    on:change=move |ev| controller.change_sort(event_target_value(&ev))
                >
                    <option value=NO_SORTING>
                        {move || format!(
                            "Default ({})",
                            controller.state.with(|s| s.default_sorting()).display_name()
                        )}
                    </option>
                    {DishSorting::all()
                        .into_iter()
                        .map(|sorting| view! {
                            <option value=sorting.code()>{sorting.display_name()}</option>
                        })
                        .collect_view()}
                </select>

                <button type="submit" class="btn-primary">"Apply"</button>
            </form>

            <Show when=move || controller.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="dish-list__grid">
                <For
                    each=move || controller.dishes.get()
                    key=|dish| dish.id
                    let:dish
                >
                    {
                        let quantity = controller.basket.with_untracked(|b| b.quantity_of(dish.id));
                        view! { <DishCard dish=dish quantity=quantity /> }
                    }
                </For>
            </div>

            <Show when=move || !controller.loading.get() && controller.dishes.with(|d| d.is_empty())>
                <div class="dish-list__empty">"No dishes match the selected filters"</div>
            </Show>

            <PaginationControls
                model=Signal::derive(move || controller.pagination.get())
                on_navigate=Callback::new(move |target| controller.go_to(target))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(amount: u32) -> BasketItem {
        BasketItem {
            id: Uuid::new_v4(),
            name: "Tom Yum".to_string(),
            price: 330.0,
            total_price: 330.0 * amount as f64,
            amount,
            image: String::new(),
        }
    }

    #[test]
    fn test_basket_from_response() {
        let (basket, session_error) = basket_from_response(Ok(vec![item(2), item(1)]));
        assert_eq!(basket.item_count(), 3);
        assert_eq!(session_error, None);
    }

    #[test]
    fn test_rejected_token_ends_session() {
        let (basket, session_error) = basket_from_response(Err(ApiError::Unauthorized));
        assert!(basket.is_empty());
        assert_eq!(session_error, Some(ApiError::Unauthorized));

        let (basket, session_error) = basket_from_response(Err(ApiError::NotAuthenticated));
        assert!(basket.is_empty());
        assert_eq!(session_error, Some(ApiError::NotAuthenticated));
    }

    #[test]
    fn test_other_basket_errors_keep_session() {
        for error in [ApiError::Status(500), ApiError::Network("offline".to_string())] {
            let (basket, session_error) = basket_from_response(Err(error));
            assert!(basket.is_empty());
            assert_eq!(session_error, None);
        }
    }
}
