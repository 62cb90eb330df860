use crate::domain::a001_dish::ui::list::pagination::PaginationModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Where a pagination link leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Previous,
    Page(u32),
    Next,
}

/// Pagination strip: previous arrow, a window of page numbers, next arrow.
/// Arrows are only rendered when there is a page to go to.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    model: Signal<PaginationModel>,

    /// Called with the clicked link
    on_navigate: Callback<PageTarget>,
) -> impl IntoView {
    let link = move |ev: leptos::ev::MouseEvent, target: PageTarget| {
        ev.prevent_default();
        on_navigate.run(target);
    };

    view! {
        <nav class="pagination-controls" aria-label="Pages">
            <Show when=move || model.with(|m| m.previous)>
                <a href="#" class="pagination-btn" title="Previous page"
                    on:click=move |ev| link(ev, PageTarget::Previous)
                >
                    {icon("chevron-left")}
                </a>
            </Show>
            {move || {
                model
                    .get()
                    .pages
                    .into_iter()
                    .map(|page| {
                        let class = if page.active {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <a href="#" class=class
                                on:click=move |ev| link(ev, PageTarget::Page(page.number))
                            >
                                {page.number.to_string()}
                            </a>
                        }
                    })
                    .collect_view()
            }}
            <Show when=move || model.with(|m| m.next)>
                <a href="#" class="pagination-btn" title="Next page"
                    on:click=move |ev| link(ev, PageTarget::Next)
                >
                    {icon("chevron-right")}
                </a>
            </Show>
        </nav>
    }
}
