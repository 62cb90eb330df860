use crate::domain::a001_dish::ui::details::DishDetails;
use crate::domain::a001_dish::ui::list::DishList;
use crate::domain::a002_basket::ui::cart::CartPage;
use crate::domain::a003_order::ui::details::OrderDetails;
use crate::domain::a003_order::ui::list::OrderList;
use crate::layout::Shell;
use crate::system::account::profile::ProfilePage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <h1>"Page not found"</h1> }>
                    <Route path=path!("/") view=DishList />
                    <Route path=path!("/dish/:id") view=DishDetails />
                    <Route path=path!("/cart") view=|| view! { <RequireAuth><CartPage /></RequireAuth> } />
                    <Route path=path!("/orders") view=|| view! { <RequireAuth><OrderList /></RequireAuth> } />
                    <Route path=path!("/orders/:id") view=|| view! { <RequireAuth><OrderDetails /></RequireAuth> } />
                    <Route path=path!("/profile") view=|| view! { <RequireAuth><ProfilePage /></RequireAuth> } />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
            </Shell>
        </Router>
    }
}
