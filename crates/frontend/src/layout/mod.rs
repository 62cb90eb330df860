pub mod top_header;

use crate::shared::notification::NotificationHost;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |               page content                |
/// +------------------------------------------+
/// ```
/// Notifications float above the content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {children()}
            </main>
            <NotificationHost />
        </div>
    }
}
