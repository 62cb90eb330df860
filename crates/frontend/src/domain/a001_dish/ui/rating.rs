use contracts::domain::a001_dish::rating::{RatingScore, StarFill, RATING_SLOTS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::a001_dish::api;
use crate::shared::notification::use_notifications;
use crate::system::auth::storage;

/// Star rating of a dish. Read-only unless the API says the current user
/// may rate it; a click then sends the score.
#[component]
pub fn StarRating(dish_id: Uuid, rating: Option<f64>) -> impl IntoView {
    let notifications = use_notifications();
    let fill = RwSignal::new(StarFill::from_rating(rating));
    let (can_rate, set_can_rate) = signal(false);

    if storage::has_token() {
        spawn_local(async move {
            match api::check_rating(dish_id).await {
                Ok(allowed) => set_can_rate.set(allowed),
                Err(e) => log::debug!("Rating check for {} failed: {}", dish_id, e),
            }
        });
    }

    let rate = move |value: u8| {
        if !can_rate.get_untracked() {
            return;
        }
        let score = match RatingScore::new(i32::from(value)) {
            Ok(score) => score,
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };
        spawn_local(async move {
            match api::set_rating(dish_id, score).await {
                Ok(()) => {
                    fill.set(StarFill::from_rating(Some(f64::from(score.value()))));
                    log::info!("Rated dish {} with {}", dish_id, score.value());
                    notifications.success("Thanks for your rating!");
                }
                Err(e) => {
                    log::error!("Failed to rate dish {}: {}", dish_id, e);
                    notifications.error("Could not save the rating");
                }
            }
        });
    };

    view! {
        <div
            class="rate"
            class:rate--editable=move || can_rate.get()
            title=move || rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "No rating yet".to_string())
        >
            {(1..=RATING_SLOTS)
                .map(|star| {
                    let class = move || {
                        let fill = fill.get();
                        if star <= fill.full {
                            "star star--full"
                        } else if fill.lights(star) {
                            "star star--half"
                        } else {
                            "star"
                        }
                    };
                    view! {
                        <span class=class on:click=move |_| rate(star)>"★"</span>
                    }
                })
                .collect_view()}
        </div>
    }
}
