use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a003_product::aggregate::Product;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonShape};

use super::product_card::product_card;
use super::showcase::CarouselState;
use crate::shared::icons::icon;

/// Slides of deal products, advancing every `interval_ms`.
///
/// Manual navigation moves the position without restarting the timer.
#[component]
pub fn DealsCarousel(slides: Vec<Vec<Product>>, interval_ms: u32) -> impl IntoView {
    let len = slides.len();
    let state = RwSignal::new(CarouselState::new(len));
    let alive = Arc::new(AtomicBool::new(true));

    if len > 1 {
        let alive = alive.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(interval_ms).await;
                if !alive.load(Ordering::Relaxed) || state.try_update(|c| c.advance()).is_none() {
                    break;
                }
            }
        });
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let slides = StoredValue::new(slides);
    let current = move || {
        let index = state.with(|c| c.index);
        slides.with_value(|all| {
            all.get(index)
                .map(|slide| slide.iter().map(product_card).collect_view())
        })
    };

    view! {
        <section class="carousel">
            <div class="carousel__track">{current}</div>
            <Show when=move || { len > 1 }>
                <div class="carousel__controls">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        shape=ButtonShape::Circular
                        on_click=move |_| state.update(|c| c.prev())
                    >
                        {icon("chevron-left")}
                    </Button>
                    <div class="carousel__dots">
                        {(0..len)
                            .map(|i| view! {
                                <button
                                    class=move || {
                                        if state.with(|c| c.index) == i {
                                            "carousel__dot carousel__dot--active"
                                        } else {
                                            "carousel__dot"
                                        }
                                    }
                                    on:click=move |_| state.update(|c| c.index = i)
                                ></button>
                            })
                            .collect_view()}
                    </div>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        shape=ButtonShape::Circular
                        on_click=move |_| state.update(|c| c.next())
                    >
                        {icon("chevron-right")}
                    </Button>
                </div>
            </Show>
        </section>
    }
}
