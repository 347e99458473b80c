use leptos::prelude::*;

use crate::shared::icons::icon;

/// Title row of a page; children are the action buttons on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Icon name from `icons::icon`
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! { <span class="page-header__icon">{icon(name)}</span> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
