//! Create/edit modal of a resource page, rendered from its `FieldSpec`s.

use contracts::domain::entity_ref::EntityRef;
use contracts::shared::query::ListQuery;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::ResourceController;
use super::field::{capitalize, FieldKind, FieldSpec};
use super::state::FormMode;
use super::Resource;
use crate::shared::api_client::log_api_error;
use crate::shared::modal_frame::ModalFrame;

const REMOTE_OPTIONS_LIMIT: usize = 100;

fn modal_title<R: Resource>(mode: FormMode) -> String {
    match mode {
        FormMode::Create => format!("Add {}", capitalize(R::ELEMENT)),
        FormMode::Edit => format!("Edit {}", capitalize(R::ELEMENT)),
    }
}

/// Options of a `RemoteSelect`, loaded once when the form opens
fn remote_options<R: Resource>(
    ctl: ResourceController<R>,
    path: &'static str,
) -> RwSignal<Vec<(String, String)>> {
    let options = RwSignal::new(Vec::<(String, String)>::new());
    let client = ctl.client();
    spawn_local(async move {
        let query = ListQuery::first_page(REMOTE_OPTIONS_LIMIT);
        match client.get_list::<EntityRef>(path, &query).await {
            Ok(list) => {
                let loaded = list
                    .items
                    .iter()
                    .map(|r| (r.id().to_string(), r.label().to_string()))
                    .collect();
                options.try_set(loaded);
            }
            Err(e) => log_api_error(&format!("[{}] options {}", R::KEY, path), &e),
        }
    });
    options
}

fn field_input<R: Resource>(ctl: ResourceController<R>, field: FieldSpec<R::Draft>) -> AnyView {
    let get = field.get;
    let set = field.set;
    let value = move || {
        ctl.state
            .with(|s| s.modal.as_ref().map(|m| get(&m.draft)).unwrap_or_default())
    };
    let disabled = move || ctl.state.with(|s| s.modal.as_ref().map(|m| m.submitting).unwrap_or(false));
    let on_input = move |ev: ev::Event| {
        let raw = event_target_value(&ev);
        ctl.update_draft(|d| set(d, raw));
    };
    let id = format!("{}-{}", R::KEY, field.name);

    match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=id
                class="form__textarea"
                rows="4"
                required=field.required
                disabled=disabled
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select id=id class="form__select" disabled=disabled prop:value=value on:change=on_input>
                {(!field.required).then(|| view! { <option value="">"-"</option> })}
                {options
                    .into_iter()
                    .map(|(code, label)| {
                        let selected_code = code.clone();
                        view! {
                            <option value=code selected=move || value() == selected_code>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::RemoteSelect { path } => {
            let options = remote_options(ctl, path);
            view! {
                <select id=id class="form__select" disabled=disabled prop:value=value on:change=on_input>
                    <option value="">{format!("Select {}", field.label.to_lowercase())}</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|(id, label)| {
                                let selected_id = id.clone();
                                view! {
                                    <option value=id selected=move || value() == selected_id>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
        kind => {
            let step = matches!(kind, FieldKind::Number).then_some("any");
            let shown = if kind.keeps_raw_text() {
                let initial = ctl
                    .state
                    .with_untracked(|s| s.modal.as_ref().map(|m| get(&m.draft)).unwrap_or_default());
                Signal::stored(initial)
            } else {
                Signal::derive(value)
            };
            view! {
                <input
                    id=id
                    class="form__input"
                    type=kind.input_type()
                    step=step
                    required=field.required
                    disabled=disabled
                    prop:value=shown
                    on:input=on_input
                />
            }
            .into_any()
        }
    }
}

/// Modal form bound to the draft of `ctl`. Render only while a modal is open.
pub fn resource_form<R: Resource>(ctl: ResourceController<R>) -> impl IntoView {
    let mode = ctl
        .state
        .with_untracked(|s| s.modal.as_ref().map(|m| m.mode))
        .unwrap_or(FormMode::Create);
    let creating = mode == FormMode::Create;

    let submitting = Signal::derive(move || {
        ctl.state
            .with(|s| s.modal.as_ref().map(|m| m.submitting).unwrap_or(false))
    });
    let error = move || ctl.state.with(|s| s.modal.as_ref().and_then(|m| m.error.clone()));

    let fields = R::fields()
        .into_iter()
        .filter(|f| creating || !f.create_only)
        .map(|field| {
            let label = field.label;
            let required = field.required;
            let id = format!("{}-{}", R::KEY, field.name);
            view! {
                <div class="form__group">
                    <label class="form__label" for=id>
                        {label}
                        {required.then(|| view! { <span class="form__required">" *"</span> })}
                    </label>
                    {field_input(ctl, field)}
                </div>
            }
        })
        .collect_view();

    view! {
        <ModalFrame
            title={modal_title::<R>(mode)}
            on_close=Callback::new(move |_| ctl.close_modal())
            locked=submitting
        >
            <form
                class="form"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    ctl.submit();
                }
            >
                {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
                {fields}
                <div class="form__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        disabled=move || submitting.get()
                        on:click=move |_| ctl.close_modal()
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || match (submitting.get(), creating) {
                            (true, _) => "Saving...".to_string(),
                            (false, true) => format!("Create {}", capitalize(R::ELEMENT)),
                            (false, false) => "Save changes".to_string(),
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::{any_contains, Column};
    use contracts::domain::a005_discount::aggregate::{Discount, DiscountDto};
    use contracts::enums::status::NoStatus;

    struct Discounts;

    impl Resource for Discounts {
        type Item = Discount;
        type Draft = DiscountDto;
        type Status = NoStatus;

        const KEY: &'static str = "discounts";
        const TITLE: &'static str = "Discounts";
        const ELEMENT: &'static str = "discount";

        fn base_path() -> &'static str {
            "/api/admins/discounts"
        }

        fn id(item: &Discount) -> &str {
            &item.id
        }

        fn draft_from(item: &Discount) -> DiscountDto {
            DiscountDto::from(item)
        }

        fn draft_id(draft: &DiscountDto) -> Option<String> {
            draft.id.clone()
        }

        fn validate(_draft: &DiscountDto) -> Result<(), String> {
            Ok(())
        }

        fn matches_search(item: &Discount, needle: &str) -> bool {
            any_contains(needle, &[item.code.as_str()])
        }

        fn columns() -> Vec<Column<Discount>> {
            Vec::new()
        }

        fn fields() -> Vec<FieldSpec<DiscountDto>> {
            Vec::new()
        }
    }

    #[test]
    fn test_modal_title() {
        assert_eq!(modal_title::<Discounts>(FormMode::Create), "Add Discount");
        assert_eq!(modal_title::<Discounts>(FormMode::Edit), "Edit Discount");
    }
}
