use contracts::enums::status::EntityStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use super::field::capitalize;
use super::state::{FormMode, ListState, LoadOutcome, RemoveOutcome, SubmitOutcome};
use super::Resource;
use crate::shared::api_client::{log_api_error, use_api_client, ApiClient, HttpMethod};
use crate::shared::api_utils::item_path;
use crate::shared::config::use_config;
use crate::shared::message::{use_messages, MessageCenter};

#[derive(Serialize)]
struct StatusBody<S> {
    status: S,
}

/// Blocking browser confirmation; `false` when there is no window
pub fn confirm(message: &str) -> bool {
    if let Some(win) = web_sys::window() {
        win.confirm_with_message(message).unwrap_or(false)
    } else {
        false
    }
}

/// Drives one `ListState` against the REST endpoints of `R`.
///
/// Every network outcome ends in a banner message; nothing is propagated to
/// the page.
pub struct ResourceController<R: Resource> {
    pub state: RwSignal<ListState<R>>,
    messages: MessageCenter,
    client: ApiClient,
}

impl<R: Resource> Clone for ResourceController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceController<R> {}

impl<R: Resource> ResourceController<R> {
    pub fn new() -> Self {
        let config = use_config();
        Self {
            state: RwSignal::new(ListState::new(config.page_size)),
            messages: use_messages(),
            client: use_api_client(),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client
    }

    pub fn load(&self) {
        let state = self.state;
        let messages = self.messages;
        let client = self.client;
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let query = state.with_untracked(|s| s.query());
        log::debug!("[{}] load page {} (ticket {})", R::KEY, query.page, ticket);

        spawn_local(async move {
            let result = client.get_list::<R::Item>(R::base_path(), &query).await;
            match state.try_update(|s| s.finish_load(ticket, result)) {
                Some(LoadOutcome::Loaded) => {}
                Some(LoadOutcome::Stale) => {
                    log::debug!("[{}] dropped response of ticket {}", R::KEY, ticket);
                }
                Some(LoadOutcome::Failed(e)) => {
                    log_api_error(&format!("[{}] load", R::KEY), &e);
                    messages.error(e.user_message());
                }
                // page was unmounted
                None => {}
            }
        });
    }

    pub fn submit(&self) {
        let state = self.state;
        let messages = self.messages;
        let client = self.client;
        let this = *self;
        let Some((mode, draft)) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let (method, path) = match mode {
            FormMode::Create => (HttpMethod::Post, R::base_path().to_string()),
            FormMode::Edit => match R::draft_id(&draft) {
                Some(id) => (HttpMethod::Put, item_path(R::base_path(), &id)),
                None => {
                    log::error!("[{}] edit draft without id", R::KEY);
                    state.update(|s| s.close_modal());
                    messages.error(contracts::shared::envelope::OPERATION_FAILED);
                    return;
                }
            },
        };

        spawn_local(async move {
            let result = client.write(method, &path, &draft).await;
            match state.try_update(|s| s.finish_submit(result)) {
                Some(SubmitOutcome::Saved { mode, message }) => {
                    let verb = match mode {
                        FormMode::Create => "created",
                        FormMode::Edit => "updated",
                    };
                    log::info!("[{}] {} {}", R::KEY, R::ELEMENT, verb);
                    messages.success(message.unwrap_or_else(|| {
                        format!("{} {} successfully", capitalize(R::ELEMENT), verb)
                    }));
                    this.load();
                }
                Some(SubmitOutcome::Failed(e)) => {
                    log_api_error(&format!("[{}] save", R::KEY), &e);
                    messages.error(e.user_message());
                }
                Some(SubmitOutcome::Ignored) | None => {}
            }
        });
    }

    /// Ask for confirmation, then DELETE row `id`
    pub fn remove(&self, id: String) {
        let state = self.state;
        let messages = self.messages;
        let client = self.client;
        let this = *self;

        let prompt = state.with_untracked(|s| s.remove_prompt(&id));
        let confirmed = confirm(&prompt);
        if !state.try_update(|s| s.begin_remove(&id, confirmed)).unwrap_or(false) {
            return;
        }

        spawn_local(async move {
            let result = client.delete(&item_path(R::base_path(), &id)).await;
            match state.try_update(|s| s.finish_remove(&id, result)) {
                Some(RemoveOutcome::Removed) => {
                    log::info!("[{}] deleted {}", R::KEY, id);
                    messages.success(format!("{} deleted successfully", capitalize(R::ELEMENT)));
                }
                Some(RemoveOutcome::ReloadNeeded) => {
                    messages.success(format!("{} deleted successfully", capitalize(R::ELEMENT)));
                    this.load();
                }
                Some(RemoveOutcome::Failed(e)) => {
                    log_api_error(&format!("[{}] delete {}", R::KEY, id), &e);
                    messages.error(e.user_message());
                }
                None => {}
            }
        });
    }

    /// PUT the opposite status to `{base}/{id}/status`
    pub fn toggle_status(&self, id: String) {
        let state = self.state;
        let messages = self.messages;
        let client = self.client;

        let Some(next) = state.with_untracked(|s| s.toggle_target(&id)) else {
            return;
        };
        let path = format!("{}/status", item_path(R::base_path(), &id));

        spawn_local(async move {
            let result = client
                .write(HttpMethod::Put, &path, &StatusBody { status: next })
                .await;
            match result {
                Ok(_) => {
                    state.try_update(|s| s.finish_toggle(&id, next));
                    messages.success(format!(
                        "{} marked as {}",
                        capitalize(R::ELEMENT),
                        next.display_name().to_lowercase()
                    ));
                }
                Err(e) => {
                    log_api_error(&format!("[{}] toggle {}", R::KEY, id), &e);
                    messages.error(e.user_message());
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // filters and paging
    // ------------------------------------------------------------------

    pub fn set_search_term(&self, term: String) {
        self.state.update(|s| s.set_search_term(term));
    }

    pub fn apply_search(&self) {
        if self.state.try_update(|s| s.apply_search()).unwrap_or(false) {
            self.load();
        }
    }

    pub fn set_status_filter(&self, code: String) {
        if self.state.try_update(|s| s.set_status_filter(&code)).unwrap_or(false) {
            self.load();
        }
    }

    pub fn set_vendor_filter(&self, vendor: String) {
        self.state.update(|s| s.set_vendor_filter(&vendor));
    }

    pub fn set_page(&self, page: usize) {
        if self.state.try_update(|s| s.set_page(page)).unwrap_or(false) {
            self.load();
        }
    }

    pub fn set_limit(&self, limit: usize) {
        if self.state.try_update(|s| s.set_limit(limit)).unwrap_or(false) {
            self.load();
        }
    }

    // ------------------------------------------------------------------
    // modal
    // ------------------------------------------------------------------

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    pub fn open_edit(&self, id: &str) {
        let found = self.state.try_update(|s| s.open_edit(id)).unwrap_or(false);
        if !found {
            log::warn!("[{}] row {} is no longer loaded", R::KEY, id);
        }
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut R::Draft)) {
        self.state.update(|s| s.update_draft(f));
    }

    pub fn close_modal(&self) {
        self.state.update(|s| s.close_modal());
    }
}
