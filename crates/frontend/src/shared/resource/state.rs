//! Pure state of one list page. No signals and no I/O here: the controller
//! wraps a `ListState` in an `RwSignal` and feeds it the API results.

use std::marker::PhantomData;

use contracts::enums::status::Toggle;
use contracts::shared::envelope::ApiError;
use contracts::shared::pagination::ListResource;
use contracts::shared::query::ListQuery;

use super::field::first_missing;
use super::{Resource, RemovePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<D> {
    pub mode: FormMode,
    pub draft: D,
    pub error: Option<String>,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Live client-side filter over the loaded page
    pub search_term: String,
    /// Search sent with the last load (`?search=`)
    pub applied_search: String,
    pub status_filter: Option<String>,
    /// Vendor label, filtered client-side
    pub vendor: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl FilterState {
    pub fn new(limit: usize) -> Self {
        Self {
            search_term: String::new(),
            applied_search: String::new(),
            status_filter: None,
            vendor: None,
            page: 1,
            limit,
        }
    }
}

/// Result of matching a response to the load that requested it
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A newer load was started; the response was dropped
    Stale,
    Loaded,
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved {
        mode: FormMode,
        message: Option<String>,
    },
    Failed(ApiError),
    /// No modal was waiting for a result
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed,
    ReloadNeeded,
    Failed(ApiError),
}

pub struct ListState<R: Resource> {
    pub list: ListResource<R::Item>,
    pub phase: Phase,
    pub filter: FilterState,
    pub modal: Option<ModalState<R::Draft>>,
    /// Row whose DELETE is in flight
    pub removing: Option<String>,
    load_seq: u64,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ListState<R> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            phase: self.phase,
            filter: self.filter.clone(),
            modal: self.modal.clone(),
            removing: self.removing.clone(),
            load_seq: self.load_seq,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn new(limit: usize) -> Self {
        Self {
            list: ListResource {
                limit,
                ..ListResource::default()
            },
            phase: Phase::Idle,
            filter: FilterState::new(limit),
            modal: None,
            removing: None,
            load_seq: 0,
            _resource: PhantomData,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Query for the next load
    pub fn query(&self) -> ListQuery {
        let search = self.filter.applied_search.trim();
        ListQuery {
            page: self.filter.page.max(1),
            limit: self.filter.limit,
            search: (!search.is_empty()).then(|| search.to_string()),
            status: self.filter.status_filter.clone(),
            ..ListQuery::default()
        }
    }

    // ------------------------------------------------------------------
    // load
    // ------------------------------------------------------------------

    /// Mark a load as started and return its ticket
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.phase = Phase::Loading;
        self.load_seq
    }

    /// Apply the response of load `ticket`. Only the most recent load may
    /// change the state; a failure empties the list.
    pub fn finish_load(
        &mut self,
        ticket: u64,
        result: Result<ListResource<R::Item>, ApiError>,
    ) -> LoadOutcome {
        if ticket != self.load_seq {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(list) => {
                self.filter.page = list.page;
                self.list = list;
                self.phase = Phase::Loaded;
                LoadOutcome::Loaded
            }
            Err(e) => {
                self.list = ListResource {
                    page: self.filter.page,
                    limit: self.filter.limit,
                    ..ListResource::default()
                };
                self.phase = Phase::Errored;
                LoadOutcome::Failed(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // filters
    // ------------------------------------------------------------------

    /// Rows of the current page passing the client-side filters
    pub fn visible_items(&self) -> Vec<R::Item> {
        let needle = self.filter.search_term.trim().to_lowercase();
        self.list
            .items
            .iter()
            .filter(|item| needle.is_empty() || R::matches_search(*item, &needle))
            .filter(|item| match &self.filter.vendor {
                Some(vendor) => R::vendor_of(*item)
                    .map(|v| v.label() == vendor.as_str())
                    .unwrap_or(false),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Distinct vendor labels on the current page, in first-seen order
    pub fn vendor_options(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for vendor in self.list.items.iter().filter_map(R::vendor_of) {
            let label = vendor.label();
            if !names.iter().any(|n| n == label) {
                names.push(label.to_string());
            }
        }
        names
    }

    pub fn set_search_term(&mut self, term: String) {
        self.filter.search_term = term;
    }

    /// Send the current search term to the server; returns whether a
    /// reload is needed
    pub fn apply_search(&mut self) -> bool {
        let term = self.filter.search_term.trim().to_string();
        if term == self.filter.applied_search {
            return false;
        }
        self.filter.applied_search = term;
        self.filter.page = 1;
        true
    }

    /// Empty or unknown codes clear the filter. Returns whether it changed.
    pub fn set_status_filter(&mut self, code: &str) -> bool {
        let next = R::status_options()
            .into_iter()
            .find(|(c, _)| *c == code)
            .map(|(c, _)| c.to_string());
        if next == self.filter.status_filter {
            return false;
        }
        self.filter.status_filter = next;
        self.filter.page = 1;
        true
    }

    pub fn set_vendor_filter(&mut self, vendor: &str) {
        self.filter.vendor = (!vendor.is_empty()).then(|| vendor.to_string());
    }

    /// Returns whether the page actually changed
    pub fn set_page(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.list.total_pages.max(1));
        if page == self.filter.page {
            return false;
        }
        self.filter.page = page;
        true
    }

    pub fn set_limit(&mut self, limit: usize) -> bool {
        if limit == 0 || limit == self.filter.limit {
            return false;
        }
        self.filter.limit = limit;
        self.filter.page = 1;
        true
    }

    // ------------------------------------------------------------------
    // modal
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.modal = Some(ModalState {
            mode: FormMode::Create,
            draft: R::Draft::default(),
            error: None,
            submitting: false,
        });
    }

    /// Open the edit modal with a fresh copy of row `id`
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(item) = self.list.items.iter().find(|i| R::id(i) == id) else {
            return false;
        };
        self.modal = Some(ModalState {
            mode: FormMode::Edit,
            draft: R::draft_from(item),
            error: None,
            submitting: false,
        });
        true
    }

    pub fn update_draft(&mut self, f: impl FnOnce(&mut R::Draft)) {
        if let Some(modal) = self.modal.as_mut() {
            if !modal.submitting {
                f(&mut modal.draft);
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Validate the draft and mark the modal as submitting. Returns the
    /// prepared draft to send, or `None` when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<(FormMode, R::Draft)> {
        let modal = self.modal.as_mut()?;
        if modal.submitting {
            return None;
        }
        let creating = modal.mode == FormMode::Create;
        if let Some(label) = first_missing(&R::fields(), &modal.draft, creating) {
            modal.error = Some(format!("{} is required", label));
            return None;
        }
        if let Err(e) = R::validate(&modal.draft) {
            modal.error = Some(e);
            return None;
        }
        let mut draft = modal.draft.clone();
        R::prepare(&mut draft);
        modal.error = None;
        modal.submitting = true;
        Some((modal.mode, draft))
    }

    /// On success the modal closes; on failure it stays open with the error.
    pub fn finish_submit(&mut self, result: Result<Option<String>, ApiError>) -> SubmitOutcome {
        let Some(modal) = self.modal.as_mut() else {
            return SubmitOutcome::Ignored;
        };
        match result {
            Ok(message) => {
                let mode = modal.mode;
                self.modal = None;
                SubmitOutcome::Saved { mode, message }
            }
            Err(e) => {
                modal.submitting = false;
                modal.error = Some(e.user_message());
                SubmitOutcome::Failed(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // row actions
    // ------------------------------------------------------------------

    /// Question asked before row `id` is deleted
    pub fn remove_prompt(&self, id: &str) -> String {
        let label = self.list.items.iter().find(|i| R::id(i) == id).map(R::label);
        match label {
            Some(label) => format!("Are you sure you want to delete {} \"{}\"?", R::ELEMENT, label),
            None => format!("Are you sure you want to delete this {}?", R::ELEMENT),
        }
    }

    /// Apply the answer to `remove_prompt`. Returns whether the DELETE may be
    /// sent; a declined prompt leaves the state untouched.
    pub fn begin_remove(&mut self, id: &str, confirmed: bool) -> bool {
        if !confirmed || self.removing.is_some() {
            return false;
        }
        self.removing = Some(id.to_string());
        true
    }

    pub fn finish_remove(&mut self, id: &str, result: Result<Option<String>, ApiError>) -> RemoveOutcome {
        self.removing = None;
        match result {
            Err(e) => RemoveOutcome::Failed(e),
            Ok(_) => match R::remove_policy() {
                RemovePolicy::Reload => RemoveOutcome::ReloadNeeded,
                RemovePolicy::FilterLocal => {
                    if self.list.remove_where(|i| R::id(i) == id) {
                        RemoveOutcome::Removed
                    } else {
                        RemoveOutcome::ReloadNeeded
                    }
                }
            },
        }
    }

    /// Status row `id` would get from the toggle action
    pub fn toggle_target(&self, id: &str) -> Option<R::Status> {
        self.list
            .items
            .iter()
            .find(|i| R::id(i) == id)
            .and_then(R::status)
            .filter(|s| s.can_toggle())
            .map(|s| s.toggled())
    }

    /// Patch the row in place once the server accepted the new status
    pub fn finish_toggle(&mut self, id: &str, status: R::Status) -> bool {
        match self.list.items.iter_mut().find(|i| R::id(i) == id) {
            Some(item) => {
                R::set_status(item, status);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::field::{FieldKind, FieldSpec};
    use crate::shared::resource::{any_contains, Column};
    use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
    use contracts::enums::status::ActiveStatus;
    use contracts::shared::envelope::decode_response;
    use contracts::shared::pagination::ListPayload;

    struct Categories;

    impl Resource for Categories {
        type Item = Category;
        type Draft = CategoryDto;
        type Status = ActiveStatus;

        const KEY: &'static str = "categories";
        const TITLE: &'static str = "Categories";
        const ELEMENT: &'static str = "category";

        fn base_path() -> &'static str {
            "/api/admins/categories"
        }

        fn id(item: &Category) -> &str {
            &item.id
        }

        fn draft_from(item: &Category) -> CategoryDto {
            CategoryDto::from(item)
        }

        fn draft_id(draft: &CategoryDto) -> Option<String> {
            draft.id.clone()
        }

        fn validate(draft: &CategoryDto) -> Result<(), String> {
            draft.validate().map_err(str::to_string)
        }

        fn matches_search(item: &Category, needle: &str) -> bool {
            any_contains(needle, &[item.name.as_str(), item.description.as_str()])
        }

        fn columns() -> Vec<Column<Category>> {
            vec![Column::text("Name", |c| c.name.clone())]
        }

        fn fields() -> Vec<FieldSpec<CategoryDto>> {
            vec![FieldSpec::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &CategoryDto| d.name.clone(),
                |d, v| d.name = v,
            )
            .required()]
        }

        fn status(item: &Category) -> Option<ActiveStatus> {
            Some(item.status)
        }

        fn set_status(item: &mut Category, status: ActiveStatus) {
            item.status = status;
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: None,
            status: ActiveStatus::Active,
            created_at: None,
        }
    }

    fn loaded(ids: &[&str]) -> ListState<Categories> {
        let mut state = ListState::<Categories>::new(10);
        let ticket = state.begin_load();
        let items: Vec<Category> = ids.iter().map(|id| category(id, &format!("Cat {}", id))).collect();
        let list = ListResource::paged_locally(items, 1, 10);
        assert_eq!(state.finish_load(ticket, Ok(list)), LoadOutcome::Loaded);
        state
    }

    #[test]
    fn test_load_sets_page_and_total_pages() {
        let json = r#"{"success":true,"data":{"items":[
            {"_id":"1","name":"A"},{"_id":"2","name":"B"}],
            "pagination":{"page":3,"limit":2,"total":5}}}"#;
        let mut state = ListState::<Categories>::new(2);
        let ticket = state.begin_load();
        assert!(state.is_loading());
        let result = decode_response::<ListPayload<Category>>(200, json)
            .map(|p| ListResource::from_payload(p, &state.query()));
        assert_eq!(state.finish_load(ticket, result), LoadOutcome::Loaded);
        assert_eq!(state.list.items.len(), 2);
        assert_eq!(state.list.total_pages, 3);
        assert_eq!(state.filter.page, 3);
        assert_eq!(state.phase, Phase::Loaded);
    }

    #[test]
    fn test_failed_load_empties_list() {
        let mut state = loaded(&["1", "2"]);
        let ticket = state.begin_load();
        let result = decode_response::<ListPayload<Category>>(
            200,
            r#"{"success":false,"message":"Failed to load categories"}"#,
        )
        .map(|p| ListResource::from_payload(p, &state.query()));
        let outcome = state.finish_load(ticket, result);
        assert_eq!(
            outcome,
            LoadOutcome::Failed(ApiError::Application("Failed to load categories".into()))
        );
        assert!(state.list.items.is_empty());
        assert_eq!(state.phase, Phase::Errored);
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut state = ListState::<Categories>::new(10);
        let first = state.begin_load();
        let second = state.begin_load();
        let newer = ListResource::paged_locally(vec![category("2", "New")], 1, 10);
        assert_eq!(state.finish_load(second, Ok(newer)), LoadOutcome::Loaded);
        let older = ListResource::paged_locally(vec![category("1", "Old")], 1, 10);
        assert_eq!(state.finish_load(first, Ok(older)), LoadOutcome::Stale);
        assert_eq!(state.list.items[0].name, "New");
    }

    #[test]
    fn test_query_carries_filters() {
        let mut state = loaded(&["1"]);
        assert!(state.set_status_filter("inactive"));
        state.set_search_term("  lamp ".into());
        assert!(state.apply_search());
        let query = state.query();
        assert_eq!(query.status.as_deref(), Some("inactive"));
        assert_eq!(query.search.as_deref(), Some("lamp"));
        assert_eq!(query.page, 1);
        assert!(state.set_status_filter(""));
        assert_eq!(state.query().status, None);
        assert!(!state.set_status_filter("bogus"));
    }

    #[test]
    fn test_visible_items_filters_locally() {
        let mut state = loaded(&["1", "2"]);
        state.set_search_term("CAT 2".into());
        let visible = state.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
        assert_eq!(state.list.items.len(), 2);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut state = loaded(&["1", "2", "3"]);
        let before = state.clone();
        assert_eq!(
            state.remove_prompt("2"),
            "Are you sure you want to delete category \"2\"?"
        );
        assert!(!state.begin_remove("2", false));
        assert_eq!(state.list, before.list);
        assert_eq!(state.removing, None);
        assert_eq!(state.phase, before.phase);
    }

    #[test]
    fn test_confirmed_delete_blocks_a_second_one_until_done() {
        let mut state = loaded(&["1", "2"]);
        assert!(state.begin_remove("1", true));
        assert_eq!(state.removing.as_deref(), Some("1"));
        assert!(!state.begin_remove("2", true));
        assert_eq!(state.finish_remove("1", Ok(None)), RemoveOutcome::Removed);
        assert_eq!(state.removing, None);
        assert!(state.begin_remove("2", true));
    }

    #[test]
    fn test_remove_of_unknown_row_asks_for_reload() {
        let mut state = loaded(&["1", "2", "3"]);
        let before = state.list.items.clone();
        assert_eq!(state.finish_remove("9", Ok(None)), RemoveOutcome::ReloadNeeded);
        assert_eq!(state.list.items, before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut state = loaded(&["1", "2", "3"]);
        let outcome = state.finish_remove("2", Ok(None));
        assert_eq!(outcome, RemoveOutcome::Removed);
        let ids: Vec<&str> = state.list.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(state.list.total_count, 2);
    }

    #[test]
    fn test_failed_delete_keeps_items() {
        let mut state = loaded(&["1", "2"]);
        let outcome = state.finish_remove("2", Err(ApiError::Application("In use".into())));
        assert!(matches!(outcome, RemoveOutcome::Failed(_)));
        assert_eq!(state.list.items.len(), 2);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = loaded(&["1"]);
        let next = state.toggle_target("1").unwrap();
        assert_eq!(next, ActiveStatus::Inactive);
        assert!(state.finish_toggle("1", next));
        let back = state.toggle_target("1").unwrap();
        assert!(state.finish_toggle("1", back));
        assert_eq!(state.list.items[0].status, ActiveStatus::Active);
        assert_eq!(state.toggle_target("missing"), None);
    }

    #[test]
    fn test_modal_and_search_edits_leave_table_inputs_alone() {
        let mut state = loaded(&["1", "2"]);
        let rows = state.visible_items();
        let vendors = state.vendor_options();

        assert!(state.open_edit("1"));
        state.update_draft(|d| d.name = "Renamed".into());
        assert_eq!(state.visible_items(), rows);
        assert_eq!(state.vendor_options(), vendors);

        // the applied search is only sent on the next load
        state.set_search_term("cat".into());
        assert_eq!(state.visible_items(), rows);
    }

    #[test]
    fn test_row_with_unreadable_status_has_no_toggle() {
        let mut state = loaded(&["1"]);
        state.list.items[0].status = ActiveStatus::Unknown;
        assert_eq!(state.toggle_target("1"), None);
    }

    #[test]
    fn test_edit_draft_matches_row_without_stale_values() {
        let mut state = loaded(&["1", "2"]);
        assert!(state.open_edit("1"));
        state.update_draft(|d| d.name = "Edited".into());
        state.close_modal();

        assert!(state.open_edit("2"));
        let modal = state.modal.clone().unwrap();
        assert_eq!(modal.mode, FormMode::Edit);
        assert_eq!(modal.draft, CategoryDto::from(&state.list.items[1]));

        state.close_modal();
        state.open_create();
        assert_eq!(state.modal.unwrap().draft, CategoryDto::default());
    }

    #[test]
    fn test_submit_requires_fields_and_keeps_modal_on_error() {
        let mut state = loaded(&["1"]);
        state.open_create();
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.modal.as_ref().unwrap().error.as_deref(),
            Some("Name is required")
        );

        state.update_draft(|d| d.name = "Toys".into());
        let (mode, draft) = state.begin_submit().unwrap();
        assert_eq!(mode, FormMode::Create);
        assert_eq!(draft.name, "Toys");
        assert!(state.begin_submit().is_none());

        let outcome = state.finish_submit(Err(ApiError::Transport("offline".into())));
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let modal = state.modal.as_ref().unwrap();
        assert!(!modal.submitting);
        assert_eq!(modal.error.as_deref(), Some("Operation failed"));

        state.begin_submit().unwrap();
        let outcome = state.finish_submit(Ok(Some("Created".into())));
        assert_eq!(
            outcome,
            SubmitOutcome::Saved {
                mode: FormMode::Create,
                message: Some("Created".into())
            }
        );
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_page_is_clamped() {
        let json: Vec<Category> = (0..25).map(|i| category(&i.to_string(), "x")).collect();
        let mut state = ListState::<Categories>::new(10);
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(ListResource::paged_locally(json, 1, 10)));
        assert!(state.set_page(3));
        assert!(!state.set_page(9));
        assert_eq!(state.filter.page, 3);
        assert!(state.set_limit(25));
        assert_eq!(state.filter.page, 1);
    }
}
