use contracts::domain::a009_help_content::aggregate::{HelpContent, HelpContentDto, HELP_SECTIONS};
use contracts::enums::status::{EntityStatus, PublishStatus};
use leptos::prelude::*;

use crate::shared::date_utils::date_cell;
use crate::shared::resource::field::{capitalize, coerce_int, FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

/// FAQ and policy articles shown on the storefront help pages
pub struct AdminHelpContent;

impl Resource for AdminHelpContent {
    type Item = HelpContent;
    type Draft = HelpContentDto;
    type Status = PublishStatus;

    const KEY: &'static str = "admin_help";
    const TITLE: &'static str = "Help content";
    const ELEMENT: &'static str = "article";

    fn base_path() -> &'static str {
        "/api/admins/help-content"
    }

    fn id(item: &HelpContent) -> &str {
        &item.id
    }

    fn label(item: &HelpContent) -> String {
        item.title.clone()
    }

    fn draft_from(item: &HelpContent) -> HelpContentDto {
        HelpContentDto::from(item)
    }

    fn draft_id(draft: &HelpContentDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &HelpContentDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn matches_search(item: &HelpContent, needle: &str) -> bool {
        any_contains(
            needle,
            &[item.title.as_str(), item.section.as_str(), item.content.as_str()],
        )
    }

    fn columns() -> Vec<Column<HelpContent>> {
        vec![
            Column::text("Title", |h| h.title.clone()),
            Column::text("Section", |h| capitalize(&h.section)),
            Column::money("Order", |h| h.order.to_string()),
            Column::muted("Updated", |h| date_cell(&h.updated_at)),
        ]
    }

    fn fields() -> Vec<FieldSpec<HelpContentDto>> {
        vec![
            FieldSpec::new(
                "title",
                "Title",
                FieldKind::Text,
                |d: &HelpContentDto| d.title.clone(),
                |d, v| d.title = v,
            )
            .required(),
            FieldSpec::new(
                "section",
                "Section",
                FieldKind::static_select(&HELP_SECTIONS),
                |d: &HelpContentDto| d.section.clone(),
                |d, v| d.section = v,
            )
            .required(),
            FieldSpec::new(
                "content",
                "Content",
                FieldKind::TextArea,
                |d: &HelpContentDto| d.content.clone(),
                |d, v| d.content = v,
            )
            .required(),
            FieldSpec::new(
                "order",
                "Display order",
                FieldKind::Number,
                |d| d.order.to_string(),
                |d, v| d.order = coerce_int(&v),
            ),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::status_select::<PublishStatus>(),
                |d| d.status.code().to_string(),
                |d, v| d.status = PublishStatus::from_code(&v).unwrap_or_default(),
            ),
        ]
    }

    fn status(item: &HelpContent) -> Option<PublishStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut HelpContent, status: PublishStatus) {
        item.status = status;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn HelpContentList() -> impl IntoView {
    resource_list_page::<AdminHelpContent>(ListPageOptions {
        icon: Some("help"),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_article_starts_as_draft_in_first_section() {
        let draft = HelpContentDto::default();
        assert_eq!(draft.status, PublishStatus::Draft);
        assert_eq!(draft.section, HELP_SECTIONS[0]);
    }

    #[test]
    fn test_order_field_truncates() {
        let fields = AdminHelpContent::fields();
        let order = fields.iter().find(|f| f.name == "order").unwrap();
        let mut draft = HelpContentDto::default();
        (order.set)(&mut draft, "3.9".into());
        assert_eq!(draft.order, 3);
    }
}
