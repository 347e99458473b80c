use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryDto};
use contracts::domain::entity_ref::ref_label;
use contracts::enums::status::{ActiveStatus, EntityStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::resource::field::{FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

pub struct AdminSubcategories;

impl Resource for AdminSubcategories {
    type Item = Subcategory;
    type Draft = SubcategoryDto;
    type Status = ActiveStatus;

    const KEY: &'static str = "admin_subcategories";
    const TITLE: &'static str = "Subcategories";
    const ELEMENT: &'static str = "subcategory";

    fn base_path() -> &'static str {
        "/api/admins/subcategories"
    }

    fn id(item: &Subcategory) -> &str {
        &item.id
    }

    fn label(item: &Subcategory) -> String {
        item.name.clone()
    }

    fn draft_from(item: &Subcategory) -> SubcategoryDto {
        SubcategoryDto::from(item)
    }

    fn draft_id(draft: &SubcategoryDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &SubcategoryDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn matches_search(item: &Subcategory, needle: &str) -> bool {
        let category = ref_label(&item.category);
        any_contains(
            needle,
            &[item.name.as_str(), item.description.as_str(), category.as_str()],
        )
    }

    fn columns() -> Vec<Column<Subcategory>> {
        vec![
            Column::text("Name", |s| s.name.clone()),
            Column::text("Category", |s| ref_label(&s.category)),
            Column::muted("Description", |s| s.description.clone()),
        ]
    }

    fn fields() -> Vec<FieldSpec<SubcategoryDto>> {
        vec![
            FieldSpec::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &SubcategoryDto| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FieldSpec::new(
                "category",
                "Category",
                FieldKind::RemoteSelect {
                    path: "/api/admins/categories",
                },
                |d: &SubcategoryDto| d.category_id.clone(),
                |d, v| d.category_id = v,
            )
            .required(),
            FieldSpec::new(
                "description",
                "Description",
                FieldKind::TextArea,
                |d| d.description.clone(),
                |d, v| d.description = v,
            ),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::status_select::<ActiveStatus>(),
                |d| d.status.code().to_string(),
                |d, v| d.status = ActiveStatus::from_code(&v).unwrap_or_default(),
            ),
        ]
    }

    fn status(item: &Subcategory) -> Option<ActiveStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Subcategory, status: ActiveStatus) {
        item.status = status;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SubcategoryList() -> impl IntoView {
    let navigate = use_navigate();
    let on_back = Callback::new(move |_| navigate("/admin/categories", Default::default()));
    resource_list_page::<AdminSubcategories>(ListPageOptions {
        icon: Some("subcategories"),
        on_back: Some(on_back),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::field::first_missing;

    #[test]
    fn test_category_is_required_before_validation() {
        let draft = SubcategoryDto {
            name: "Phones".into(),
            ..SubcategoryDto::default()
        };
        let fields = AdminSubcategories::fields();
        assert_eq!(first_missing(&fields, &draft, true), Some("Category"));
    }

    #[test]
    fn test_search_matches_parent_category_name() {
        let s: Subcategory = serde_json::from_str(
            r#"{"_id":"s1","name":"Phones","category":{"_id":"c1","name":"Electronics"}}"#,
        )
        .unwrap();
        assert!(AdminSubcategories::matches_search(&s, "electronics"));
        assert_eq!((AdminSubcategories::columns()[1].render)(&s), "Electronics");
    }
}
