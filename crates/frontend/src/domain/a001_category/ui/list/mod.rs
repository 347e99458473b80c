use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::enums::status::{ActiveStatus, EntityStatus};
use leptos::prelude::*;

use crate::shared::date_utils::date_cell;
use crate::shared::resource::field::{FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

pub struct AdminCategories;

impl Resource for AdminCategories {
    type Item = Category;
    type Draft = CategoryDto;
    type Status = ActiveStatus;

    const KEY: &'static str = "admin_categories";
    const TITLE: &'static str = "Categories";
    const ELEMENT: &'static str = "category";

    fn base_path() -> &'static str {
        "/api/admins/categories"
    }

    fn id(item: &Category) -> &str {
        &item.id
    }

    fn label(item: &Category) -> String {
        item.name.clone()
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
        vec![
            Column::text("Name", |c| c.name.clone()),
            Column::muted("Description", |c| c.description.clone()),
            Column::muted("Created", |c| date_cell(&c.created_at)),
        ]
    }

    fn fields() -> Vec<FieldSpec<CategoryDto>> {
        vec![
            FieldSpec::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &CategoryDto| d.name.clone(),
                |d, v| d.name = v,
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
                "image",
                "Image URL",
                FieldKind::Text,
                |d| d.image.clone(),
                |d, v| d.image = v,
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

    fn status(item: &Category) -> Option<ActiveStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Category, status: ActiveStatus) {
        item.status = status;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    resource_list_page::<AdminCategories>(ListPageOptions {
        icon: Some("categories"),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, description: &str) -> Category {
        Category {
            id: "c1".into(),
            name: name.into(),
            description: description.into(),
            image: None,
            status: ActiveStatus::Active,
            created_at: None,
        }
    }

    #[test]
    fn test_search_covers_name_and_description() {
        let c = category("Electronics", "Phones and laptops");
        assert!(AdminCategories::matches_search(&c, "electro"));
        assert!(AdminCategories::matches_search(&c, "laptop"));
        assert!(!AdminCategories::matches_search(&c, "garden"));
    }

    #[test]
    fn test_status_field_round_trips_code() {
        let fields = AdminCategories::fields();
        let status = fields.iter().find(|f| f.name == "status").unwrap();
        let mut draft = CategoryDto::default();
        (status.set)(&mut draft, "inactive".into());
        assert_eq!(draft.status, ActiveStatus::Inactive);
        assert_eq!((status.get)(&draft), "inactive");
        (status.set)(&mut draft, "bogus".into());
        assert_eq!(draft.status, ActiveStatus::Active);
    }
}
