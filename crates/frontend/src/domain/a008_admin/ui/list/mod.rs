use contracts::domain::a008_admin::aggregate::{Admin, AdminDto, ADMIN_ROLES};
use contracts::enums::status::{ActiveStatus, EntityStatus};
use leptos::prelude::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::resource::field::{capitalize, FieldKind, FieldSpec};
use crate::shared::resource::list_page::{resource_list_page, ListPageOptions};
use crate::shared::resource::{any_contains, Column, Resource};

/// Administrator accounts, managed by the master admin only
pub struct MasterAdmins;

impl Resource for MasterAdmins {
    type Item = Admin;
    type Draft = AdminDto;
    type Status = ActiveStatus;

    const KEY: &'static str = "master_admins";
    const TITLE: &'static str = "Admins";
    const ELEMENT: &'static str = "admin";

    fn base_path() -> &'static str {
        "/api/admins/master/admins"
    }

    fn id(item: &Admin) -> &str {
        &item.id
    }

    fn label(item: &Admin) -> String {
        item.name.clone()
    }

    fn draft_from(item: &Admin) -> AdminDto {
        AdminDto::from(item)
    }

    fn draft_id(draft: &AdminDto) -> Option<String> {
        draft.id.clone()
    }

    fn validate(draft: &AdminDto) -> Result<(), String> {
        draft.validate().map_err(str::to_string)
    }

    fn prepare(draft: &mut AdminDto) {
        draft.email = draft.email.trim().to_lowercase();
    }

    fn matches_search(item: &Admin, needle: &str) -> bool {
        any_contains(
            needle,
            &[item.name.as_str(), item.email.as_str(), item.role.as_str()],
        )
    }

    fn columns() -> Vec<Column<Admin>> {
        vec![
            Column::text("Name", |a| a.name.clone()),
            Column::text("Email", |a| a.email.clone()),
            Column::text("Role", |a| capitalize(&a.role)),
            Column::muted("Last login", |a| {
                a.last_login.as_deref().map(format_datetime).unwrap_or_else(|| "Never".into())
            }),
        ]
    }

    fn fields() -> Vec<FieldSpec<AdminDto>> {
        vec![
            FieldSpec::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &AdminDto| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FieldSpec::new(
                "email",
                "Email",
                FieldKind::Email,
                |d: &AdminDto| d.email.clone(),
                |d, v| d.email = v,
            )
            .required(),
            FieldSpec::new(
                "role",
                "Role",
                FieldKind::static_select(&ADMIN_ROLES),
                |d: &AdminDto| d.role.clone(),
                |d, v| d.role = v,
            )
            .required(),
            FieldSpec::new(
                "password",
                "Password",
                FieldKind::Password,
                |d: &AdminDto| d.password.clone(),
                |d, v| d.password = v,
            )
            .required()
            .create_only(),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::status_select::<ActiveStatus>(),
                |d| d.status.code().to_string(),
                |d, v| d.status = ActiveStatus::from_code(&v).unwrap_or_default(),
            ),
        ]
    }

    fn status(item: &Admin) -> Option<ActiveStatus> {
        Some(item.status)
    }

    fn set_status(item: &mut Admin, status: ActiveStatus) {
        item.status = status;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AdminAccountList() -> impl IntoView {
    resource_list_page::<MasterAdmins>(ListPageOptions {
        icon: Some("users"),
        ..ListPageOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::field::first_missing;

    #[test]
    fn test_password_required_only_when_creating() {
        let fields = MasterAdmins::fields();
        let draft = AdminDto {
            name: "Meera".into(),
            email: "meera@example.com".into(),
            ..AdminDto::default()
        };
        assert_eq!(first_missing(&fields, &draft, true), Some("Password"));
        assert_eq!(first_missing(&fields, &draft, false), None);
    }

    #[test]
    fn test_role_options_come_from_known_roles() {
        let fields = MasterAdmins::fields();
        let role = fields.iter().find(|f| f.name == "role").unwrap();
        match &role.kind {
            FieldKind::Select(options) => {
                assert_eq!(options.len(), ADMIN_ROLES.len());
                assert_eq!(options[0], ("admin".to_string(), "Admin".to_string()));
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_edit_draft_keeps_password_empty() {
        let admin: Admin = serde_json::from_str(
            r#"{"_id":"a1","name":"Meera","email":"m@x.io","role":"support"}"#,
        )
        .unwrap();
        let draft = MasterAdmins::draft_from(&admin);
        assert!(draft.password.is_empty());
        assert_eq!(draft.role, "support");
        assert!(serde_json::to_value(&draft).unwrap().get("password").is_none());
    }
}
