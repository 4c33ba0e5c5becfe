//! Plain-text screens for the form and the directory.

use std::fmt::Write;

use crate::directory::DirectoryView;
use crate::domain::DirectoryEntry;
use crate::form::{FormField, FormView};

pub const SUCCESS_LINE: &str = "✓ User added successfully!";
pub const LOADING_LINE: &str = "Loading users...";
pub const EMPTY_LINE: &str = "📭 No users found";
pub const SEARCH_PLACEHOLDER: &str = "🔍 Search by name...";

/// Renders the whole app: shell header, the form, then the directory.
pub fn render_app(form: &FormView, directory: &DirectoryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "👥 User Management");
    let _ = writeln!(out, "Manage and organize your users efficiently");
    let _ = writeln!(out);
    out.push_str(&render_form(form));
    let _ = writeln!(out);
    out.push_str(&render_directory(directory));
    out
}

pub fn render_form(view: &FormView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Add New User");
    let _ = writeln!(out, "Fill in the details below to add a new user");
    if view.success_visible {
        let _ = writeln!(out, "{}", SUCCESS_LINE);
    }

    for field in FormField::ALL {
        let value = view.fields.get(field);
        if value.is_empty() {
            let _ = writeln!(out, "  {:<14} [{}]", field.label(), field.placeholder());
        } else {
            let _ = writeln!(out, "  {:<14} {}", field.label(), value);
        }
        if let Some(message) = view.errors.get(&field) {
            let _ = writeln!(out, "  {:<14} ! {}", "", message);
        }
    }
    out
}

/// Renders the directory: header, search box, then exactly one of the loading,
/// error, empty or card states.
pub fn render_directory(view: &DirectoryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "User Directory");
    let _ = writeln!(out, "{} Users", view.entries.len());
    if view.search_term.is_empty() {
        let _ = writeln!(out, "[{}]", SEARCH_PLACEHOLDER);
    } else {
        let _ = writeln!(out, "🔍 {}", view.search_term);
    }

    if view.loading {
        let _ = writeln!(out, "{}", LOADING_LINE);
    } else if let Some(error) = &view.error {
        let _ = writeln!(out, "⚠️ {}", error);
    } else if view.entries.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_LINE);
    } else {
        for entry in &view.entries {
            render_card(&mut out, entry);
        }
    }
    out
}

fn render_card(out: &mut String, entry: &DirectoryEntry) {
    let initial = entry.initial().unwrap_or('?');
    let age = if entry.age_is_estimated() {
        format!("~{} years (estimated)", entry.age())
    } else {
        format!("{} years", entry.age())
    };

    let _ = writeln!(out, "[{}] {}  ({})", initial, entry.name(), entry.id());
    let _ = writeln!(out, "    💼 Job: {}", entry.job());
    let _ = writeln!(out, "    🌍 Country: {}", entry.country());
    let _ = writeln!(out, "    🎂 Age: {}", age);
    let _ = writeln!(out, "    {}", entry.description());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocalUser, RemoteUser, UserId};
    use crate::fetch::FETCH_FAILED_MESSAGE;
    use crate::form::{FormFields, AGE_OUT_OF_RANGE};

    fn ada() -> DirectoryEntry {
        DirectoryEntry::Local(LocalUser {
            id: UserId::Local(1),
            name: "ada lovelace".to_string(),
            job: "Analyst".to_string(),
            country: "UK".to_string(),
            age: 36,
            description: "First programmer".to_string(),
        })
    }

    fn leanne() -> DirectoryEntry {
        DirectoryEntry::Remote(RemoteUser {
            id: UserId::Remote(1),
            name: "Leanne Graham".to_string(),
            job: "Romaguera-Crona".to_string(),
            country: "USA".to_string(),
            estimated_age: 41,
            description: "Multi-layered client-server neural-net".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031".to_string(),
        })
    }

    #[test]
    fn test_cards_show_initial_and_age_kind() {
        let view = DirectoryView {
            entries: vec![leanne(), ada()],
            ..DirectoryView::default()
        };

        let screen = render_directory(&view);

        assert!(screen.contains("2 Users"));
        assert!(screen.contains("[A] ada lovelace"));
        assert!(screen.contains("💼 Job: Romaguera-Crona"));
        assert!(screen.contains("🌍 Country: UK"));
        assert!(screen.contains("🎂 Age: 36 years"));
        assert!(screen.contains("🎂 Age: ~41 years (estimated)"));
        assert!(screen.contains(SEARCH_PLACEHOLDER));
        assert!(!screen.contains(EMPTY_LINE));
    }

    #[test]
    fn test_states_are_mutually_exclusive() {
        let loading = DirectoryView {
            loading: true,
            entries: vec![ada()],
            ..DirectoryView::default()
        };
        let screen = render_directory(&loading);
        assert!(screen.contains(LOADING_LINE));
        assert!(!screen.contains("ada lovelace"));

        let failed = DirectoryView {
            error: Some(FETCH_FAILED_MESSAGE.to_string()),
            entries: vec![ada()],
            ..DirectoryView::default()
        };
        let screen = render_directory(&failed);
        assert!(screen.contains("⚠️ Failed to fetch users. Please try again later."));
        assert!(!screen.contains("ada lovelace"));

        let empty = DirectoryView {
            search_term: "zzz".to_string(),
            ..DirectoryView::default()
        };
        let screen = render_directory(&empty);
        assert!(screen.contains("0 Users"));
        assert!(screen.contains("🔍 zzz"));
        assert!(!screen.contains(SEARCH_PLACEHOLDER));
        assert!(screen.contains(EMPTY_LINE));
    }

    #[test]
    fn test_app_shell_wraps_both_screens() {
        let directory = DirectoryView {
            entries: vec![ada()],
            ..DirectoryView::default()
        };

        let screen = render_app(&FormView::default(), &directory);
        assert!(screen.starts_with("👥 User Management\nManage and organize your users efficiently\n"));
        let form_at = screen.find("Add New User").unwrap();
        let directory_at = screen.find("User Directory").unwrap();
        assert!(form_at < directory_at);
        assert!(screen.contains("[A] ada lovelace"));
    }

    #[test]
    fn test_form_shows_values_errors_and_banner() {
        let mut view = FormView {
            fields: FormFields {
                name: "Ada".to_string(),
                age: "17".to_string(),
                ..FormFields::default()
            },
            ..FormView::default()
        };
        view.errors.insert(FormField::Age, AGE_OUT_OF_RANGE);

        let screen = render_form(&view);
        assert!(screen.contains("Full Name *"));
        assert!(screen.contains("Ada"));
        assert!(screen.contains("[Software Engineer]"));
        assert!(screen.contains("! Age must be between 18 and 100"));
        assert!(!screen.contains(SUCCESS_LINE));

        view.success_visible = true;
        assert!(render_form(&view).contains(SUCCESS_LINE));
    }
}
