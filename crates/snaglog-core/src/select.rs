// SPDX-License-Identifier: Apache-2.0

//! Organization and project selection.
//!
//! Organizations are picked from a fixed option list; projects are resolved
//! from free text by case-insensitive name or slug. Both keep the order the
//! API returned and the first match wins.

use crate::bugsnag::{Organization, Project};
use crate::error::SnaglogError;

/// Blocking terminal interaction used by the selectors.
///
/// The CLI implements this with `dialoguer`; tests use scripted answers.
pub trait Prompter {
    /// Presents `items` and returns the index of the chosen one.
    fn select(&mut self, label: &str, items: &[String]) -> crate::Result<usize>;

    /// Reads a required line of free text.
    fn input(&mut self, label: &str, placeholder: &str) -> crate::Result<String>;
}

/// Asks the operator to pick one organization.
///
/// # Errors
///
/// Returns `SnaglogError::NoOrganizations` for an empty list, or
/// `SnaglogError::Prompt` if the prompt fails or returns an index outside
/// the list.
pub fn choose_organization<'a>(
    organizations: &'a [Organization],
    prompter: &mut dyn Prompter,
) -> crate::Result<&'a Organization> {
    if organizations.is_empty() {
        return Err(SnaglogError::NoOrganizations);
    }

    let labels: Vec<String> = organizations.iter().map(Organization::label).collect();
    let index = prompter.select("Select an organization:", &labels)?;

    organizations.get(index).ok_or_else(|| SnaglogError::Prompt {
        message: format!("selection {index} is out of range"),
    })
}

/// Finds an organization from a preselected value.
///
/// Matches the id exactly, or the slug or name case-insensitively.
#[must_use]
pub fn find_organization<'a>(
    organizations: &'a [Organization],
    value: &str,
) -> Option<&'a Organization> {
    let value = value.trim();
    organizations.iter().find(|org| {
        org.id == value || org.slug.eq_ignore_ascii_case(value) || eq_lower(&org.name, value)
    })
}

/// Finds a project by name or slug, case-insensitively.
///
/// Returns the first project in list order whose name or slug matches.
#[must_use]
pub fn find_project<'a>(projects: &'a [Project], name: &str) -> Option<&'a Project> {
    let name = name.trim();
    projects
        .iter()
        .find(|project| eq_lower(&project.name, name) || eq_lower(&project.slug, name))
}

/// Placeholder suggesting the first project's name and slug.
#[must_use]
pub fn project_placeholder(projects: &[Project]) -> String {
    match projects.first() {
        Some(project) => format!("e.g. {} or {}", project.name, project.slug),
        None => "e.g. MyApp or my-app".to_string(),
    }
}

/// Resolves a project from typed input.
///
/// Uses `preset` when given, otherwise prompts for a name or slug.
///
/// # Errors
///
/// Returns `SnaglogError::NoProjects` for an empty list and
/// `SnaglogError::ProjectNotFound` when nothing matches.
pub fn resolve_project<'a>(
    projects: &'a [Project],
    preset: Option<&str>,
    prompter: &mut dyn Prompter,
) -> crate::Result<&'a Project> {
    if projects.is_empty() {
        return Err(SnaglogError::NoProjects);
    }

    let input = match preset {
        Some(value) => value.to_string(),
        None => prompter.input(
            "Enter project name (name or slug):",
            &project_placeholder(projects),
        )?,
    };

    find_project(projects, &input).ok_or(SnaglogError::ProjectNotFound { input })
}

fn eq_lower(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prompter returning scripted answers.
    struct ScriptedPrompter {
        selection: usize,
        text: String,
        prompts: usize,
    }

    impl ScriptedPrompter {
        fn new(selection: usize, text: &str) -> Self {
            Self {
                selection,
                text: text.to_string(),
                prompts: 0,
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, _label: &str, _items: &[String]) -> crate::Result<usize> {
            self.prompts += 1;
            Ok(self.selection)
        }

        fn input(&mut self, _label: &str, _placeholder: &str) -> crate::Result<String> {
            self.prompts += 1;
            Ok(self.text.clone())
        }
    }

    fn org(id: &str, name: &str, slug: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    fn project(id: &str, name: &str, slug: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            open_error_count: 3,
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project("p1", "MyApp", "my-app"),
            project("p2", "Billing API", "billing-api"),
            project("p3", "Ünïcode", "unicode"),
        ]
    }

    #[test]
    fn choose_organization_returns_listed_id() {
        let orgs = vec![org("o1", "Acme", "acme"), org("o2", "Globex", "globex")];
        for index in 0..orgs.len() {
            let mut prompter = ScriptedPrompter::new(index, "");
            let chosen = choose_organization(&orgs, &mut prompter).unwrap();
            assert!(orgs.iter().any(|o| o.id == chosen.id));
            assert_eq!(chosen.id, orgs[index].id);
        }
    }

    #[test]
    fn choose_organization_empty_list() {
        let mut prompter = ScriptedPrompter::new(0, "");
        let result = choose_organization(&[], &mut prompter);
        assert!(matches!(result, Err(SnaglogError::NoOrganizations)));
        assert_eq!(prompter.prompts, 0);
    }

    #[test]
    fn choose_organization_out_of_range_selection() {
        let orgs = vec![org("o1", "Acme", "acme")];
        let mut prompter = ScriptedPrompter::new(5, "");
        let result = choose_organization(&orgs, &mut prompter);
        assert!(matches!(result, Err(SnaglogError::Prompt { .. })));
    }

    #[test]
    fn find_organization_by_id_slug_or_name() {
        let orgs = vec![org("o1", "Acme Corp", "acme"), org("o2", "Globex", "globex")];
        assert_eq!(find_organization(&orgs, "o2").unwrap().id, "o2");
        assert_eq!(find_organization(&orgs, "ACME").unwrap().id, "o1");
        assert_eq!(find_organization(&orgs, "acme corp").unwrap().id, "o1");
        assert!(find_organization(&orgs, "O2").is_none());
        assert!(find_organization(&orgs, "initech").is_none());
    }

    #[test]
    fn find_project_case_insensitive() {
        let projects = projects();
        for input in ["MyApp", "myapp", "MYAPP", "my-app", "MY-APP", "  myapp  "] {
            assert_eq!(find_project(&projects, input).unwrap().id, "p1", "{input}");
        }
        assert_eq!(find_project(&projects, "ÜNÏCODE").unwrap().id, "p3");
    }

    #[test]
    fn find_project_no_match() {
        assert!(find_project(&projects(), "unknown").is_none());
        assert!(find_project(&projects(), "").is_none());
        assert!(find_project(&[], "myapp").is_none());
    }

    #[test]
    fn find_project_first_match_wins() {
        let projects = vec![
            project("p1", "shop", "storefront"),
            project("p2", "Storefront", "shop"),
        ];
        assert_eq!(find_project(&projects, "SHOP").unwrap().id, "p1");
        assert_eq!(find_project(&projects, "storefront").unwrap().id, "p1");
    }

    #[test]
    fn project_placeholder_uses_first_project() {
        assert_eq!(project_placeholder(&projects()), "e.g. MyApp or my-app");
        assert_eq!(project_placeholder(&[]), "e.g. MyApp or my-app");
    }

    #[test]
    fn resolve_project_prompts_without_preset() {
        let projects = projects();
        let mut prompter = ScriptedPrompter::new(0, "billing-API");
        let resolved = resolve_project(&projects, None, &mut prompter).unwrap();
        assert_eq!(resolved.id, "p2");
        assert_eq!(prompter.prompts, 1);
    }

    #[test]
    fn resolve_project_uses_preset() {
        let projects = projects();
        let mut prompter = ScriptedPrompter::new(0, "ignored");
        let resolved = resolve_project(&projects, Some("myapp"), &mut prompter).unwrap();
        assert_eq!(resolved.id, "p1");
        assert_eq!(prompter.prompts, 0);
    }

    #[test]
    fn resolve_project_not_found() {
        let projects = projects();
        let mut prompter = ScriptedPrompter::new(0, "nope");
        let result = resolve_project(&projects, None, &mut prompter);
        assert!(matches!(
            result,
            Err(SnaglogError::ProjectNotFound { input }) if input == "nope"
        ));
    }

    #[test]
    fn resolve_project_empty_list() {
        let mut prompter = ScriptedPrompter::new(0, "myapp");
        let result = resolve_project(&[], None, &mut prompter);
        assert!(matches!(result, Err(SnaglogError::NoProjects)));
        assert_eq!(prompter.prompts, 0);
    }
}
