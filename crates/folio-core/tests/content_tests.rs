// Host-side tests for the static site content.

use folio_core::content::*;
use std::collections::HashSet;

#[test]
fn every_list_has_entries() {
    assert!(!PROJECTS.is_empty());
    assert!(!SKILL_CATEGORIES.is_empty());
    assert!(!TESTIMONIALS.is_empty());
}

#[test]
fn skill_levels_are_percentages() {
    for category in SKILL_CATEGORIES {
        assert!(!category.skills.is_empty(), "{} has no skills", category.title);
        for skill in category.skills {
            assert!(skill.level <= 100, "{} is {}", skill.name, skill.level);
            assert!(!skill.name.is_empty());
        }
    }
}

#[test]
fn category_and_project_titles_are_unique() {
    let categories: HashSet<_> = SKILL_CATEGORIES.iter().map(|c| c.title).collect();
    assert_eq!(categories.len(), SKILL_CATEGORIES.len());
    let projects: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(projects.len(), PROJECTS.len());
}

#[test]
fn testimonials_are_attributed() {
    for t in TESTIMONIALS {
        assert!(!t.name.is_empty());
        assert!(!t.title.is_empty());
        assert!(!t.quote.trim().is_empty());
    }
}

#[test]
fn first_project_is_selected_initially_and_lookup_is_bounded() {
    assert_eq!(initial_project_selection().current(), Some(0));
    assert!(project(0).is_some());
    assert!(project(PROJECTS.len()).is_none());
}
