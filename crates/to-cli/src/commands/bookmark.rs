//! Bookmark command handlers

use anyhow::{Context, Result};

use to_core::{Bookmark, BookmarkError, BookmarkFilter, ChildrenDirFilter, PrefixFilter, Store};

use crate::display::PathDisplay;
use crate::output::{ListScope, Output};
use crate::validation::validate_name;

/// Bookmark the current working directory
pub fn save(
    store: &mut Store,
    name: String,
    display: &PathDisplay,
    output: &Output,
) -> Result<()> {
    validate_name(&name)?;
    let cwd = current_dir()?;

    store.add(&name, &cwd)?;

    output.success(&format!("Saved {}: {}", name, display.shorten(&cwd)));
    Ok(())
}

/// Delete a bookmark by exact name
pub fn delete(
    store: &mut Store,
    name: String,
    display: &PathDisplay,
    output: &Output,
) -> Result<()> {
    validate_name(&name)?;

    let removed = store.delete(&name)?;

    output.success(&format!(
        "Deleted {}: {}",
        removed.name,
        display.shorten(&removed.path)
    ));
    Ok(())
}

/// Resolve a name or prefix and print its path
pub fn find(store: &Store, name: String, display: &PathDisplay, output: &Output) -> Result<()> {
    validate_name(&name)?;

    match store.find(&name) {
        Ok(hit) => {
            output.print_resolved(&hit.best);
            Ok(())
        }
        Err(e) => {
            if let Some((prefix, candidates)) = ambiguous_candidates(&e) {
                output.print_candidates(prefix, candidates, display);
            }
            Err(e)
        }
    }
}

/// List bookmarks, optionally under the current directory and/or by name prefix
pub fn list(
    store: &Store,
    curr: bool,
    prefix: Option<String>,
    display: &PathDisplay,
    output: &Output,
) -> Result<()> {
    let dir = if curr { Some(current_dir()?) } else { None };

    let filters = ListFilters::new(dir.as_deref(), prefix.as_deref());
    let bookmarks = store.list_with_filters(&filters.as_dyn());

    let scope = ListScope {
        prefix: prefix.as_deref(),
        dir: dir.as_deref(),
    };
    output.print_bookmarks(&bookmarks, &scope, display);
    Ok(())
}

/// The filters `list` combines, each present only when requested
#[derive(Debug, Default)]
struct ListFilters {
    children: Option<ChildrenDirFilter>,
    prefix: Option<PrefixFilter>,
}

impl ListFilters {
    fn new(dir: Option<&str>, prefix: Option<&str>) -> Self {
        Self {
            children: dir.map(ChildrenDirFilter::new),
            prefix: prefix.map(PrefixFilter::new),
        }
    }

    fn as_dyn(&self) -> Vec<&dyn BookmarkFilter> {
        let mut filters: Vec<&dyn BookmarkFilter> = Vec::new();
        if let Some(f) = &self.children {
            filters.push(f);
        }
        if let Some(f) = &self.prefix {
            filters.push(f);
        }
        filters
    }
}

/// Prefix and candidates of an ambiguous lookup, if that is what failed
fn ambiguous_candidates(err: &anyhow::Error) -> Option<(&str, &[Bookmark])> {
    match err.downcast_ref::<BookmarkError>()? {
        BookmarkError::MoreThanOneMatch { prefix, candidates } => {
            Some((prefix.as_str(), candidates.as_slice()))
        }
        _ => None,
    }
}

fn current_dir() -> Result<String> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use to_core::Bookmarks;

    fn sample() -> Bookmarks {
        [
            ("proj", "/home/me/src/proj"),
            ("pic", "/home/me/pics"),
            ("pkg", "/home/me/src/pkg"),
            ("etc", "/etc"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn names(list: Vec<Bookmark>) -> Vec<String> {
        list.into_iter().map(|b| b.name).collect()
    }

    #[test]
    fn test_list_filters_none_keeps_everything() {
        let filters = ListFilters::new(None, None);
        assert!(filters.as_dyn().is_empty());
        assert_eq!(
            names(sample().list_with_filters(&filters.as_dyn())),
            vec!["etc", "pic", "pkg", "proj"]
        );
    }

    #[test]
    fn test_list_filters_dir_and_prefix_combine() {
        let filters = ListFilters::new(Some("/home/me/src"), Some("p"));
        assert_eq!(filters.as_dyn().len(), 2);
        assert_eq!(
            names(sample().list_with_filters(&filters.as_dyn())),
            vec!["pkg", "proj"]
        );

        let filters = ListFilters::new(Some("/home/me/src"), Some("pr"));
        assert_eq!(names(sample().list_with_filters(&filters.as_dyn())), vec!["proj"]);
    }

    #[test]
    fn test_list_filters_single() {
        let only_dir = ListFilters::new(Some("/home/me"), None);
        assert_eq!(
            names(sample().list_with_filters(&only_dir.as_dyn())),
            vec!["pic", "pkg", "proj"]
        );

        let only_prefix = ListFilters::new(None, Some("e"));
        assert_eq!(names(sample().list_with_filters(&only_prefix.as_dyn())), vec!["etc"]);
    }

    #[test]
    fn test_ambiguous_candidates_from_find_error() {
        let err: anyhow::Error = sample().find("p").unwrap_err().into();

        let (prefix, candidates) = ambiguous_candidates(&err).unwrap();
        assert_eq!(prefix, "p");
        assert_eq!(names(candidates.to_vec()), vec!["pic", "pkg", "proj"]);
    }

    #[test]
    fn test_ambiguous_candidates_ignores_other_errors() {
        let err: anyhow::Error = sample().find("zzz").unwrap_err().into();
        assert!(ambiguous_candidates(&err).is_none());

        let err = anyhow::anyhow!("Failed to get current directory");
        assert!(ambiguous_candidates(&err).is_none());
    }
}
