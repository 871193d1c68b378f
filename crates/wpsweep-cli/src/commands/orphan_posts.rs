//! find-orphan-posts command

use anyhow::Result;
use wpsweep_core::{find_orphan_posts, Database, TableNames};

use crate::app::FindOrphanPostsArgs;

pub fn run(args: &FindOrphanPostsArgs, db: &Database, tables: &TableNames) -> Result<()> {
    let filter = split_type_filter(args.object_type.as_deref());
    let found = find_orphan_posts(db, tables, &filter)?;

    // Nothing found prints nothing
    for id in &found {
        println!("{}", id);
    }
    Ok(())
}

/// Whole-argument trim, then split on commas.
///
/// An argument that trims to nothing means no filter; empty elements
/// inside the list are kept and simply match nothing.
fn split_type_filter(raw: Option<&str>) -> Vec<String> {
    match raw.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(list) => list.split(',').map(|t| t.trim().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_argument_means_no_filter() {
        assert!(split_type_filter(None).is_empty());
        assert!(split_type_filter(Some("")).is_empty());
        assert!(split_type_filter(Some("   ")).is_empty());
    }

    #[test]
    fn test_elements_are_split_and_trimmed() {
        assert_eq!(
            split_type_filter(Some(" post, page ,attachment")),
            vec!["post", "page", "attachment"]
        );
    }

    #[test]
    fn test_empty_elements_are_kept() {
        assert_eq!(split_type_filter(Some("post,,page")), vec!["post", "", "page"]);
    }
}
