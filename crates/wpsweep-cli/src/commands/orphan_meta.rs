//! find-orphan-meta command

use anyhow::Result;
use wpsweep_core::{
    delete_found, find_orphan_meta, format_report, Database, ReportMode, TableNames,
};

use crate::app::FindOrphanMetaArgs;

pub fn run(args: &FindOrphanMetaArgs, db: &Database, tables: &TableNames) -> Result<()> {
    let mode = if args.count {
        ReportMode::Count
    } else {
        ReportMode::List
    };

    if args.delete {
        // Find and delete share one transaction so the found set cannot
        // go stale in between.
        db.with_transaction(|tx| {
            let found = find_orphan_meta(tx, tables, args.kind)?;
            print_report(&found, mode);
            if found.is_empty() {
                return Ok(());
            }

            println!();
            let deleted = delete_found(tx, tables, args.kind, &found)?;
            println!("Entries deleted: {}", deleted);
            Ok(())
        })?;
    } else {
        let found = find_orphan_meta(db, tables, args.kind)?;
        print_report(&found, mode);
    }

    Ok(())
}

fn print_report(found: &[i64], mode: ReportMode) {
    let rendered = format_report(found, mode);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}
