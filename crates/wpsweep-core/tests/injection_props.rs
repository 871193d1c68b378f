//! Property tests: arbitrary filter values are data, never SQL

use proptest::prelude::*;
use wpsweep_core::{find_orphan_posts, Database, QueryExecutor, TableNames};

fn fixture() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.execute_batch(
        "CREATE TABLE wp_posts (
             ID INTEGER PRIMARY KEY,
             post_parent INTEGER NOT NULL DEFAULT 0,
             post_type TEXT NOT NULL DEFAULT 'post'
         );
         INSERT INTO wp_posts (ID, post_parent, post_type) VALUES
             (1, 7, 'page'),
             (2, 1, 'page');",
    )
    .unwrap();
    db
}

proptest! {
    #[test]
    fn arbitrary_filter_values_never_alter_the_schema(
        filter in proptest::collection::vec(".*", 0..4)
    ) {
        let db = fixture();
        find_orphan_posts(&db, &TableNames::default(), &filter).unwrap();

        let ids = db.select_column("SELECT ID FROM wp_posts", &[]).unwrap();
        prop_assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn known_type_is_found_regardless_of_extra_filter_entries(junk in ".*") {
        let db = fixture();
        let filter = vec![junk, "page".to_string()];

        let found = find_orphan_posts(&db, &TableNames::default(), &filter).unwrap();
        prop_assert_eq!(found, vec![1]);
    }
}
