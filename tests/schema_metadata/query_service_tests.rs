use schema_metadata_api::schema_metadata::domain::{
    model::{
        enums::schema_metadata_domain_error::SchemaMetadataDomainError,
        queries::{
            describe_schema_query::DescribeSchemaQuery, describe_table_query::DescribeTableQuery,
            list_foreign_key_constraints_query::ListForeignKeyConstraintsQuery,
            list_tables_query::ListTablesQuery,
        },
    },
    services::schema_metadata_query_service::SchemaMetadataQueryService,
};

use crate::support::{
    create_query_harness,
    fakes::{CatalogFailure, FakeTable},
    fixtures::{index, index_columns, memberships_table, users_table},
};

#[tokio::test]
async fn handle_list_tables_returns_names_in_catalog_order() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("zebras", FakeTable::default());
    harness.catalog_reader.add_table("apples", FakeTable::default());

    let tables = harness
        .service
        .handle_list_tables(ListTablesQuery::new())
        .await
        .expect("tables should be listed");

    assert_eq!(tables, vec!["zebras".to_string(), "apples".to_string()]);
    assert_eq!(harness.catalog_reader.sessions_opened(), 1);
    assert_eq!(harness.catalog_reader.sessions_released(), 1);
}

#[tokio::test]
async fn handle_describe_schema_on_empty_database_returns_no_tables() {
    let harness = create_query_harness();

    let tables = harness
        .service
        .handle_list_tables(ListTablesQuery::new())
        .await
        .expect("tables should be listed");
    let snapshot = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .expect("schema should be described");

    assert!(tables.is_empty());
    assert_eq!(snapshot.database_type.as_str(), "sqlite");
    assert!(snapshot.tables.is_empty());
}

#[tokio::test]
async fn handle_describe_schema_keys_match_listed_tables() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("users", users_table());
    harness.catalog_reader.add_table("memberships", memberships_table());
    harness.catalog_reader.add_table("audit", FakeTable::default());

    let tables = harness
        .service
        .handle_list_tables(ListTablesQuery::new())
        .await
        .expect("tables should be listed");
    let snapshot = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .expect("schema should be described");

    assert_eq!(snapshot.table_names(), tables);
}

#[tokio::test]
async fn handle_describe_schema_builds_users_scenario() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("users", users_table());
    harness
        .catalog_reader
        .set_index_columns("ix_users_email", index_columns(&["email"]));

    let snapshot = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .expect("schema should be described");

    let users = snapshot.table("users").expect("users should be described");
    assert_eq!(users.primary_key_columns(), vec!["id"]);
    assert_eq!(users.columns.len(), 3);
    assert!(!users.columns[1].nullable);
    assert!(users.columns[2].nullable);
    assert_eq!(users.indexes.len(), 1);
    assert!(users.indexes[0].is_unique);
    assert_eq!(users.indexes[0].columns, vec![Some("email".to_string())]);
    assert!(users.unique_constraints.is_empty());
}

#[tokio::test]
async fn handle_describe_schema_keeps_primary_key_in_declaration_order() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("memberships", memberships_table());

    let snapshot = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .expect("schema should be described");

    let memberships = snapshot.table("memberships").expect("table should exist");
    assert_eq!(memberships.primary_key_columns(), vec!["group_id", "user_id"]);
}

#[tokio::test]
async fn handle_describe_schema_keeps_composite_foreign_key_rows_separate() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("memberships", memberships_table());

    let snapshot = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .expect("schema should be described");

    let foreign_keys = &snapshot.table("memberships").expect("table should exist").foreign_keys;
    assert_eq!(foreign_keys.len(), 3);
    assert_eq!((foreign_keys[0].id, foreign_keys[0].seq), (0, 0));
    assert_eq!((foreign_keys[1].id, foreign_keys[1].seq), (0, 1));
    assert_eq!(foreign_keys[1].local_column, "region");
    assert_eq!(foreign_keys[2].referenced_table, "users");
}

#[tokio::test]
async fn handle_describe_schema_preserves_index_key_order() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table(
        "pairs",
        FakeTable {
            indexes: vec![index("ix_pairs_b_a", false)],
            ..FakeTable::default()
        },
    );
    harness
        .catalog_reader
        .set_index_columns("ix_pairs_b_a", index_columns(&["b", "a"]));

    let snapshot = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .expect("schema should be described");

    let pairs = snapshot.table("pairs").expect("table should exist");
    assert_eq!(
        pairs.indexes[0].columns,
        vec![Some("b".to_string()), Some("a".to_string())]
    );
}

#[tokio::test]
async fn handle_describe_schema_queries_catalog_sequentially_per_table() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("users", users_table());
    harness.catalog_reader.add_table("audit", FakeTable::default());

    harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await
        .expect("schema should be described");

    assert_eq!(
        harness.catalog_reader.calls(),
        vec![
            "tables",
            "columns:users",
            "foreign_keys:users",
            "indexes:users",
            "index_columns:ix_users_email",
            "columns:audit",
            "foreign_keys:audit",
            "indexes:audit",
        ]
    );
}

#[tokio::test]
async fn handle_describe_schema_aborts_when_one_table_fails() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("users", users_table());
    harness.catalog_reader.add_table("memberships", memberships_table());
    harness.catalog_reader.add_table("audit", FakeTable::default());
    harness
        .catalog_reader
        .fail_on(CatalogFailure::ForeignKeys("memberships".to_string()));

    let result = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await;

    assert!(matches!(
        result,
        Err(SchemaMetadataDomainError::DatabaseError(_))
    ));
    assert!(
        !harness
            .catalog_reader
            .calls()
            .contains(&"columns:audit".to_string())
    );
    assert_eq!(harness.catalog_reader.sessions_released(), 1);
}

#[tokio::test]
async fn handle_describe_schema_fails_when_index_sub_query_fails() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("users", users_table());
    harness
        .catalog_reader
        .fail_on(CatalogFailure::IndexColumns("ix_users_email".to_string()));

    let result = harness
        .service
        .handle_describe_schema(DescribeSchemaQuery::new())
        .await;

    assert!(matches!(
        result,
        Err(SchemaMetadataDomainError::DatabaseError(_))
    ));
}

#[tokio::test]
async fn handle_list_tables_fails_when_session_cannot_open() {
    let harness = create_query_harness();
    harness.catalog_reader.fail_on(CatalogFailure::OpenSession);

    let result = harness
        .service
        .handle_list_tables(ListTablesQuery::new())
        .await;

    assert!(matches!(
        result,
        Err(SchemaMetadataDomainError::DatabaseError(_))
    ));
    assert_eq!(harness.catalog_reader.sessions_opened(), 0);
}

#[tokio::test]
async fn handle_describe_table_returns_not_found_for_unknown_table() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("users", users_table());

    let query = DescribeTableQuery::new("orders".to_string()).expect("valid query");
    let result = harness.service.handle_describe_table(query).await;

    assert!(matches!(
        result,
        Err(SchemaMetadataDomainError::TableNotFound(name)) if name == "orders"
    ));
    assert_eq!(harness.catalog_reader.calls(), vec!["tables"]);
    assert_eq!(harness.catalog_reader.sessions_released(), 1);
}

#[tokio::test]
async fn handle_describe_table_describes_single_table() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("users", users_table());
    harness.catalog_reader.add_table("memberships", memberships_table());

    let query = DescribeTableQuery::new("memberships".to_string()).expect("valid query");
    let metadata = harness
        .service
        .handle_describe_table(query)
        .await
        .expect("table should be described");

    assert_eq!(metadata.columns.len(), 3);
    assert!(
        !harness
            .catalog_reader
            .calls()
            .contains(&"columns:users".to_string())
    );
}

#[tokio::test]
async fn describe_table_query_rejects_internal_and_blank_names() {
    assert!(matches!(
        DescribeTableQuery::new("sqlite_sequence".to_string()),
        Err(SchemaMetadataDomainError::InvalidTableName)
    ));
    assert!(matches!(
        DescribeTableQuery::new("   ".to_string()),
        Err(SchemaMetadataDomainError::InvalidTableName)
    ));
}

#[tokio::test]
async fn handle_list_foreign_key_constraints_groups_rows_by_id() {
    let harness = create_query_harness();
    harness.catalog_reader.add_table("memberships", memberships_table());

    let query =
        ListForeignKeyConstraintsQuery::new("memberships".to_string()).expect("valid query");
    let constraints = harness
        .service
        .handle_list_foreign_key_constraints(query)
        .await
        .expect("constraints should be listed");

    assert_eq!(constraints.len(), 2);
    assert_eq!(constraints[0].id, 0);
    assert_eq!(constraints[0].referenced_table, "groups");
    assert_eq!(constraints[0].local_columns, vec!["group_id", "region"]);
    assert_eq!(
        constraints[0].referenced_columns,
        vec![Some("id".to_string()), Some("region".to_string())]
    );
    assert_eq!(constraints[1].local_columns, vec!["user_id"]);
}
