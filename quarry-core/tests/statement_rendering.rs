use quarry_core::{
    param, ColumnValue, ConditionalClauseBuilder, Connector, Dialect, Error, QuarryConfig,
    QueryBuilder, QueryBuilderFactory, Value, NO_LIMIT,
};

#[test]
fn where_clause_follows_call_order() {
    for factory in [QueryBuilderFactory::mysql(), QueryBuilderFactory::postgres()] {
        let select = factory
            .select("*")
            .from("t", "")
            .unwrap()
            .where_("a=1")
            .and_where("b=2")
            .or_where("c=3");
        assert_eq!(select.to_sql(), "SELECT * FROM t WHERE a=1 AND b=2 OR c=3");

        let delete = factory
            .delete("t", "")
            .unwrap()
            .where_("a=1")
            .and_where("b=2")
            .or_where("c=3");
        assert_eq!(delete.to_sql(), "DELETE FROM t WHERE a=1 AND b=2 OR c=3");

        let update = factory
            .update("t", "", [("x", "1")])
            .unwrap()
            .where_("a=1")
            .and_where("b=2")
            .or_where("c=3");
        assert_eq!(update.to_sql(), "UPDATE t SET x = 1 WHERE a=1 AND b=2 OR c=3");
    }
}

#[test]
fn rendering_twice_yields_identical_sql() {
    let factory = QueryBuilderFactory::postgres();
    let select = factory
        .select(["id", "name"])
        .from("users", "u")
        .unwrap()
        .left_join("teams", "t", "t.id = u.team_id")
        .where_("u.active")
        .order_by("name")
        .limit(5);
    assert_eq!(select.build(), select.build());

    let insert = factory
        .insert("users", [("name", param("Jane"))])
        .unwrap()
        .returning("id")
        .unwrap();
    assert_eq!(insert.build(), insert.build());
}

#[test]
fn start_operations_discard_and_add_operations_append() {
    let select = QueryBuilderFactory::mysql()
        .select("*")
        .from("t", "")
        .unwrap()
        .where_("a=1")
        .where_("b=2")
        .group_by("g1")
        .group_by("g2")
        .add_group_by("g3")
        .having("h1")
        .having("h2")
        .and_having("h3")
        .order_by("o1")
        .order_by("o2")
        .add_order_by("o3");
    assert_eq!(
        select.to_sql(),
        "SELECT * FROM t WHERE b=2 GROUP BY g2, g3 HAVING h2 AND h3 ORDER BY o2, o3"
    );

    let insert = QueryBuilderFactory::postgres()
        .insert("t", [("a", "1")])
        .unwrap()
        .returning("x")
        .unwrap()
        .returning("id")
        .unwrap()
        .add_returning("name")
        .unwrap();
    assert_eq!(
        insert.to_sql(),
        "INSERT INTO t (a) VALUES (1) RETURNING id, name"
    );
}

#[test]
fn joins_render_grouped_by_type() {
    let select = QueryBuilderFactory::mysql()
        .select("*")
        .from("a", "a")
        .unwrap()
        .join("b", "b", "a.id=b.id")
        .left_join("c", "c", "b.id=c.id")
        .inner_join("d", "d", "c.id=d.id");
    assert_eq!(
        select.to_sql(),
        "SELECT * FROM a AS a INNER JOIN b AS b ON a.id=b.id \
         INNER JOIN d AS d ON c.id=d.id LEFT JOIN c AS c ON b.id=c.id"
    );
}

#[test]
fn empty_clauses_emit_nothing() {
    let select = QueryBuilderFactory::mysql()
        .select("*")
        .from("t", "")
        .unwrap()
        .group_by(Vec::<String>::new())
        .order_by(Vec::<String>::new())
        .having(Vec::<String>::new());
    assert_eq!(select.to_sql(), "SELECT * FROM t");

    let select = select.limit(10).offset(5);
    assert_eq!(select.to_sql(), "SELECT * FROM t LIMIT 10 OFFSET 5");
}

#[test]
fn minus_one_returns_limit_to_unset() {
    let select = QueryBuilderFactory::postgres()
        .select("*")
        .from("t", "")
        .unwrap()
        .limit(10)
        .limit(-1)
        .offset(-1);
    assert_eq!(select.to_sql(), "SELECT * FROM t");

    let mysql = QueryBuilderFactory::mysql();
    let delete = mysql
        .delete("t", "")
        .unwrap()
        .limit(10)
        .unwrap()
        .limit(NO_LIMIT)
        .unwrap();
    assert_eq!(delete.to_sql(), "DELETE FROM t");

    let select = mysql.select("*").from("t", "").unwrap().limit(-2);
    assert_eq!(select.to_sql(), "SELECT * FROM t LIMIT -2");
}

#[test]
fn connector_text_is_parsed_not_trusted() {
    let mut clause = ConditionalClauseBuilder::new();
    clause.start_clause("And".parse::<Connector>().unwrap(), "a=1");
    clause.add_condition(" or ".parse::<Connector>().unwrap(), "b=2");
    assert_eq!(clause.render_clause("WHERE"), " WHERE a=1 OR b=2");

    let err = "NAND".parse::<Connector>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn returning_is_absent_until_requested() {
    let factory = QueryBuilderFactory::postgres();
    let update = factory.update("users", "", [("name", "'Dave'")]).unwrap();
    assert_eq!(update.to_sql(), "UPDATE users SET name = 'Dave'");

    let update = update.returning("id").unwrap().add_returning("name").unwrap();
    assert!(update.to_sql().ends_with(" RETURNING id, name"));
}

#[test]
fn insert_keeps_columns_and_values_aligned() {
    let insert = QueryBuilderFactory::mysql()
        .insert(
            "t",
            vec![("id", ColumnValue::from(1)), ("name", ColumnValue::from("'x'"))],
        )
        .unwrap();
    assert_eq!(insert.to_sql(), "INSERT INTO t (id, name) VALUES (1, 'x')");
    assert!(insert.parameters().is_empty());
}

#[test]
fn bound_parameters_follow_placeholder_order() {
    let columns = [
        ("name", param("Jane")),
        ("joined", ColumnValue::raw("NOW()")),
        ("age", param(30i64)),
    ];

    let (sql, params) = QueryBuilderFactory::postgres()
        .update("users", "", columns.clone())
        .unwrap()
        .where_("id = 7")
        .build();
    assert_eq!(sql, "UPDATE users SET name = $1, joined = NOW(), age = $2 WHERE id = 7");
    assert_eq!(
        params,
        vec![Value::String("Jane".to_string()), Value::I64(30)]
    );

    let (sql, params) = QueryBuilderFactory::mysql()
        .update("users", "", columns)
        .unwrap()
        .where_("id = 7")
        .build();
    assert_eq!(sql, "UPDATE users SET name = ?, joined = NOW(), age = ? WHERE id = 7");
    assert_eq!(params.len(), 2);
}

#[test]
fn dialect_only_clauses_are_rejected_elsewhere() {
    let mysql = QueryBuilderFactory::mysql();
    let err = mysql
        .delete("users", "")
        .unwrap()
        .returning("id")
        .unwrap_err();
    assert_eq!(err.to_string(), "RETURNING is not supported by MySQL");

    let postgres = QueryBuilderFactory::postgres();
    let err = postgres
        .insert("users", [("a", "1")])
        .unwrap()
        .on_duplicate_key_update([("a", "2")])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedClause {
            dialect: Dialect::PostgreSql,
            ..
        }
    ));
}

#[test]
fn factory_from_json_config() {
    let config = QuarryConfig::from_json_str(r#"{"dialect": "postgresql"}"#).unwrap();
    let factory = QueryBuilderFactory::from_config(&config);
    let (sql, params) = factory
        .insert("users", [("email", param("a@b.c"))])
        .unwrap()
        .returning("id")
        .unwrap()
        .build();
    assert_eq!(sql, "INSERT INTO users (email) VALUES ($1) RETURNING id");
    assert_eq!(params, vec![Value::from("a@b.c")]);

    let config = QuarryConfig::from_json_str(r#"{"dialect": "PostgreSQL"}"#).unwrap();
    assert_eq!(QueryBuilderFactory::from_config(&config).dialect(), Dialect::PostgreSql);
}
