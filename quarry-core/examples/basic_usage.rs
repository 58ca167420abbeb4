use quarry_core::{param, ColumnValue, QueryBuilder, QueryBuilderFactory};

fn main() -> quarry_core::Result<()> {
    let mysql = QueryBuilderFactory::mysql();

    // SELECT with joins, grouping and paging
    let select_query = mysql
        .select(["u.id", "u.name", "COUNT(o.id) AS orders"])
        .from("users", "u")?
        .left_join("orders", "o", "o.user_id = u.id")
        .where_("u.active = 1")
        .and_where("u.created_at > '2024-01-01'")
        .group_by(["u.id", "u.name"])
        .having("COUNT(o.id) > 0")
        .order_by("orders DESC")
        .limit(10)
        .offset(20);
    println!("SELECT SQL: {}", select_query.to_sql());

    // INSERT with an upsert
    let (sql, params) = mysql
        .insert(
            "users",
            [
                ("email", param("john@example.com")),
                ("name", param("John Doe")),
                ("created_at", ColumnValue::raw("NOW()")),
            ],
        )?
        .on_duplicate_key_update([("name", "VALUES(name)")])?
        .build();
    println!("INSERT SQL: {} {:?}", sql, params);

    // UPDATE with a row limit
    let update_query = mysql
        .update("users", "", [("last_login", ColumnValue::raw("NOW()"))])?
        .where_("id = 123")
        .limit(1)?;
    println!("UPDATE SQL: {}", update_query.to_sql());

    // PostgreSQL DELETE ... USING ... RETURNING
    let postgres = QueryBuilderFactory::postgres();
    let delete_query = postgres
        .delete("sessions", "s")?
        .using("users u")?
        .where_("s.user_id = u.id")
        .and_where("u.banned")
        .returning("s.id")?;
    println!("DELETE SQL: {}", delete_query.to_sql());

    // Quoting helpers are opt-in
    let dialect = postgres.dialect();
    let quoted = postgres
        .select(dialect.quote_identifier("order"))
        .from(&dialect.quote_identifier("user"), "")?
        .where_(format!("name = {}", dialect.quote_literal("O'Brien")));
    println!("Quoted SQL: {}", quoted.to_sql());

    Ok(())
}
