use filedeck_scanner::{is_searchable_query, search as search_tree, MIN_QUERY_LEN};

use super::browse::render_row;
use super::Context;

pub fn search(ctx: &Context, query: &str) -> Result<(), String> {
    if !is_searchable_query(query) {
        return Err(format!(
            "search query must be at least {MIN_QUERY_LEN} characters"
        ));
    }

    let root = ctx.root();
    let mut results = search_tree(&ctx.fs, &root, query);
    results.retain(|e| ctx.visible_under(&root, e));

    if ctx.json {
        return ctx.print_json(&results);
    }
    if results.is_empty() {
        println!("No results for {query:?}");
        return Ok(());
    }
    println!("{} result(s) for {query:?}", results.len());
    for entry in &results {
        println!("{}  ({})", render_row(entry), entry.path);
    }
    Ok(())
}
