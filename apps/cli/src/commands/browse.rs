use std::cmp::Ordering;

use filedeck_common::{format_relative_time, format_size};
use filedeck_domain::{extension_of, Category, Entry, SortOrder};
use filedeck_scanner::{compare_entries, compare_names, try_list_directory};
use serde::Serialize;

use super::Context;

pub fn list(ctx: &Context, path: Option<&str>) -> Result<(), String> {
    let dir = ctx.resolve(path);
    let mut entries = try_list_directory(&ctx.fs, &dir)
        .map_err(|e| format!("failed to load directory {dir}: {e}"))?;
    entries.retain(|e| ctx.visible(e));
    sort_entries(&mut entries, ctx.settings.get().sort_order);

    if ctx.json {
        return ctx.print_json(&entries);
    }
    if entries.is_empty() {
        println!("(empty)");
    }
    for entry in &entries {
        println!("{}", render_row(entry));
    }
    Ok(())
}

#[derive(Serialize)]
struct Classified<'a> {
    name: &'a str,
    category: Category,
}

pub fn classify_names(names: &[String]) -> Vec<(String, &'static str)> {
    names
        .iter()
        .map(|name| (name.clone(), Category::from_file_name(name).label()))
        .collect()
}

pub fn classify(ctx: &Context, names: &[String]) -> Result<(), String> {
    if ctx.json {
        let rows: Vec<Classified> = names
            .iter()
            .map(|name| Classified {
                name,
                category: Category::from_file_name(name),
            })
            .collect();
        return ctx.print_json(&rows);
    }
    for (name, label) in classify_names(names) {
        println!("{label:<10} {name}");
    }
    Ok(())
}

/// One text row: category, size, age, name (folders get a trailing `/`).
pub fn render_row(entry: &Entry) -> String {
    let size = if entry.is_directory {
        "-".to_string()
    } else {
        format_size(entry.size)
    };
    let name = if entry.is_directory {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    };
    let kind = if entry.is_directory {
        "Folder"
    } else {
        entry.category().label()
    };
    format!(
        "{:<9} {:>12}  {:<16} {}",
        kind,
        size,
        format_relative_time(entry.modification_time),
        name
    )
}

/// Reorders a listing for the chosen sort order, keeping folders on top.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder) {
    let folders_first = |a: &Entry, b: &Entry| b.is_directory.cmp(&a.is_directory);
    let by_name = |a: &Entry, b: &Entry| compare_names(&a.name, &b.name);
    match order {
        SortOrder::Name => entries.sort_by(compare_entries),
        SortOrder::Date => entries.sort_by(|a, b| {
            folders_first(a, b)
                .then_with(|| b.modification_time.cmp(&a.modification_time))
                .then_with(|| by_name(a, b))
        }),
        SortOrder::Size => entries.sort_by(|a, b| {
            folders_first(a, b)
                .then_with(|| b.size.cmp(&a.size))
                .then_with(|| by_name(a, b))
        }),
        SortOrder::Type => entries.sort_by(|a, b| {
            folders_first(a, b)
                .then_with(|| compare_types(a, b))
                .then_with(|| by_name(a, b))
        }),
    }
}

fn compare_types(a: &Entry, b: &Entry) -> Ordering {
    extension_of(&a.name).cmp(&extension_of(&b.name))
}
