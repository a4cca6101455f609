use filedeck_common::format_size;
use filedeck_domain::{Category, CategoryTotals, StorageInfo};
use filedeck_scanner::{aggregate_by_category, aggregate_by_category_par, storage_info};
use serde::Serialize;

use super::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StorageReport<'a> {
    path: &'a str,
    storage: StorageInfo,
    categories: CategoryTotals,
    breakdown: Vec<CategoryShare>,
}

/// 仪表盘上的一条分类占比
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
    pub bytes: u64,
    pub percentage: f64,
}

pub fn breakdown(totals: &CategoryTotals) -> Vec<CategoryShare> {
    totals
        .iter()
        .map(|(category, bytes)| CategoryShare {
            category,
            label: category.label(),
            color: category.color(),
            bytes,
            percentage: totals.percentage(category),
        })
        .collect()
}

pub fn storage(ctx: &Context, path: Option<&str>) -> Result<(), String> {
    let dir = ctx.resolve(path);
    let info = storage_info(&ctx.fs);
    let totals = if ctx.config.parallel {
        aggregate_by_category_par(&ctx.fs, &dir)
    } else {
        aggregate_by_category(&ctx.fs, &dir)
    };

    if ctx.json {
        return ctx.print_json(&StorageReport {
            path: &dir,
            storage: info,
            categories: totals,
            breakdown: breakdown(&totals),
        });
    }
    for line in render_report(&info, &totals) {
        println!("{line}");
    }
    Ok(())
}

pub fn render_report(info: &StorageInfo, totals: &CategoryTotals) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Used {} of {} ({:.1}%), {} free",
            format_size(info.used_space),
            format_size(info.total_space),
            info.used_percentage(),
            format_size(info.free_space)
        ),
        String::new(),
    ];
    for share in breakdown(totals) {
        lines.push(format!(
            "{:<10} {:>12}  {:>5.1}%  {}",
            share.label,
            format_size(share.bytes),
            share.percentage,
            share.color
        ));
    }
    lines.push(format!("{:<10} {:>12}", "Total", format_size(totals.total())));
    lines
}
