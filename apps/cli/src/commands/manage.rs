use filedeck_domain::ClipboardItem;
use filedeck_executor::{copy_item, create_folder, delete_item, move_item, paste as paste_item};

use super::{outcome, Context};

pub fn mkdir(ctx: &Context, path: &str) -> Result<(), String> {
    let target = ctx.resolve(Some(path));
    outcome(create_folder(&ctx.fs, &target), "Failed to create folder")?;
    println!("Created {target}");
    Ok(())
}

pub fn remove(ctx: &Context, path: &str, confirmed: bool) -> Result<(), String> {
    let target = ctx.resolve(Some(path));
    if ctx.settings.get().confirm_before_delete && !confirmed {
        return Err(format!(
            "refusing to delete {target} without --yes (confirmBeforeDelete is on)"
        ));
    }
    outcome(delete_item(&ctx.fs, &target), "Failed to delete item")?;
    println!("Deleted {target}");
    Ok(())
}

pub fn copy(ctx: &Context, from: &str, to: &str) -> Result<(), String> {
    let (from, to) = (ctx.resolve(Some(from)), ctx.resolve(Some(to)));
    outcome(copy_item(&ctx.fs, &from, &to), "Failed to copy item")?;
    println!("Copied {from} -> {to}");
    Ok(())
}

pub fn rename(ctx: &Context, from: &str, to: &str) -> Result<(), String> {
    let (from, to) = (ctx.resolve(Some(from)), ctx.resolve(Some(to)));
    outcome(move_item(&ctx.fs, &from, &to), "Failed to move item")?;
    println!("Moved {from} -> {to}");
    Ok(())
}

pub fn paste(ctx: &Context, source: &str, dest_dir: &str, cut: bool) -> Result<(), String> {
    let source = ctx.resolve(Some(source));
    let dest_dir = ctx.resolve(Some(dest_dir));
    let item = if cut {
        ClipboardItem::cut(source)
    } else {
        ClipboardItem::copy(source)
    };
    let verb = if cut { "move" } else { "copy" };
    outcome(
        paste_item(&ctx.fs, &item, &dest_dir),
        &format!("Failed to {verb} item"),
    )?;
    println!("Pasted {} into {dest_dir}", item.path);
    Ok(())
}
