use filedeck_domain::Setting;

use super::Context;

pub fn show(ctx: &Context) -> Result<(), String> {
    let settings = ctx.settings.get();
    if ctx.json {
        return ctx.print_json(settings);
    }
    println!("viewMode            {}", settings.view_mode);
    println!("sortOrder           {}", settings.sort_order);
    println!("showHiddenFiles     {}", settings.show_hidden_files);
    println!("confirmBeforeDelete {}", settings.confirm_before_delete);
    println!("theme               {}", settings.theme);
    Ok(())
}

pub fn set(ctx: &mut Context, key: &str, value: &str) -> Result<(), String> {
    let setting = Setting::parse(key, value).map_err(|e| e.to_string())?;
    ctx.settings
        .set(setting)
        .map_err(|e| format!("failed to save settings: {e}"))?;
    show(ctx)
}
