use filedeck_common::FileBrowserError;

pub(crate) fn report(result: Result<(), FileBrowserError>, action: &str) -> bool {
    match result {
        Ok(()) => {
            log::info!("{action}: done");
            true
        }
        Err(e) => {
            log::error!("{action}: failed: {e}");
            false
        }
    }
}
