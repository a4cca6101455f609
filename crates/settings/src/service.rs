use filedeck_common::FileBrowserError;
use filedeck_domain::{AppSettings, Setting};

use crate::KeyValueStore;

/// Key the whole settings blob is stored under.
pub const SETTINGS_KEY: &str = "app_settings";

/// 设置服务，每次修改都写入注入的存储
#[derive(Debug)]
pub struct SettingsService<S: KeyValueStore> {
    store: S,
    settings: AppSettings,
    loaded: bool,
}

impl<S: KeyValueStore> SettingsService<S> {
    /// Starts from defaults; call [`load`](Self::load) to read the stored blob.
    pub fn new(store: S) -> Self {
        Self {
            store,
            settings: AppSettings::default(),
            loaded: false,
        }
    }

    /// 读取已保存的设置；缺失或损坏时保留默认值
    pub fn load(&mut self) -> &AppSettings {
        match self.store.get_item(SETTINGS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<AppSettings>(&blob) {
                Ok(settings) => self.settings = settings,
                Err(e) => log::error!("failed to parse stored settings: {e}"),
            },
            Ok(None) => log::debug!("no stored settings, using defaults"),
            Err(e) => log::error!("failed to load settings: {e}"),
        }
        self.loaded = true;
        &self.settings
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn get(&self) -> &AppSettings {
        &self.settings
    }

    /// Persists `settings` and adopts them once the write succeeded.
    pub fn save(&mut self, settings: AppSettings) -> Result<(), FileBrowserError> {
        let blob = serde_json::to_string(&settings)
            .map_err(|e| FileBrowserError::Settings(e.to_string()))?;
        self.store.set_item(SETTINGS_KEY, &blob).map_err(|e| {
            log::error!("failed to save settings: {e}");
            e
        })?;
        self.settings = settings;
        Ok(())
    }

    /// Changes one field; on a failed write the current settings stay as they were.
    pub fn set(&mut self, setting: Setting) -> Result<(), FileBrowserError> {
        let mut next = self.settings.clone();
        setting.apply_to(&mut next);
        self.save(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use filedeck_domain::{SortOrder, ThemeMode, ViewMode};

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, FileBrowserError> {
            Err(FileBrowserError::PermissionDenied("settings".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), FileBrowserError> {
            Err(FileBrowserError::PermissionDenied("settings".into()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), FileBrowserError> {
            Ok(())
        }
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let mut service = SettingsService::new(MemoryStore::new());
        assert!(!service.is_loaded());
        assert_eq!(*service.load(), AppSettings::default());
        assert!(service.is_loaded());
    }

    #[test]
    fn test_set_persists_and_reloads() {
        let store = MemoryStore::new();
        {
            let mut service = SettingsService::new(&store);
            service.load();
            service.set(Setting::Theme(ThemeMode::Dark)).unwrap();
            service.set(Setting::ViewMode(ViewMode::Grid)).unwrap();
            assert_eq!(service.get().theme, ThemeMode::Dark);
        }

        let blob = store.get_item(SETTINGS_KEY).unwrap().unwrap();
        assert!(blob.contains("\"viewMode\":\"grid\""));

        let mut reloaded = SettingsService::new(&store);
        let settings = reloaded.load();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.view_mode, ViewMode::Grid);
        assert_eq!(settings.sort_order, SortOrder::Name);
    }

    #[test]
    fn test_malformed_blob_keeps_defaults() {
        let store = MemoryStore::new();
        store.set_item(SETTINGS_KEY, "{not json").unwrap();
        let mut service = SettingsService::new(store);
        assert_eq!(*service.load(), AppSettings::default());
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let mut service = SettingsService::new(FailingStore);
        assert_eq!(*service.load(), AppSettings::default());
        let err = service.set(Setting::ShowHiddenFiles(true)).unwrap_err();
        assert!(matches!(err, FileBrowserError::PermissionDenied(_)));
        assert!(!service.get().show_hidden_files);
    }
}
