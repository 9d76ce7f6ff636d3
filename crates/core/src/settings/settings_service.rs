use super::SettingsRepositoryTrait;
use crate::constants::THEME_STORE_KEY;
use crate::errors::{DatabaseError, Error, Result};
use crate::fx::MissingRatePolicy;
use crate::settings::{Settings, SettingsUpdate, Theme};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings>;

    /// Stored theme; a missing or unrecognised value reads as the default.
    fn get_theme(&self) -> Result<Theme>;

    async fn set_theme(&self, theme: Theme) -> Result<()>;

    /// Flips the theme and returns the new one.
    async fn toggle_theme(&self) -> Result<Theme>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    home_currency: String,
    missing_rate_policy: MissingRatePolicy,
}

impl SettingsService {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        home_currency: impl Into<String>,
        missing_rate_policy: MissingRatePolicy,
    ) -> Self {
        SettingsService {
            settings_repository,
            home_currency: home_currency.into(),
            missing_rate_policy,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        Ok(Settings {
            theme: self.get_theme()?,
            home_currency: self.home_currency.clone(),
            missing_rate_policy: self.missing_rate_policy,
        })
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings> {
        if let Some(theme) = update.theme {
            self.set_theme(theme).await?;
        }
        self.get_settings()
    }

    fn get_theme(&self) -> Result<Theme> {
        match self.settings_repository.get_setting(THEME_STORE_KEY) {
            Ok(value) => Ok(value.parse().unwrap_or_else(|_| {
                warn!("Ignoring unknown stored theme '{}'", value);
                Theme::default()
            })),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(Theme::default()),
            Err(e) => Err(e),
        }
    }

    async fn set_theme(&self, theme: Theme) -> Result<()> {
        debug!("Setting theme to {}", theme);
        self.settings_repository
            .update_setting(THEME_STORE_KEY, theme.as_str())
            .await
    }

    async fn toggle_theme(&self) -> Result<Theme> {
        let next = self.get_theme()?.toggled();
        self.set_theme(next).await?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySettings {
        values: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl SettingsRepositoryTrait for InMemorySettings {
        fn get_setting(&self, setting_key: &str) -> Result<String> {
            self.values
                .lock()
                .unwrap()
                .get(setting_key)
                .cloned()
                .ok_or_else(|| DatabaseError::NotFound(setting_key.to_string()).into())
        }

        async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(setting_key.to_string(), setting_value.to_string());
            Ok(())
        }
    }

    fn service(repo: Arc<InMemorySettings>) -> SettingsService {
        SettingsService::new(repo, "SGD", MissingRatePolicy::Zero)
    }

    #[tokio::test]
    async fn test_missing_theme_defaults_to_dark() {
        let svc = service(Arc::new(InMemorySettings::default()));
        assert_eq!(svc.get_theme().unwrap(), Theme::Dark);

        let settings = svc.get_settings().unwrap();
        assert_eq!(settings.home_currency, "SGD");
        assert_eq!(settings.missing_rate_policy, MissingRatePolicy::Zero);
    }

    #[tokio::test]
    async fn test_toggle_persists_under_theme_key() {
        let repo = Arc::new(InMemorySettings::default());
        let svc = service(repo.clone());

        assert_eq!(svc.toggle_theme().await.unwrap(), Theme::Light);
        assert_eq!(repo.get_setting("theme").unwrap(), "light");
        assert_eq!(svc.toggle_theme().await.unwrap(), Theme::Dark);
        assert_eq!(repo.get_setting("theme").unwrap(), "dark");
    }

    #[tokio::test]
    async fn test_unknown_stored_theme_reads_as_default() {
        let repo = Arc::new(InMemorySettings::default());
        repo.update_setting("theme", "solarized").await.unwrap();
        assert_eq!(service(repo).get_theme().unwrap(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_update_settings_applies_theme() {
        let svc = service(Arc::new(InMemorySettings::default()));
        let settings = svc
            .update_settings(&SettingsUpdate {
                theme: Some(Theme::Light),
            })
            .await
            .unwrap();
        assert_eq!(settings.theme, Theme::Light);

        let unchanged = svc.update_settings(&SettingsUpdate::default()).await.unwrap();
        assert_eq!(unchanged.theme, Theme::Light);
    }
}
