use serde::Deserialize;

use crate::infra::config::{AppConfig, AuthConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub ui: Option<FileUiConfig>,
    pub auth: Option<FileAuthConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }

        if let Some(auth) = self.auth {
            auth.merge_into(&mut config.auth);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub header_height: Option<u16>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(header_height) = self.header_height {
            config.header_height = header_height;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAuthConfig {
    pub remembered_user: Option<String>,
}

impl FileAuthConfig {
    fn merge_into(self, config: &mut AuthConfig) {
        if let Some(remembered_user) = self.remembered_user {
            config.remembered_user = Some(remembered_user);
        }
    }
}
