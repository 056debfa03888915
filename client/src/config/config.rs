use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::feedback::{
    FeedbackSettings, VIBRATION_DEFAULT_INTENSITY, VIBRATION_MAX_INTENSITY,
    VIBRATION_MIN_INTENSITY,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tic_tac_toe_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path_override: Option<&str>) -> ClientConfigManager {
    let path = match path_override {
        Some(path) => path.to_string(),
        None => get_default_config_path(),
    };
    ConfigManager::from_yaml_file(&path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
    pub vibration_intensity: u32,
    pub dark_mode: bool,
}

impl Config {
    pub fn feedback_settings(&self) -> FeedbackSettings {
        FeedbackSettings {
            sound_enabled: self.sound_enabled,
            vibration_enabled: self.vibration_enabled,
            vibration_intensity: self.vibration_intensity,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.vibration_intensity < VIBRATION_MIN_INTENSITY
            || self.vibration_intensity > VIBRATION_MAX_INTENSITY
        {
            return Err(format!(
                "vibration_intensity must be between {} and {}",
                VIBRATION_MIN_INTENSITY, VIBRATION_MAX_INTENSITY
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            vibration_enabled: true,
            vibration_intensity: VIBRATION_DEFAULT_INTENSITY,
            dark_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tic_tac_toe_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let config = Config {
            sound_enabled: false,
            vibration_intensity: 12,
            dark_mode: true,
            ..Config::default()
        };
        let manager = get_config_manager(Some(&get_temp_file_path()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_out_of_range_intensity_fails_validation() {
        let too_low = Config {
            vibration_intensity: 0,
            ..Config::default()
        };
        assert!(too_low.validate().is_err());

        let too_high = Config {
            vibration_intensity: VIBRATION_MAX_INTENSITY + 1,
            ..Config::default()
        };
        assert!(too_high.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_manager_rejects_invalid_config_on_save() {
        let manager = get_config_manager(Some(&get_temp_file_path()));
        let invalid = Config {
            vibration_intensity: 99,
            ..Config::default()
        };
        assert!(manager.set_config(&invalid).is_err());
    }

    #[test]
    fn test_corrupt_config_file_reports_an_error() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider.set_config_content("vibration_intensity: not-a-number").unwrap();

        let manager = get_config_manager(Some(&file_path));
        assert!(manager.get_config().is_err());
    }
}
