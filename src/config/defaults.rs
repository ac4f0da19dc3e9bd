use super::*;

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            console_level: None,
            file_level: None,
            file: String::new(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for ZonePalette {
    fn default() -> Self {
        Self {
            zone1: "#0D47A1".to_string(),
            zone2: "#1976D2".to_string(),
            zone3: "#90A4AE".to_string(),
            zone4: "#4DB6AC".to_string(),
            zone5: "#009688".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            refresh_interval_secs: 60,
            palette: ZonePalette::default(),
        }
    }
}
