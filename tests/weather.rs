#[cfg(test)]
mod tests {
    use asciipal::libs::config::Config;
    use asciipal::libs::weather::{parse_weather_code, WeatherClient, WeatherKind, WeatherManager};
    use std::time::Duration;

    fn enabled_config() -> Config {
        Config {
            weather_enabled: true,
            weather_location: "Lisbon".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_condition_codes() {
        assert_eq!(WeatherKind::from_code(113), Some(WeatherKind::Clear));
        assert_eq!(WeatherKind::from_code(122), Some(WeatherKind::Cloudy));
        assert_eq!(WeatherKind::from_code(248), Some(WeatherKind::Fog));
        assert_eq!(WeatherKind::from_code(296), Some(WeatherKind::Rain));
        assert_eq!(WeatherKind::from_code(308), Some(WeatherKind::HeavyRain));
        assert_eq!(WeatherKind::from_code(338), Some(WeatherKind::Snow));
        assert_eq!(WeatherKind::from_code(317), Some(WeatherKind::Sleet));
        assert_eq!(WeatherKind::from_code(389), Some(WeatherKind::Thunder));
        assert_eq!(WeatherKind::from_code(999), None);
        assert_eq!(WeatherKind::HeavyRain.to_string(), "heavy_rain");
    }

    #[test]
    fn test_parse_wttr_document() {
        let body = r#"{"current_condition": [{"temp_C": "14", "weatherCode": "302", "weatherDesc": [{"value": "Moderate rain"}]}], "weather": []}"#;
        let code = parse_weather_code(body).unwrap();
        assert_eq!(code, 302);
        assert_eq!(WeatherKind::from_code(code), Some(WeatherKind::Rain));

        assert!(parse_weather_code(r#"{"current_condition": []}"#).is_err());
        assert!(parse_weather_code("<html>").is_err());
    }

    #[test]
    fn test_url() {
        assert_eq!(WeatherClient::url("London"), "https://wttr.in/London?format=j1");
        assert_eq!(WeatherClient::url(""), "https://wttr.in/?format=j1");
    }

    #[test]
    fn test_poll_interval_has_floor() {
        let mut config = enabled_config();
        config.weather_poll_minutes = 2;
        assert_eq!(WeatherManager::new(&config).poll_interval(), Duration::from_secs(300));
        assert_eq!(WeatherManager::new(&Config::default()).poll_interval(), Duration::from_secs(1800));
    }

    #[test]
    fn test_disabled_manager_shows_nothing() {
        let manager = WeatherManager::new(&Config::default());
        assert!(!manager.is_enabled());
        manager.set_effect(Some(WeatherKind::Snow));
        assert_eq!(manager.current_effect(0), None);
    }

    #[test]
    fn test_enabled_manager_shows_latest_effect() {
        let manager = WeatherManager::new(&enabled_config());
        assert_eq!(manager.current_effect(0), None);

        manager.set_effect(Some(WeatherKind::Snow));
        assert_eq!(manager.current_effect(1), Some(WeatherKind::Snow.decoration(1)));
        assert_ne!(WeatherKind::Snow.decoration(0), WeatherKind::Snow.decoration(1));

        manager.clear_effect();
        assert_eq!(manager.current_kind(), None);
    }

    #[tokio::test]
    async fn test_toggle() {
        let mut manager = WeatherManager::new(&enabled_config());
        manager.set_effect(Some(WeatherKind::Fog));

        assert!(!manager.toggle());
        assert_eq!(manager.current_kind(), None);
        assert_eq!(manager.current_effect(0), None);

        assert!(manager.toggle());
        assert!(manager.is_enabled());
        manager.stop();
    }
}
