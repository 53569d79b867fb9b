#[cfg(test)]
mod tests {
    use asciipal::libs::config::{ColorScheme, Config};
    use asciipal::libs::palette::{parse_hex, scheme_colors, Palette, WIDGET_BACKGROUND};
    use asciipal::libs::scene::Region;
    use crossterm::style::Color;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff0080"), Some(Color::Rgb { r: 255, g: 0, b: 128 }));
        assert_eq!(parse_hex("#4CAF50"), Some(Color::Rgb { r: 0x4c, g: 0xaf, b: 0x50 }));
        assert_eq!(parse_hex("ff0080"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#gg0000"), None);
    }

    #[test]
    fn test_window_mode_uses_scheme_tables() {
        let palette = Palette::new(ColorScheme::Default, false);
        let (fg, bg) = scheme_colors(ColorScheme::Default);
        assert_eq!(Some(palette.foreground), parse_hex(fg));
        assert_eq!(Some(palette.background), parse_hex(bg));
        assert_eq!(Some(palette.color_for(Region::Character)), parse_hex("#4CAF50"));
        assert_ne!(palette.color_for(Region::Plant), Palette::new(ColorScheme::Ocean, false).color_for(Region::Plant));
    }

    #[test]
    fn test_status_uses_foreground() {
        for scheme in [ColorScheme::Default, ColorScheme::AmberTerminal] {
            let palette = Palette::new(scheme, false);
            assert_eq!(palette.color_for(Region::Status), palette.foreground);
            assert_eq!(palette.color_for(Region::Default), palette.foreground);
        }
    }

    #[test]
    fn test_widget_mode_shares_region_colors() {
        let ocean = Palette::new(ColorScheme::Ocean, true);
        let pastel = Palette::new(ColorScheme::Pastel, true);
        assert_eq!(Some(ocean.background), parse_hex(WIDGET_BACKGROUND));
        assert_eq!(ocean.color_for(Region::Plant), pastel.color_for(Region::Plant));
        assert_ne!(ocean.foreground, pastel.foreground);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            color_scheme: ColorScheme::GreenTerminal,
            widget_mode: false,
            ..Config::default()
        };
        let palette = Palette::from_config(&config);
        assert_eq!(Some(palette.foreground), parse_hex("#7CFC00"));
    }
}
