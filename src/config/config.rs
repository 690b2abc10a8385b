use crate::i18n::Locale;

pub const APP_NAME: &str = "Art Space";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the UI language (`en` or `es`).
pub const LANG_ENV_VAR: &str = "ART_SPACE_LANG";

pub const WINDOW_SIZE: [f32; 2] = [420.0, 760.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [320.0, 480.0];

// Decoded artwork is downsized to fit inside this box.
pub const MAX_IMAGE_WIDTH: u32 = 1920;
pub const MAX_IMAGE_HEIGHT: u32 = 1080;

pub const SCREEN_PADDING_X: f32 = 20.0;
pub const SCREEN_PADDING_Y: f32 = 10.0;
pub const BLOCK_SPACING: f32 = 20.0;
pub const IMAGE_HEIGHT_FRACTION: f32 = 2.0 / 3.0;
pub const IMAGE_BORDER_WIDTH: f32 = 3.0;
pub const IMAGE_INNER_PADDING: f32 = 40.0;
pub const DESCRIPTION_PADDING: f32 = 20.0;
pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const BYLINE_FONT_SIZE: f32 = 18.0;
pub const BUTTON_WIDTH: f32 = 100.0;

pub fn locale_from_env() -> Locale {
    locale_from(std::env::var(LANG_ENV_VAR).ok().as_deref())
}

fn locale_from(value: Option<&str>) -> Locale {
    match value {
        None => Locale::default(),
        Some(tag) => Locale::parse(tag).unwrap_or_else(|| {
            log::warn!("unknown {LANG_ENV_VAR} value {tag:?}, falling back to English");
            Locale::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_language_defaults_to_english() {
        assert_eq!(locale_from(None), Locale::English);
    }

    #[test]
    fn known_language_is_used() {
        assert_eq!(locale_from(Some("es")), Locale::Spanish);
    }

    #[test]
    fn unknown_language_falls_back() {
        assert_eq!(locale_from(Some("klingon")), Locale::English);
    }
}
