pub mod en;
pub mod es;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Accepts `en`, `es` and region-tagged forms like `es_ES.UTF-8`.
    pub fn parse(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::English),
            "es" => Some(Locale::Spanish),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextId {
    Previous,
    Next,
    Loading,
    ImageError,
    KeysHint,
}

pub fn tr(locale: Locale, id: TextId) -> &'static str {
    match locale {
        Locale::English => match id {
            TextId::Previous => en::BTN_PREV,
            TextId::Next => en::BTN_NEXT,
            TextId::Loading => en::TEXT_LOADINGIMG,
            TextId::ImageError => en::TEXT_IMAGE_ERROR,
            TextId::KeysHint => en::TEXT_KEYS_HINT,
        },
        Locale::Spanish => match id {
            TextId::Previous => es::BTN_PREV,
            TextId::Next => es::BTN_NEXT,
            TextId::Loading => es::TEXT_LOADINGIMG,
            TextId::ImageError => es::TEXT_IMAGE_ERROR,
            TextId::KeysHint => es::TEXT_KEYS_HINT,
        },
    }
}
