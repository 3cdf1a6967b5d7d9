//! Language codes - the closed set of site languages and their mappings

/// A supported site language.
///
/// The set is closed: anything that is not `cn`, `en` or `jp` is not a
/// language as far as this crate is concerned and falls through to the next
/// resolution source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cn,
    En,
    Jp,
}

/// Every supported language, in selector order.
pub const ALL: [Language; 3] = [Language::Cn, Language::En, Language::Jp];

impl Language {
    /// The short code used in URLs, storage and `data-*` attribute names.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Cn => "cn",
            Language::En => "en",
            Language::Jp => "jp",
        }
    }

    /// Strict set-membership parse. No aliases, no case folding.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "cn" => Some(Language::Cn),
            "en" => Some(Language::En),
            "jp" => Some(Language::Jp),
            _ => None,
        }
    }

    /// Map a browser locale tag (BCP-47-ish, e.g. `zh-TW`, `ja`, `fr-FR`)
    /// to a site language. Only the leading subtag is inspected; anything
    /// that is not Chinese or Japanese defaults to English.
    pub fn from_locale(locale: &str) -> Language {
        let tag = locale.to_ascii_lowercase();
        if tag.starts_with("zh") {
            Language::Cn
        } else if tag.starts_with("ja") {
            Language::Jp
        } else {
            Language::En
        }
    }

    /// Value for the document root's `lang` metadata.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::Cn => "zh-CN",
            Language::En => "en",
            Language::Jp => "ja",
        }
    }

    /// Content attribute carried by translatable elements, e.g. `data-jp`.
    pub fn content_attr(&self) -> &'static str {
        match self {
            Language::Cn => "data-cn",
            Language::En => "data-en",
            Language::Jp => "data-jp",
        }
    }

    /// Placeholder attribute, e.g. `data-jp-placeholder`.
    pub fn placeholder_attr(&self) -> &'static str {
        match self {
            Language::Cn => "data-cn-placeholder",
            Language::En => "data-en-placeholder",
            Language::Jp => "data-jp-placeholder",
        }
    }
}
