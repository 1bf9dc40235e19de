/*
 * i18n.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Localized strings used when rendering transclusions.
 */

//! Localized strings used when rendering transclusions.
//!
//! Lookup falls back from the exact locale to any locale of the same
//! language, then to `en-US`:
//!
//! ```
//! use garden_core::i18n::i18n;
//!
//! assert_eq!(i18n("fr-CA").transcludes.link_to_original, "Lien vers l'original");
//! assert_eq!(i18n("xx-XX").transcludes.transclude_of("notes/a"), "Transclude of notes/a");
//! ```

/// Placeholder in templates replaced by the target document's slug.
const TARGET_SLUG: &str = "{targetSlug}";

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub locale: &'static str,
    pub transcludes: TranscludeStrings,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TranscludeStrings {
    /// Label of the attribution link appended to inlined content.
    pub link_to_original: &'static str,
    /// Heading template used when a transcluded page has no title.
    transclude_of: &'static str,
}

impl TranscludeStrings {
    /// Heading text for a whole-page transclusion of an untitled page.
    pub fn transclude_of(&self, target_slug: &str) -> String {
        self.transclude_of.replace(TARGET_SLUG, target_slug)
    }
}

static TRANSLATIONS: &[Translation] = &[
    Translation {
        locale: "en-US",
        transcludes: TranscludeStrings {
            link_to_original: "Link to original",
            transclude_of: "Transclude of {targetSlug}",
        },
    },
    Translation {
        locale: "en-GB",
        transcludes: TranscludeStrings {
            link_to_original: "Link to original",
            transclude_of: "Transclude of {targetSlug}",
        },
    },
    Translation {
        locale: "fr-FR",
        transcludes: TranscludeStrings {
            link_to_original: "Lien vers l'original",
            transclude_of: "Transclusion de {targetSlug}",
        },
    },
    Translation {
        locale: "de-DE",
        transcludes: TranscludeStrings {
            link_to_original: "Link zum Original",
            transclude_of: "Transklusion von {targetSlug}",
        },
    },
    Translation {
        locale: "es-ES",
        transcludes: TranscludeStrings {
            link_to_original: "Enlace al original",
            transclude_of: "Transclusión de {targetSlug}",
        },
    },
    Translation {
        locale: "it-IT",
        transcludes: TranscludeStrings {
            link_to_original: "Link all'originale",
            transclude_of: "Transclusione di {targetSlug}",
        },
    },
    Translation {
        locale: "nl-NL",
        transcludes: TranscludeStrings {
            link_to_original: "Link naar origineel",
            transclude_of: "Invoeging van {targetSlug}",
        },
    },
    Translation {
        locale: "ja-JP",
        transcludes: TranscludeStrings {
            link_to_original: "元記事へのリンク",
            transclude_of: "{targetSlug}のまとめ",
        },
    },
    Translation {
        locale: "zh-CN",
        transcludes: TranscludeStrings {
            link_to_original: "原始链接",
            transclude_of: "包含{targetSlug}",
        },
    },
];

/// Translation for `locale`.
pub fn i18n(locale: &str) -> &'static Translation {
    if let Some(t) = TRANSLATIONS
        .iter()
        .find(|t| t.locale.eq_ignore_ascii_case(locale))
    {
        return t;
    }

    let language = locale.split(['-', '_']).next().unwrap_or_default();
    TRANSLATIONS
        .iter()
        .find(|t| {
            t.locale
                .split('-')
                .next()
                .is_some_and(|l| l.eq_ignore_ascii_case(language))
        })
        .unwrap_or(&TRANSLATIONS[0])
}
