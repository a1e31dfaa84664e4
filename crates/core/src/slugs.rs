//! Slugs
//!
//! URL-safe identifiers derived from catalog names. Generation is a pure function of the
//! name plus a uniqueness check supplied by the caller.

/// Slug used when neither the name nor the SKU yields any characters.
pub const FALLBACK_SLUG: &str = "product";

/// Slug used for a category whose name yields no characters.
pub const CATEGORY_FALLBACK_SLUG: &str = "category";

/// Slug used for a brand whose name yields no characters.
pub const BRAND_FALLBACK_SLUG: &str = "brand";

/// Lowercase `text`, transliterate Cyrillic, keep ASCII letters and digits, and join the
/// remaining words with single hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        let piece = match transliterate(ch) {
            Some(latin) => latin,
            None if ch.is_ascii_alphanumeric() => {
                push_piece(&mut slug, &mut pending_separator, ch.encode_utf8(&mut [0; 4]));
                continue;
            }
            None => {
                pending_separator = true;
                continue;
            }
        };

        if !piece.is_empty() {
            push_piece(&mut slug, &mut pending_separator, piece);
        }
    }

    slug
}

fn push_piece(slug: &mut String, pending_separator: &mut bool, piece: &str) {
    if *pending_separator && !slug.is_empty() {
        slug.push('-');
    }

    *pending_separator = false;
    slug.push_str(piece);
}

/// Starting slug for a product: from the name, else the SKU, else [`FALLBACK_SLUG`].
pub fn base_slug(name: &str, sku: Option<&str>) -> String {
    let slug = slugify(name);

    if !slug.is_empty() {
        return slug;
    }

    sku.map(slugify)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| FALLBACK_SLUG.to_string())
}

/// Slugify `name`, or use `fallback` when nothing survives.
pub fn slug_or(name: &str, fallback: &str) -> String {
    let slug = slugify(name);

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// First of `base`, `base-1`, `base-2`, … for which `is_taken` returns `false`.
pub fn unique_slug(base: &str, mut is_taken: impl FnMut(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }

    (1_u64..)
        .map(|suffix| format!("{base}-{suffix}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' | 'ґ' => "g",
        'д' => "d",
        'е' | 'э' => "e",
        'є' => "ye",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' | 'і' => "i",
        'ї' => "yi",
        'й' | 'ы' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };

    Some(latin)
}
