//! Case conversions between component type names and generated filenames.

/// Extension of every generated React file.
pub const TSX_EXTENSION: &str = ".tsx";

/// Convert a PascalCase name into kebab-case.
///
/// A hyphen is inserted wherever a lowercase letter or digit is followed by
/// an uppercase letter, then everything is lowercased. Runs of capitals stay
/// together: `InputOTP` becomes `input-otp`.
pub fn pascal_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for ch in name.chars() {
        if let Some(p) = prev {
            if (p.is_ascii_lowercase() || p.is_ascii_digit()) && ch.is_ascii_uppercase() {
                out.push('-');
            }
        }
        out.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }

    out
}

/// Convert a kebab-case stem back into PascalCase (`aspect-ratio` → `AspectRatio`).
pub fn kebab_to_pascal(stem: &str) -> String {
    stem.split('-')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Uppercase the first character, lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Filename of the generated file for a component or page type name.
pub fn tsx_filename(type_name: &str) -> String {
    format!("{}{}", pascal_to_kebab(type_name), TSX_EXTENSION)
}

/// Strip the `.tsx` (or any) extension from a filename.
pub fn file_stem(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _)| stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_to_kebab_splits_words() {
        assert_eq!(pascal_to_kebab("AspectRatio"), "aspect-ratio");
        assert_eq!(pascal_to_kebab("DropdownMenu"), "dropdown-menu");
        assert_eq!(pascal_to_kebab("Button"), "button");
    }

    #[test]
    fn pascal_to_kebab_keeps_acronyms_together() {
        assert_eq!(pascal_to_kebab("InputOTP"), "input-otp");
        assert_eq!(pascal_to_kebab("Page2Layout"), "page2-layout");
    }

    #[test]
    fn kebab_to_pascal_round_trips_simple_names() {
        assert_eq!(kebab_to_pascal("aspect-ratio"), "AspectRatio");
        assert_eq!(kebab_to_pascal("button"), "Button");
    }

    #[test]
    fn tsx_filename_appends_extension() {
        assert_eq!(tsx_filename("FileUpload"), "file-upload.tsx");
    }

    #[test]
    fn file_stem_drops_extension() {
        assert_eq!(file_stem("radio-group.tsx"), "radio-group");
        assert_eq!(file_stem("README"), "README");
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("hELLO"), "Hello");
    }
}
