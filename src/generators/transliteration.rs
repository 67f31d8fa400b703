//! Rough Latin → Arabic transliteration for names.
//!
//! Used only when no Arabic name was supplied. It is a phonetic approximation
//! and is not linguistically validated.

const DIGRAPHS: [(&str, &str); 10] = [
    ("sh", "ش"),
    ("th", "ث"),
    ("kh", "خ"),
    ("gh", "غ"),
    ("ch", "تش"),
    ("ph", "ف"),
    ("ee", "ي"),
    ("oo", "و"),
    ("ou", "و"),
    ("aa", "ا"),
];

fn single(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'a' => "ا",
        'b' => "ب",
        'c' => "ك",
        'd' => "د",
        'e' => "ي",
        'f' => "ف",
        'g' => "ج",
        'h' => "ه",
        'i' => "ي",
        'j' => "ج",
        'k' => "ك",
        'l' => "ل",
        'm' => "م",
        'n' => "ن",
        'o' => "و",
        'p' => "ب",
        'q' => "ق",
        'r' => "ر",
        's' => "س",
        't' => "ت",
        'u' => "و",
        'v' => "ف",
        'w' => "و",
        'x' => "كس",
        'y' => "ي",
        'z' => "ز",
        _ => return None,
    };
    Some(mapped)
}

/// Transliterate a Latin name. Digraphs win over single letters, whitespace
/// runs become one space, anything unmapped is dropped.
pub fn transliterate(name: &str) -> String {
    let chars: Vec<char> = name.trim().to_lowercase().chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            i += 1;
            continue;
        }

        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some((_, mapped)) = DIGRAPHS.iter().find(|(d, _)| *d == pair) {
                out.push_str(mapped);
                i += 2;
                continue;
            }
        }

        if let Some(mapped) = single(ch) {
            out.push_str(mapped);
        }
        i += 1;
    }

    out.trim_end().to_string()
}
