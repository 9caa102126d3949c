//! Arabic orthographic normalization.
//!
//! Collapses the spelling variation that destabilizes both embeddings and
//! token matching: diacritics, tatweel, alef and hamza-carrier variants,
//! lam-alef ligatures and the superscript small alef.

/// Combining diacritics, fathatan (U+064B) through sukun (U+0652).
fn is_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&c)
}

const TATWEEL: char = '\u{0640}';
const SMALL_ALEF: char = '\u{0670}';

/// Canonicalizes Arabic text. Idempotent: applying it twice yields the same
/// string as applying it once.
///
/// - drops diacritics, tatweel, the small alef and the bare hamza
/// - folds alef variants (hamza above/below, madda, wasla) to plain alef
/// - folds hamza carriers to their base letter (waw, ya)
/// - folds lam-alef ligature codepoints to the two-letter sequence
/// - collapses whitespace runs to a single space and trims
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            c if is_diacritic(c) || c == TATWEEL || c == SMALL_ALEF => {}
            'أ' | 'إ' | 'آ' | 'ٱ' => folded.push('ا'),
            'ؤ' => folded.push('و'),
            'ئ' => folded.push('ي'),
            'ء' => {}
            '\u{FEFB}' | '\u{FEFC}' | '\u{FEF7}' | '\u{FEF8}' | '\u{FEF9}' | '\u{FEFA}'
            | '\u{FEF5}' | '\u{FEF6}' => folded.push_str("لا"),
            _ => folded.push(c),
        }
    }
    collapse_whitespace(&folded)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
