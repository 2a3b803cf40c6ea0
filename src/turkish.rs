//! Turkish case folding.
//!
//! The dotted and dotless I pairs (`İ`/`i`, `I`/`ı`) do not follow the generic
//! Unicode mapping, so every conversion goes through an explicit table first.

const LOWER_TABLE: [(char, char); 2] = [('İ', 'i'), ('I', 'ı')];
const UPPER_TABLE: [(char, char); 2] = [('i', 'İ'), ('ı', 'I')];

#[inline]
pub fn lower_char(c: char) -> char {
    for (from, to) in LOWER_TABLE {
        if c == from {
            return to;
        }
    }
    c.to_lowercase().next().unwrap_or(c)
}

#[inline]
pub fn upper_char(c: char) -> char {
    for (from, to) in UPPER_TABLE {
        if c == from {
            return to;
        }
    }
    c.to_uppercase().next().unwrap_or(c)
}

pub fn to_lower_tr(s: &str) -> String {
    s.chars().map(lower_char).collect()
}

/// Form a word takes before dictionary lookup: trimmed, Turkish lowercase.
pub fn normalize_word(s: &str) -> String {
    to_lower_tr(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_and_dotless_i_fold_correctly() {
        assert_eq!(to_lower_tr("IŞIK"), "ışık");
        assert_eq!(to_lower_tr("İNCİ"), "inci");
        assert_eq!(upper_char('ı'), 'I');
        assert_eq!(upper_char('i'), 'İ');
        assert_eq!(upper_char('ş'), 'Ş');
    }

    #[test]
    fn other_letters_use_plain_mapping() {
        assert_eq!(to_lower_tr("ÇĞÖŞÜ"), "çğöşü");
        assert_eq!(normalize_word("  KALEM "), "kalem");
    }
}
