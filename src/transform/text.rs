//! Small string passes shared by the row hooks.

use crate::parser::Row;
use serde_json::Value;

/// Turn a hyphenated machine identifier into space-separated words.
pub fn identifier_to_name(identifier: &str) -> String {
    identifier.replace('-', " ")
}

/// Uppercase the first letter of each whitespace-separated word, lowercase
/// the rest.
pub fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Human-readable display name for an identifier like `razor-leaf`.
pub fn display_name(identifier: &str) -> String {
    to_title_case(&identifier_to_name(identifier))
}

const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];

/// Roman numeral for a generation number. Zero and negatives map to the
/// empty string; thousands are repeated `M`s.
pub fn romanize(n: i64) -> String {
    if n <= 0 {
        return String::new();
    }

    let mut roman = "M".repeat((n / 1000) as usize);
    roman.push_str(HUNDREDS[(n / 100 % 10) as usize]);
    roman.push_str(TENS[(n / 10 % 10) as usize]);
    roman.push_str(ONES[(n % 10) as usize]);
    roman
}

/// Rebuild `row` with `key` inserted directly after `after`. If `after` is
/// missing the new field ends up last.
pub fn insert_after(row: Row, after: &str, key: &str, value: Value) -> Row {
    let mut out = Row::new();
    let mut inserted = false;

    for (k, v) in row {
        let follows = k == after;
        out.insert(k, v);
        if follows {
            out.insert(key.to_string(), value.clone());
            inserted = true;
        }
    }

    if !inserted {
        out.insert(key.to_string(), value);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_to_name() {
        assert_eq!(identifier_to_name("razor-leaf"), "razor leaf");
        assert_eq!(identifier_to_name("tackle"), "tackle");
        assert_eq!(identifier_to_name(""), "");
    }

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("razor leaf"), "Razor Leaf");
        assert_eq!(to_title_case("GRASSLAND"), "Grassland");
        assert_eq!(to_title_case("medium slow"), "Medium Slow");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("razor-leaf"), "Razor Leaf");
        assert_eq!(display_name("bulbasaur"), "Bulbasaur");
    }

    #[test]
    fn test_romanize() {
        assert_eq!(romanize(1), "I");
        assert_eq!(romanize(4), "IV");
        assert_eq!(romanize(7), "VII");
        assert_eq!(romanize(9), "IX");
        assert_eq!(romanize(1994), "MCMXCIV");
        assert_eq!(romanize(3999), "MMMCMXCIX");
        assert_eq!(romanize(0), "");
        assert_eq!(romanize(-3), "");
    }

    #[test]
    fn test_insert_after_keeps_position() {
        let mut row = Row::new();
        row.insert("id".into(), json!(1));
        row.insert("identifier".into(), json!("razor-leaf"));
        row.insert("power".into(), json!(55));

        let row = insert_after(row, "identifier", "name", json!("Razor Leaf"));
        let keys: Vec<&str> = row.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "identifier", "name", "power"]);
    }

    #[test]
    fn test_insert_after_missing_anchor_appends() {
        let mut row = Row::new();
        row.insert("id".into(), json!(1));

        let row = insert_after(row, "identifier", "name", json!("x"));
        let keys: Vec<&str> = row.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "name"]);
    }
}
