//! # MAC Address Normalization
//!
//! Turns whatever the user typed (`aa:bb:cc:11:22:33`, `AABB.CC11.2233`,
//! `aa-bb-cc`) into the key that every lookup source receives.

/// Length of the **Organizationally unique identifier** prefix, in characters.
pub const OUI_LEN: usize = 6;

/// Canonicalizes a raw address into its OUI lookup key.
///
/// Drops every character that is not a letter or digit, upper-cases the
/// rest and keeps the first [`OUI_LEN`] characters. Never fails: garbage in
/// yields a short (possibly empty) key.
///
/// Sources must receive this key as-is and never normalize it again.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        // upper-casing can emit combining marks
        .filter(|c| c.is_alphanumeric())
        .take(OUI_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn separators_and_case_are_ignored() {
        assert_eq!(normalize("AA:BB:CC:11:22:33"), "AABBCC");
        assert_eq!(normalize("aabbcc112233"), "AABBCC");
        assert_eq!(normalize("aa-bb-cc-11-22-33"), "AABBCC");
        assert_eq!(normalize("AABB.CC11.2233"), "AABBCC");
    }

    #[test]
    fn short_and_empty_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(":::"), "");
        assert_eq!(normalize("a:b"), "AB");
    }

    #[test]
    fn non_mac_text_still_yields_a_key() {
        assert_eq!(normalize("not-a-real-mac"), "NOTARE");
    }

    #[test]
    fn normalizing_is_idempotent() {
        let inputs = [
            "AA:BB:CC:11:22:33",
            "not-a-real-mac",
            "",
            "  00 1a 2b  ",
            "straße-ab",
            "\u{0390}\u{0390}\u{0390}xyz",
            "ﬁﬁﬁﬁ",
        ];
        for raw in inputs {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
            assert!(once.chars().count() <= OUI_LEN);
        }
    }

    proptest! {
        #[test]
        fn idempotent_for_any_string(raw in any::<String>()) {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(once.chars().count() <= OUI_LEN);
        }

        #[test]
        fn separators_never_change_the_key(
            octets in proptest::collection::vec(any::<u8>(), 6),
            sep in prop::sample::select(vec![":", "-", ".", " ", ""]),
        ) {
            let lower: Vec<String> = octets.iter().map(|o| format!("{o:02x}")).collect();
            let upper: String = octets.iter().map(|o| format!("{o:02X}")).collect();
            prop_assert_eq!(normalize(&lower.join(sep)), upper[..OUI_LEN].to_string());
        }
    }
}
