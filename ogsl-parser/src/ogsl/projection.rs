//! Output projection
//!
//!     Flattens a sign forest into a mapping from reading to display glyph:
//!
//!         - a sign's own values map to the sign's glyph, or to its name if it has none;
//!         - a form's values map to the form's glyph, or to its variant code if it has none.
//!
//!     Signs, forms and values are visited in source order and later entries overwrite earlier
//!     ones, so when two values share a reading the last one in the document wins.

use crate::ogsl::ast::Sign;
use std::collections::BTreeMap;

/// Reading text → glyph (or fallback name).
pub type ReadingMap = BTreeMap<String, String>;

pub fn project(signs: &[Sign]) -> ReadingMap {
    let mut readings = ReadingMap::new();
    for sign in signs {
        for value in &sign.values {
            readings.insert(value.text.clone(), sign.display_glyph().to_string());
        }
        for form in &sign.forms {
            for value in &form.values {
                readings.insert(value.text.clone(), form.display_glyph().to_string());
            }
        }
    }
    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ogsl::building::build_sign;
    use crate::ogsl::testing::sign_block;

    fn sign(source: &str) -> Sign {
        build_sign(&sign_block(source))
            .unwrap()
            .into_sign()
            .expect("not discarded")
    }

    #[test]
    fn test_project_sign_values() {
        let signs = vec![sign("@sign AN\n@ucun 𒀭\n@v an\n@v dingir\n@end sign\n")];
        let readings = project(&signs);
        assert_eq!(readings.len(), 2);
        assert_eq!(readings["an"], "𒀭");
        assert_eq!(readings["dingir"], "𒀭");
    }

    #[test]
    fn test_fallbacks_without_glyph() {
        let signs = vec![sign("@sign KA\n@v ka\n@form ~b\n@v zu\n@end sign\n")];
        let readings = project(&signs);
        assert_eq!(readings["ka"], "KA");
        assert_eq!(readings["zu"], "~b");
    }

    #[test]
    fn test_questionable_readings_project_without_mark() {
        let signs = vec![sign("@sign A\n@ucun 𒀀\n@v e₄?\n@end sign\n")];
        assert_eq!(project(&signs)["e₄"], "𒀀");
    }

    #[test]
    fn test_later_form_wins_collision() {
        let signs = vec![sign(
            "@sign A\n@form ~a\n@ucun 𒀀\n@v x\n@form ~b\n@ucun 𒀁\n@v x\n@end sign\n",
        )];
        assert_eq!(project(&signs)["x"], "𒀁");
    }

    #[test]
    fn test_later_sign_wins_collision() {
        let signs = vec![
            sign("@sign A\n@ucun 𒀀\n@v x\n@end sign\n"),
            sign("@sign B\n@ucun 𒀁\n@v x\n@end sign\n"),
        ];
        assert_eq!(project(&signs)["x"], "𒀁");
    }

    #[test]
    fn test_form_values_follow_sign_values() {
        let signs = vec![sign(
            "@sign A\n@ucun 𒀀\n@v x\n@form ~a\n@ucun 𒀀𒀀\n@v x\n@end sign\n",
        )];
        assert_eq!(project(&signs)["x"], "𒀀𒀀");
    }

    #[test]
    fn test_empty_forest() {
        assert!(project(&[]).is_empty());
    }
}
