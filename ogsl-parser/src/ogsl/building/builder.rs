//! Sign builder
//!
//! Walks the body of one sign block, line by line, keeping an explicit stack of open scopes on
//! top of the sign. The stack holds at most a form and a value:
//!
//!     [sign]  [sign, value]  [sign, form]  [sign, form, value]
//!
//! Transitions:
//!
//!     - `@form` closes any open value and form, then opens a new form.
//!     - `@v` / `@v-` closes any open value, then opens a value on the active sign or form.
//!     - `@@` is a no-op.
//!     - Anything else goes to the innermost scope's dispatch table.
//!
//! At the terminator every open scope is closed and attached to its owner, so forms and values
//! keep source order.
//!
//! Before the walk, the body is scanned for `@fake` in sign scope, meaning any line ahead of the
//! first `@form`. Such a block is discarded outright, whatever else it contains. A `@fake` after
//! a form opens reaches the form's dispatch table and is rejected there.
use super::scope::{FormBuilder, Rejection, ScopeKind, SignBuilder, ValueBuilder};
use crate::ogsl::ast::{ErrorKind, ParseError, Sign};
use crate::ogsl::lexing::{tokenize_line, SignBlock};
use crate::ogsl::token::{SourceLine, Tag, TagLine};
use tracing::debug;

/// The result of building one sign block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Built(Sign),
    /// The block carried `@fake`; it yields no sign, and this is not an error.
    Discarded,
}

impl BuildOutcome {
    pub fn into_sign(self) -> Option<Sign> {
        match self {
            BuildOutcome::Built(sign) => Some(sign),
            BuildOutcome::Discarded => None,
        }
    }
}

/// Build one sign from a validated block.
pub fn build_sign(block: &SignBlock) -> Result<BuildOutcome, ParseError> {
    let mut builder = SignAssembler::start(block)?;
    if let Some(line) = fake_in_sign_scope(block.body()) {
        debug!(sign = block.name(), line = line.number, "sign discarded by @fake");
        return Ok(BuildOutcome::Discarded);
    }
    for line in block.body() {
        builder.process(line)?;
    }
    Ok(BuildOutcome::Built(builder.finish()))
}

/// The first `@fake` line ahead of any `@form`.
fn fake_in_sign_scope(body: &[SourceLine]) -> Option<&SourceLine> {
    body.iter()
        .map(|line| (line, Tag::lookup(line.leading_word())))
        .take_while(|(_, tag)| *tag != Some(Tag::Form))
        .find(|(_, tag)| *tag == Some(Tag::Fake))
        .map(|(line, _)| line)
}

/// A scope open on top of the sign.
#[derive(Debug)]
enum OpenScope {
    Form(FormBuilder),
    Value(ValueBuilder),
}

struct SignAssembler {
    sign: SignBuilder,
    open: Vec<OpenScope>,
    block_start: usize,
    name: String,
}

impl SignAssembler {
    fn start(block: &SignBlock) -> Result<Self, ParseError> {
        let header = block.header();
        let tag_line = tokenize_line(header)
            .map_err(|kind| ParseError::new(block.start_line(), None, kind))?;
        if !tag_line.tag.opens_sign() {
            return Err(ParseError::new(
                block.start_line(),
                None,
                ErrorKind::MalformedSignHeader {
                    line: header.number,
                    content: header.text.clone(),
                },
            ));
        }
        let is_deprecated = tag_line.tag == Tag::SignDeprecated;
        Ok(Self {
            sign: SignBuilder::new(block.name(), is_deprecated),
            open: Vec::new(),
            block_start: block.start_line(),
            name: block.name().to_string(),
        })
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(self.block_start, Some(self.name.clone()), kind)
    }

    /// The scope unscoped tags currently apply to.
    fn scope(&self) -> ScopeKind {
        match self.open.last() {
            Some(OpenScope::Value(_)) => ScopeKind::Value,
            Some(OpenScope::Form(_)) => ScopeKind::Form,
            None => ScopeKind::Sign,
        }
    }

    fn process(&mut self, line: &SourceLine) -> Result<(), ParseError> {
        let tag_line = tokenize_line(line).map_err(|kind| self.error(kind))?;
        match tag_line.tag {
            Tag::Separator => {}
            Tag::Form => {
                self.close_form();
                let form = FormBuilder::from_data(&tag_line.data)
                    .ok_or_else(|| self.missing_data(&tag_line))?;
                self.open.push(OpenScope::Form(form));
            }
            Tag::Value | Tag::ValueDeprecated => {
                self.close_value();
                let is_deprecated = tag_line.tag == Tag::ValueDeprecated;
                let value = ValueBuilder::from_data(&tag_line.data, is_deprecated)
                    .ok_or_else(|| self.missing_data(&tag_line))?;
                self.open.push(OpenScope::Value(value));
            }
            tag => {
                let scope = self.scope();
                let result = match self.open.last_mut() {
                    Some(OpenScope::Value(value)) => value.assign(tag, &tag_line.data),
                    Some(OpenScope::Form(form)) => form.assign(tag, &tag_line.data),
                    None => self.sign.assign(tag, &tag_line.data),
                };
                result.map_err(|rejection| self.rejected(rejection, scope, line, tag))?;
            }
        }
        Ok(())
    }

    fn missing_data(&self, tag_line: &TagLine) -> ParseError {
        self.error(ErrorKind::MissingData {
            tag: tag_line.tag,
            line: tag_line.number,
        })
    }

    fn rejected(
        &self,
        rejection: Rejection,
        scope: ScopeKind,
        line: &SourceLine,
        tag: Tag,
    ) -> ParseError {
        let kind = match rejection {
            Rejection::Duplicate(field) => ErrorKind::DuplicateField {
                field,
                scope,
                line: line.number,
                content: line.text.clone(),
            },
            Rejection::NotInScope => ErrorKind::UnexpectedTagInScope {
                tag,
                scope,
                line: line.number,
                content: line.text.clone(),
            },
        };
        self.error(kind)
    }

    /// Close an open value and attach it to the form or sign below it.
    fn close_value(&mut self) {
        if !matches!(self.open.last(), Some(OpenScope::Value(_))) {
            return;
        }
        if let Some(OpenScope::Value(value)) = self.open.pop() {
            let value = value.finish();
            match self.open.last_mut() {
                Some(OpenScope::Form(form)) => form.add_value(value),
                _ => self.sign.add_value(value),
            }
        }
    }

    /// Close an open form (and any value inside it) and attach it to the sign.
    fn close_form(&mut self) {
        self.close_value();
        if let Some(OpenScope::Form(form)) = self.open.pop() {
            self.sign.add_form(form.finish());
        }
    }

    fn finish(mut self) -> Sign {
        self.close_form();
        self.sign.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ogsl::ast::Field;
    use crate::ogsl::testing::sign_block;

    fn build(source: &str) -> Result<BuildOutcome, ParseError> {
        build_sign(&sign_block(source))
    }

    fn built(source: &str) -> Sign {
        match build(source) {
            Ok(BuildOutcome::Built(sign)) => sign,
            other => panic!("expected a sign, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_sign() {
        let sign = built("@sign AN\n@ucun 𒀭\n@v an\n@v dingir\n@end sign\n");
        assert_eq!(sign.name, "AN");
        assert!(!sign.is_deprecated);
        assert_eq!(sign.unicode_cuneiform(), Some("𒀭"));
        let texts: Vec<_> = sign.values.iter().map(|v| v.text.as_str()).collect();
        assert_eq!(texts, vec!["an", "dingir"]);
        assert!(sign.forms.is_empty());
    }

    #[test]
    fn test_deprecated_sign() {
        let sign = built("@sign- DIŠ@t\n@v aš\n@end sign\n");
        assert!(sign.is_deprecated);
        assert_eq!(sign.name, "DIŠ@t");
    }

    #[test]
    fn test_notes_after_value_attach_to_value() {
        let sign = built("@sign A\n@note sign note\n@v a\n@note value note\n@ref r\n@end sign\n");
        assert_eq!(sign.metadata.notes, vec!["sign note"]);
        assert_eq!(sign.values[0].notes, vec!["value note"]);
        assert_eq!(sign.values[0].reference.as_deref(), Some("r"));
    }

    #[test]
    fn test_forms_own_following_lines() {
        let sign = built(
            "@sign A\n@ucun 𒀀\n@v a\n@form ~a |A.A|\n@ucun 𒀀𒀀\n@note form note\n@v aya\n@lit value lit\n@form ~b\n@v e\n@end sign\n",
        );
        assert_eq!(sign.values.len(), 1);
        assert_eq!(sign.forms.len(), 2);

        let first = &sign.forms[0];
        assert_eq!(first.variant_code, "~a");
        assert!(first.is_compound());
        assert_eq!(first.unicode_cuneiform(), Some("𒀀𒀀"));
        assert_eq!(first.metadata.notes, vec!["form note"]);
        assert_eq!(first.values[0].text, "aya");
        assert_eq!(first.values[0].literature, vec!["value lit"]);

        assert_eq!(sign.forms[1].variant_code, "~b");
        assert_eq!(sign.forms[1].values[0].text, "e");
        assert_eq!(sign.unicode_cuneiform(), Some("𒀀"));
    }

    #[test]
    fn test_form_may_repeat_sign_level_fields() {
        let sign = built("@sign A\n@ucun 𒀀\n@form ~a\n@ucun 𒀀𒀀\n@end sign\n");
        assert_eq!(sign.forms[0].unicode_cuneiform(), Some("𒀀𒀀"));
    }

    #[test]
    fn test_duplicate_field_in_sign() {
        let err = build("@sign AN\n@ucun 𒀭\n@ucun 𒀭\n@end sign\n").unwrap_err();
        assert_eq!(err.sign.as_deref(), Some("AN"));
        assert_eq!(err.block_start, 1);
        assert_eq!(
            err.kind,
            ErrorKind::DuplicateField {
                field: Field::UnicodeCuneiform,
                scope: ScopeKind::Sign,
                line: 3,
                content: "@ucun 𒀭".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_reference_in_value() {
        let err = build("@sign A\n@v a\n@ref one\n@ref two\n@end sign\n").unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::DuplicateField {
                field: Field::Reference,
                scope: ScopeKind::Value,
                line: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_references_repeat_outside_values() {
        let sign = built("@sign A\n@ref one\n@ref two\n@end sign\n");
        assert_eq!(sign.metadata.references, vec!["one", "two"]);
    }

    #[test]
    fn test_unicode_tag_inside_value_is_rejected() {
        let err = build("@sign A\n@v a\n@ucun 𒀀\n@end sign\n").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::UnexpectedTagInScope {
                tag: Tag::UnicodeCuneiform,
                scope: ScopeKind::Value,
                line: 3,
                content: "@ucun 𒀀".to_string(),
            }
        );
    }

    #[test]
    fn test_fake_discards_sign() {
        assert_eq!(
            build("@sign X\n@fake 1\n@v x\n@end sign\n").unwrap(),
            BuildOutcome::Discarded
        );
        assert_eq!(
            build("@sign X\n@ucun 𒀀\n@v x\n@fake 1\n@end sign\n").unwrap(),
            BuildOutcome::Discarded
        );
    }

    #[test]
    fn test_fake_stops_before_later_errors() {
        let outcome = build("@sign X\n@fake 1\n@ucun a\n@ucun b\n@end sign\n").unwrap();
        assert_eq!(outcome, BuildOutcome::Discarded);
    }

    #[test]
    fn test_fake_wins_over_earlier_errors() {
        let outcome = build("@sign X\n@ucun a\n@ucun b\n@fake 1\n@end sign\n").unwrap();
        assert_eq!(outcome, BuildOutcome::Discarded);
        let outcome = build("@sign X\n@v a\n@ucun 1\n@fake 1\n@end sign\n").unwrap();
        assert_eq!(outcome, BuildOutcome::Discarded);
    }

    #[test]
    fn test_fake_inside_form_is_rejected() {
        let err = build("@sign X\n@form ~a\n@fake 1\n@end sign\n").unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::UnexpectedTagInScope {
                tag: Tag::Fake,
                scope: ScopeKind::Form,
                ..
            }
        ));
    }

    #[test]
    fn test_inner_end_line_is_rejected() {
        let err = build("@sign X\n@end form\n@end sign\n").unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::UnexpectedTagInScope { tag: Tag::End, .. }
        ));
    }

    #[test]
    fn test_unrecognized_tag() {
        let err = build("@sign X\n@bogus 1\n@end sign\n").unwrap_err();
        assert!(err.is_fatal_to_parse());
        assert_eq!(err.sign.as_deref(), Some("X"));
    }

    #[test]
    fn test_missing_data() {
        let err = build("@sign X\n@form\n@end sign\n").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::MissingData {
                tag: Tag::Form,
                line: 2,
            }
        );
        let err = build("@sign X\n@v-\n@end sign\n").unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::MissingData {
                tag: Tag::ValueDeprecated,
                ..
            }
        ));
    }

    #[test]
    fn test_separator_is_ignored() {
        let sign = built("@sign A\n@form ~a\n@v a\n@@\n@note still the value\n@end sign\n");
        assert_eq!(sign.forms[0].values[0].notes, vec!["still the value"]);
    }

    #[test]
    fn test_value_flags() {
        let sign = built("@sign A\n@v du?\n@v- du?\n@end sign\n");
        assert_eq!(sign.values[0].text, "du");
        assert!(sign.values[0].is_questionable);
        assert!(!sign.values[0].is_deprecated);
        assert_eq!(sign.values[1].text, "du");
        assert!(sign.values[1].is_deprecated);
    }

    #[test]
    fn test_value_deprecation_is_independent_of_sign() {
        let sign = built("@sign- A\n@v a\n@end sign\n");
        assert!(sign.is_deprecated);
        assert!(!sign.values[0].is_deprecated);
    }
}
