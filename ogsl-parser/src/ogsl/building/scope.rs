//! Scope builders and per-scope dispatch tables

use crate::ogsl::ast::{Field, Form, Metadata, Sign, Value};
use crate::ogsl::token::Tag;
use serde::Serialize;
use std::fmt;

/// The kind of entity a tag is interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScopeKind {
    Sign,
    Form,
    Value,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScopeKind::Sign => "sign",
            ScopeKind::Form => "form",
            ScopeKind::Value => "value",
        };
        f.write_str(name)
    }
}

/// Why a tag could not be applied to a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Duplicate(Field),
    NotInScope,
}

fn set_once(slot: &mut Option<String>, field: Field, data: &str) -> Result<(), Rejection> {
    if slot.is_some() {
        return Err(Rejection::Duplicate(field));
    }
    *slot = Some(data.to_string());
    Ok(())
}

// Repeatable fields never reject; the Result only keeps the dispatch arms uniform.
fn append(list: &mut Vec<String>, data: &str) -> Result<(), Rejection> {
    list.push(data.to_string());
    Ok(())
}

/// Dispatch table shared by the sign and form scopes.
///
/// `@umap` is only accepted at sign level.
fn assign_metadata(
    metadata: &mut Metadata,
    scope: ScopeKind,
    tag: Tag,
    data: &str,
) -> Result<(), Rejection> {
    let unicode = &mut metadata.unicode;
    match tag {
        Tag::Aka => set_once(&mut metadata.aka, Field::Aka, data),
        Tag::PName => set_once(&mut metadata.pname, Field::PName, data),
        Tag::UnicodeCuneiform => set_once(&mut unicode.cuneiform, Field::UnicodeCuneiform, data),
        Tag::UnicodeMap if scope == ScopeKind::Sign => {
            set_once(&mut unicode.map, Field::UnicodeMap, data)
        }
        Tag::UnicodeName => set_once(&mut unicode.name, Field::UnicodeName, data),
        Tag::UnicodeNote => set_once(&mut unicode.notes, Field::UnicodeNotes, data),
        Tag::UnicodeSequence => set_once(&mut unicode.sequence, Field::UnicodeSequence, data),
        Tag::UnicodeAge => set_once(&mut unicode.version, Field::UnicodeVersion, data),
        Tag::Lit => append(&mut metadata.literature, data),
        Tag::Ref => append(&mut metadata.references, data),
        Tag::Note => append(&mut metadata.notes, data),
        Tag::InternalNote => append(&mut metadata.internal_notes, data),
        Tag::SignList => append(&mut metadata.sign_lists, data),
        Tag::Sys => append(&mut metadata.system, data),
        _ => Err(Rejection::NotInScope),
    }
}

/// The sign being built. Always the bottom of the scope stack.
#[derive(Debug)]
pub struct SignBuilder {
    name: String,
    is_deprecated: bool,
    metadata: Metadata,
    forms: Vec<Form>,
    values: Vec<Value>,
}

impl SignBuilder {
    pub fn new(name: impl Into<String>, is_deprecated: bool) -> Self {
        Self {
            name: name.into(),
            is_deprecated,
            metadata: Metadata::default(),
            forms: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn assign(&mut self, tag: Tag, data: &str) -> Result<(), Rejection> {
        assign_metadata(&mut self.metadata, ScopeKind::Sign, tag, data)
    }

    pub fn add_form(&mut self, form: Form) {
        self.forms.push(form);
    }

    pub fn add_value(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn finish(self) -> Sign {
        Sign {
            name: self.name,
            is_deprecated: self.is_deprecated,
            metadata: self.metadata,
            forms: self.forms,
            values: self.values,
        }
    }
}

#[derive(Debug)]
pub struct FormBuilder {
    variant_code: String,
    name: Option<String>,
    metadata: Metadata,
    values: Vec<Value>,
}

impl FormBuilder {
    /// Start a form from the data of a `@form` line: a variant code, then an optional name.
    ///
    /// Returns `None` when there is no variant code.
    pub fn from_data(data: &str) -> Option<Self> {
        let data = data.trim();
        let (variant_code, name) = data.split_once(' ').unwrap_or((data, ""));
        if variant_code.is_empty() {
            return None;
        }
        let name = name.trim();
        Some(Self {
            variant_code: variant_code.to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
            metadata: Metadata::default(),
            values: Vec::new(),
        })
    }

    pub fn assign(&mut self, tag: Tag, data: &str) -> Result<(), Rejection> {
        assign_metadata(&mut self.metadata, ScopeKind::Form, tag, data)
    }

    pub fn add_value(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn finish(self) -> Form {
        Form {
            variant_code: self.variant_code,
            name: self.name,
            metadata: self.metadata,
            values: self.values,
        }
    }
}

#[derive(Debug)]
pub struct ValueBuilder {
    value: Value,
}

impl ValueBuilder {
    /// Start a value from the data of a `@v`/`@v-` line.
    ///
    /// The data is an optional `%lang` restriction followed by the reading. Returns `None` when
    /// there is no reading.
    pub fn from_data(data: &str, is_deprecated: bool) -> Option<Self> {
        let data = data.trim();
        let (language, reading) = match data.strip_prefix('%') {
            Some(rest) => {
                let (language, reading) = rest.split_once(' ')?;
                (Some(language.to_string()), reading.trim())
            }
            None => (None, data),
        };
        let mut value = Value::new(reading, is_deprecated);
        if value.text.is_empty() {
            return None;
        }
        value.language = language;
        Some(Self { value })
    }

    /// Dispatch table for the value scope.
    pub fn assign(&mut self, tag: Tag, data: &str) -> Result<(), Rejection> {
        let value = &mut self.value;
        match tag {
            Tag::Ref => set_once(&mut value.reference, Field::Reference, data),
            Tag::Lit => append(&mut value.literature, data),
            Tag::Note => append(&mut value.notes, data),
            Tag::InternalNote => append(&mut value.internal_notes, data),
            Tag::Sys => append(&mut value.system, data),
            _ => Err(Rejection::NotInScope),
        }
    }

    pub fn finish(self) -> Value {
        self.value
    }
}
