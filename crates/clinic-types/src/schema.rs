//! Declarative field tables.
//!
//! Every record type carries an explicit table of [`FieldSpec`] rows mapping
//! its internal field name to the key used on the wire. Validation and fake
//! data generation both walk these tables instead of inspecting the structs.

/// The declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required text.
    Text,
    /// Required integer (`i64`).
    Integer,
    /// Required list of validated sub-records. The list may be empty.
    Records {
        /// Name of the nested record type.
        record: &'static str,
        /// Field table of the nested record type.
        fields: &'static [FieldSpec],
    },
    /// Required list of any-shaped key/value records. No inner checks.
    Dynamic,
}

impl FieldKind {
    /// Builds a [`FieldKind::Records`] for the given schema type.
    pub const fn records_of<S: Schema>() -> Self {
        Self::Records {
            record: S::NAME,
            fields: S::FIELDS,
        }
    }

    /// Returns the flat tag for this kind.
    pub fn tag(&self) -> KindTag {
        match self {
            Self::Text => KindTag::Text,
            Self::Integer => KindTag::Integer,
            Self::Records { .. } => KindTag::Records,
            Self::Dynamic => KindTag::Dynamic,
        }
    }

    /// Human-readable description used in error reports.
    pub fn label(&self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Records { record, .. } => format!("list of {}", record),
            Self::Dynamic => "list of objects".to_string(),
        }
    }
}

/// Flat discriminant of a [`FieldKind`], without nested schema data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    /// See [`FieldKind::Text`].
    Text,
    /// See [`FieldKind::Integer`].
    Integer,
    /// See [`FieldKind::Records`].
    Records,
    /// See [`FieldKind::Dynamic`].
    Dynamic,
}

impl std::fmt::Display for KindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Records => "records",
            Self::Dynamic => "dynamic",
        };
        f.write_str(s)
    }
}

/// One row of a record's field table.
///
/// # Examples
///
/// ```
/// use clinic_types::{FieldKind, FieldSpec};
///
/// let id = FieldSpec::aliased("customer_id", "customerId", FieldKind::Integer);
/// assert!(id.has_alias());
/// assert!(id.matches("customerId"));
/// assert!(id.matches("customer_id"));
///
/// let name = FieldSpec::new("name", FieldKind::Text);
/// assert_eq!(name.wire_name, "name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Internal (Rust) field name.
    pub name: &'static str,
    /// Key used when serializing. Equal to `name` when no alias is declared.
    pub wire_name: &'static str,
    /// Declared type.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A field whose wire key is its internal name.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name: name,
            kind,
        }
    }

    /// A field serialized under a different key.
    pub const fn aliased(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name,
            kind,
        }
    }

    /// Returns true if the wire key differs from the internal name.
    pub fn has_alias(&self) -> bool {
        self.name != self.wire_name
    }

    /// Returns true if `key` is either the internal name or the wire key.
    pub fn matches(&self, key: &str) -> bool {
        key == self.wire_name || key == self.name
    }
}

/// A record type described by a field table.
pub trait Schema {
    /// Record type name, used in error reports.
    const NAME: &'static str;

    /// The record's fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Looks up a field by internal name or wire key.
    fn field(key: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.matches(key))
    }
}
