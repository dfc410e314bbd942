//! Medical problem record tree.
//!
//! ```text
//! BaseProblems
//! └── problems: [Problem]
//!     ├── Diabetes: [Diabetes]
//!     │   ├── medications: [Medication]
//!     │   │   └── medicationsClasses: [MedicationsClass]
//!     │   │       ├── className:  [ClassNameItem]
//!     │   │       └── className2: [ClassNameItem]
//!     │   │           ├── associatedDrug:   [AssociatedDrug]
//!     │   │           └── associatedDrug#2: [AssociatedDrug]
//!     │   └── labs: [Lab]
//!     └── Asthma: [AnyRecord]
//! ```
//!
//! Every list is required but may be empty. Every leaf is required text.

use crate::{AnyRecord, FieldKind, FieldSpec, Schema};

/// A drug associated with a medication class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociatedDrug {
    /// Drug name.
    pub name: String,
    /// Dose, e.g. `"1 tab"`.
    pub dose: String,
    /// Strength, e.g. `"500 mg"`.
    pub strength: String,
}

/// Entry of the `associatedDrug#2` list. Same shape as [`AssociatedDrug`].
pub type AssociatedDrug2Item = AssociatedDrug;

impl Schema for AssociatedDrug {
    const NAME: &'static str = "AssociatedDrug";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", FieldKind::Text),
        FieldSpec::new("dose", FieldKind::Text),
        FieldSpec::new("strength", FieldKind::Text),
    ];
}

/// A class-name group holding two drug association lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassNameItem {
    /// Primary associated drugs.
    #[cfg_attr(feature = "serde", serde(rename = "associatedDrug", alias = "associated_drug"))]
    pub associated_drug: Vec<AssociatedDrug>,
    /// Secondary associated drugs.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "associatedDrug#2", alias = "associated_drug_2")
    )]
    pub associated_drug_2: Vec<AssociatedDrug2Item>,
}

/// Entry of the `className2` list. Same shape as [`ClassNameItem`].
pub type ClassName2Item = ClassNameItem;

impl Schema for ClassNameItem {
    const NAME: &'static str = "ClassNameItem";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::aliased(
            "associated_drug",
            "associatedDrug",
            FieldKind::records_of::<AssociatedDrug>(),
        ),
        FieldSpec::aliased(
            "associated_drug_2",
            "associatedDrug#2",
            FieldKind::records_of::<AssociatedDrug2Item>(),
        ),
    ];
}

/// A medication class with two class-name groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MedicationsClass {
    /// First class-name group.
    #[cfg_attr(feature = "serde", serde(rename = "className", alias = "class_name"))]
    pub class_name: Vec<ClassNameItem>,
    /// Second class-name group.
    #[cfg_attr(feature = "serde", serde(rename = "className2", alias = "class_name2"))]
    pub class_name2: Vec<ClassName2Item>,
}

impl Schema for MedicationsClass {
    const NAME: &'static str = "MedicationsClass";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::aliased(
            "class_name",
            "className",
            FieldKind::records_of::<ClassNameItem>(),
        ),
        FieldSpec::aliased(
            "class_name2",
            "className2",
            FieldKind::records_of::<ClassName2Item>(),
        ),
    ];
}

/// A medication entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Medication {
    /// Medication classes.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "medicationsClasses", alias = "medications_classes")
    )]
    pub medications_classes: Vec<MedicationsClass>,
}

impl Schema for Medication {
    const NAME: &'static str = "Medication";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::aliased(
        "medications_classes",
        "medicationsClasses",
        FieldKind::records_of::<MedicationsClass>(),
    )];
}

/// Lab result placeholder.
///
/// Only carries `missing_field`; the lab representation is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Placeholder text.
    pub missing_field: String,
}

impl Schema for Lab {
    const NAME: &'static str = "Lab";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::new("missing_field", FieldKind::Text)];
}

/// Diabetes diagnosis group.
///
/// # Examples
///
/// ```
/// use clinic_types::Diabetes;
///
/// let diabetes = Diabetes { medications: vec![], labs: vec![] };
/// assert!(diabetes.medications.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diabetes {
    /// Medications.
    pub medications: Vec<Medication>,
    /// Labs.
    pub labs: Vec<Lab>,
}

impl Schema for Diabetes {
    const NAME: &'static str = "Diabetes";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("medications", FieldKind::records_of::<Medication>()),
        FieldSpec::new("labs", FieldKind::records_of::<Lab>()),
    ];
}

/// A problem entry with its diagnosis groups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    /// Diabetes diagnoses.
    #[cfg_attr(feature = "serde", serde(rename = "Diabetes", alias = "diabetes"))]
    pub diabetes: Vec<Diabetes>,
    /// Asthma records. Arbitrary key/value shape, not validated beyond being
    /// objects.
    #[cfg_attr(feature = "serde", serde(rename = "Asthma", alias = "asthma"))]
    pub asthma: Vec<AnyRecord>,
}

impl Schema for Problem {
    const NAME: &'static str = "Problem";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::aliased("diabetes", "Diabetes", FieldKind::records_of::<Diabetes>()),
        FieldSpec::aliased("asthma", "Asthma", FieldKind::Dynamic),
    ];
}

/// Root of the problem tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseProblems {
    /// Problem entries.
    pub problems: Vec<Problem>,
}

impl Schema for BaseProblems {
    const NAME: &'static str = "BaseProblems";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::new(
        "problems",
        FieldKind::records_of::<Problem>(),
    )];
}
