//! The personal record validated as one unit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::field::RecordField;
use crate::value::FieldValue;

/// One subject's nine field values.
///
/// Records are immutable once built. Absent keys deserialize as
/// [`FieldValue::Missing`]; unknown keys are ignored. Serialization writes the
/// fields in validation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    telephone: FieldValue,
    weight: FieldValue,
    snils: FieldValue,
    passport_number: FieldValue,
    occupation: FieldValue,
    age: FieldValue,
    political_views: FieldValue,
    worldview: FieldValue,
    address: FieldValue,
}

impl Record {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Build a record from one parsed JSON element.
    ///
    /// Only objects are accepted; field values of any JSON type are kept as
    /// they are.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ModelError::NotAnObject {
                found: json_kind(&value),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The value stored for `field`.
    pub fn get(&self, field: RecordField) -> &FieldValue {
        match field {
            RecordField::Telephone => &self.telephone,
            RecordField::Weight => &self.weight,
            RecordField::Snils => &self.snils,
            RecordField::PassportNumber => &self.passport_number,
            RecordField::Occupation => &self.occupation,
            RecordField::Age => &self.age,
            RecordField::PoliticalViews => &self.political_views,
            RecordField::Worldview => &self.worldview,
            RecordField::Address => &self.address,
        }
    }

    /// Field values in validation order.
    pub fn values(&self) -> impl Iterator<Item = (RecordField, &FieldValue)> {
        RecordField::all()
            .iter()
            .map(move |&field| (field, self.get(field)))
    }

    pub fn telephone(&self) -> &FieldValue {
        &self.telephone
    }

    pub fn weight(&self) -> &FieldValue {
        &self.weight
    }

    pub fn snils(&self) -> &FieldValue {
        &self.snils
    }

    pub fn passport_number(&self) -> &FieldValue {
        &self.passport_number
    }

    pub fn occupation(&self) -> &FieldValue {
        &self.occupation
    }

    pub fn age(&self) -> &FieldValue {
        &self.age
    }

    pub fn political_views(&self) -> &FieldValue {
        &self.political_views
    }

    pub fn worldview(&self) -> &FieldValue {
        &self.worldview
    }

    pub fn address(&self) -> &FieldValue {
        &self.address
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builder for [`Record`]. Unset fields stay [`FieldValue::Missing`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    #[must_use]
    pub fn telephone(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.telephone = value.into();
        self
    }

    #[must_use]
    pub fn weight(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.weight = value.into();
        self
    }

    #[must_use]
    pub fn snils(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.snils = value.into();
        self
    }

    #[must_use]
    pub fn passport_number(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.passport_number = value.into();
        self
    }

    #[must_use]
    pub fn occupation(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.occupation = value.into();
        self
    }

    #[must_use]
    pub fn age(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.age = value.into();
        self
    }

    #[must_use]
    pub fn political_views(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.political_views = value.into();
        self
    }

    #[must_use]
    pub fn worldview(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.worldview = value.into();
        self
    }

    #[must_use]
    pub fn address(mut self, value: impl Into<FieldValue>) -> Self {
        self.record.address = value.into();
        self
    }

    /// Set any field by its [`RecordField`] tag.
    #[must_use]
    pub fn field(self, field: RecordField, value: impl Into<FieldValue>) -> Self {
        match field {
            RecordField::Telephone => self.telephone(value),
            RecordField::Weight => self.weight(value),
            RecordField::Snils => self.snils(value),
            RecordField::PassportNumber => self.passport_number(value),
            RecordField::Occupation => self.occupation(value),
            RecordField::Age => self.age(value),
            RecordField::PoliticalViews => self.political_views(value),
            RecordField::Worldview => self.worldview(value),
            RecordField::Address => self.address(value),
        }
    }

    pub fn build(self) -> Record {
        self.record
    }
}

impl From<Record> for RecordBuilder {
    fn from(record: Record) -> Self {
        Self { record }
    }
}
