//! Shared test fixtures: a small Person/Company/Pet model and an in-memory
//! record type implementing the evaluation traits.

use crate::{
    model::{EntityModel, FieldKind, FieldModel, ModelRegistry, NavigationMetadata},
    traits::{Record, Related},
    value::Value,
};
use std::collections::BTreeMap;

/// Registry used across module tests.
///
/// Person --Company--> Company --Employees[]--> Person, plus a to-many
/// Pets relation and an abstract-target Assets relation for planner tests.
pub(crate) fn test_registry() -> ModelRegistry {
    ModelRegistry::builder()
        .entity(
            EntityModel::new("Person")
                .with_field(FieldModel::new("Id", FieldKind::Uuid))
                .with_field(FieldModel::new("Name", FieldKind::Text))
                .with_field(FieldModel::new("Age", FieldKind::Int))
                .with_field(FieldModel::nullable("Nickname", FieldKind::Text))
                .with_field(FieldModel::nullable("Score", FieldKind::Float))
                .with_field(FieldModel::nullable("Hired", FieldKind::Timestamp))
                .with_field(FieldModel::nullable(
                    "Status",
                    FieldKind::Enum {
                        variants: vec!["Active".to_string(), "Retired".to_string()],
                    },
                ))
                .with_key("Id")
                .with_navigation(NavigationMetadata::to_one("Company", "Company").nullable())
                .with_navigation(NavigationMetadata::to_many("Pets", "Pet")),
        )
        .entity(
            EntityModel::new("Company")
                .with_field(FieldModel::new("Id", FieldKind::Uuid))
                .with_field(FieldModel::new("Name", FieldKind::Text))
                .with_key("Id")
                .with_navigation(NavigationMetadata::to_many("Employees", "Person"))
                .with_navigation(NavigationMetadata::to_one("Owner", "Person").nullable())
                .with_navigation(
                    NavigationMetadata::to_many("Assets", "Asset").abstract_target(),
                ),
        )
        .entity(
            EntityModel::new("Pet")
                .with_field(FieldModel::new("Name", FieldKind::Text))
                .with_field(FieldModel::new("Age", FieldKind::Int)),
        )
        .entity(
            EntityModel::new("Asset")
                .with_field(FieldModel::new("Id", FieldKind::Uuid))
                .with_key("Id"),
        )
        .build()
}

///
/// TestRecord
///
/// Plain map-backed record. Field and relation names are matched exactly;
/// fixtures use the declared casing from `test_registry`.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct TestRecord {
    fields: BTreeMap<String, Value>,
    ones: BTreeMap<String, Box<TestRecord>>,
    manys: BTreeMap<String, Vec<TestRecord>>,
}

impl TestRecord {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub(crate) fn with_one(mut self, name: &str, record: TestRecord) -> Self {
        self.ones.insert(name.to_string(), Box::new(record));
        self
    }

    pub(crate) fn with_many(mut self, name: &str, records: Vec<TestRecord>) -> Self {
        self.manys.insert(name.to_string(), records);
        self
    }
}

impl Record for TestRecord {
    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    fn related(&self, navigation: &str) -> Related<'_> {
        if let Some(one) = self.ones.get(navigation) {
            return Related::One(one.as_ref());
        }
        if let Some(many) = self.manys.get(navigation) {
            return Related::Many(many.iter().map(|r| r as &dyn Record).collect());
        }

        Related::None
    }
}

pub(crate) fn person(name: &str, age: i64) -> TestRecord {
    TestRecord::new()
        .with_field("Name", name)
        .with_field("Age", age)
}

pub(crate) fn company(name: &str) -> TestRecord {
    TestRecord::new().with_field("Name", name)
}

pub(crate) fn pet(name: &str, age: i64) -> TestRecord {
    TestRecord::new()
        .with_field("Name", name)
        .with_field("Age", age)
}
