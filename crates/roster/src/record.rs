//! Raw employee records as delivered by the roster feed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::building::{Building, normalize_zone};

/// Company name used when a record carries none.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Display name used when neither name field is filled in.
pub const MISSING_NAME: &str = "—";

/// One raw employee record.
///
/// Every field is optional. Empty strings are treated the same as missing
/// values by the accessors below.
///
/// Decoding never fails: unknown shapes degrade to absent fields, and a
/// non-object value decodes to a record with no fields at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "JsonValue")]
pub struct EmployeeRecord {
    #[serde(rename = "CompanyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(rename = "zone", skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(rename = "ObjectName1", skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "EmployeeID", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(rename = "CardNumber", skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(rename = "PersonnelType", skip_serializing_if = "Option::is_none")]
    pub personnel_type: Option<String>,
    #[serde(rename = "PrimaryLocation", skip_serializing_if = "Option::is_none")]
    pub primary_location: Option<String>,
}

impl EmployeeRecord {
    pub fn from_value(value: &JsonValue) -> Self {
        match value {
            JsonValue::Object(obj) => Self {
                company_name: text_field(obj, "CompanyName"),
                zone: text_field(obj, "zone"),
                object_name: text_field(obj, "ObjectName1"),
                name: text_field(obj, "Name"),
                employee_id: text_field(obj, "EmployeeID"),
                card_number: text_field(obj, "CardNumber"),
                personnel_type: text_field(obj, "PersonnelType"),
                primary_location: text_field(obj, "PrimaryLocation"),
            },
            _ => Self::default(),
        }
    }

    pub fn company_name(&self) -> &str {
        non_empty(&self.company_name).unwrap_or(UNKNOWN_COMPANY)
    }

    /// `ObjectName1`, then `Name`, then the placeholder.
    pub fn display_name(&self) -> &str {
        non_empty(&self.object_name)
            .or_else(|| non_empty(&self.name))
            .unwrap_or(MISSING_NAME)
    }

    pub fn zone(&self) -> &str {
        non_empty(&self.zone).unwrap_or_default()
    }

    pub fn employee_id(&self) -> &str {
        non_empty(&self.employee_id).unwrap_or_default()
    }

    pub fn card_number(&self) -> &str {
        non_empty(&self.card_number).unwrap_or_default()
    }

    pub fn personnel_type(&self) -> &str {
        non_empty(&self.personnel_type).unwrap_or_default()
    }

    pub fn primary_location(&self) -> Option<&str> {
        non_empty(&self.primary_location)
    }

    /// Building this record is counted toward, if any.
    pub fn building(&self) -> Option<Building> {
        normalize_zone(self.zone.as_deref())
    }
}

impl From<JsonValue> for EmployeeRecord {
    fn from(value: JsonValue) -> Self {
        Self::from_value(&value)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Strings pass through, numbers and `true` are rendered; `false` and
/// anything else count as absent.
fn text_field(obj: &Map<String, JsonValue>, key: &str) -> Option<String> {
    match obj.get(key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}
