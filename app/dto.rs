use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub registered_on: Option<NaiveDate>,
    #[serde(default)]
    pub data: Option<String>,
}
impl RecordDto {
    #[cfg_attr(not(test), allow(unused))]
    pub fn new(name: &str, registered_on: NaiveDate, data: Option<&str>) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            registered_on: Some(registered_on),
            data: data.map(|d| d.to_string()),
        }
    }

    // nothing to write for a selective insert
    pub fn is_blank(&self) -> bool {
        self.name.is_none() && self.registered_on.is_none() && self.data.is_none()
    }
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            registered_on: record.registered_on,
            data: record.data,
        }
    }
}
impl From<RecordDto> for Record {
    fn from(dto: RecordDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            registered_on: dto.registered_on,
            data: dto.data,
        }
    }
}
