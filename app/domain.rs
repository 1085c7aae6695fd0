use chrono::NaiveDate;
use core::fmt;

pub type RecordId = i64;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub registered_on: Option<NaiveDate>,
    pub data: Option<String>,
}
impl Record {
    pub fn new(name: &str, registered_on: NaiveDate, data: Option<&str>) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            registered_on: Some(registered_on),
            data: data.map(|d| d.to_string()),
        }
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }
}
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record {{ id: {:?}, name: {:?}, registered_on: {:?}, data: {:?} }}",
            self.id, self.name, self.registered_on, self.data,
        )
    }
}
