use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One casualty entry as read from a record page.
///
/// Every optional field is either a trimmed, non-empty string or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub url: String,
    pub name: String,
    pub rank: Option<String>,
    pub service_no: Option<String>,
    pub date_of_death: Option<String>,
    pub age: Option<String>,
    pub grave_reference: Option<String>,
    pub additional_information: Option<String>,
    pub service: Option<String>,
    pub unit: Option<String>,
    pub cemetery: Cemetery,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cemetery {
    pub name: Option<String>,
    pub url: Option<String>,
    pub country: Option<String>,
    pub locality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDetails {
    pub service: Option<String>,
    pub unit: Option<String>,
}

impl Record {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Assign a labelled field by its normalized key (`service_no`, ...).
    /// Returns false when the key names no labelled field.
    pub fn assign(&mut self, key: &str, value: Option<String>) -> bool {
        let slot = match key {
            "rank" => &mut self.rank,
            "service_no" => &mut self.service_no,
            "date_of_death" => &mut self.date_of_death,
            "age" => &mut self.age,
            "grave_reference" => &mut self.grave_reference,
            _ => return false,
        };
        *slot = value;
        true
    }

    pub fn set_service(&mut self, details: ServiceDetails) {
        self.service = details.service;
        self.unit = details.unit;
    }

    /// `date_of_death` as a calendar date. The registry writes `dd/mm/yyyy`.
    pub fn death_date(&self) -> Option<NaiveDate> {
        let raw = self.date_of_death.as_deref()?;
        NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()
    }

    pub fn age_years(&self) -> Option<u32> {
        self.age.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_known_and_unknown_keys() {
        let mut record = Record::new("http://www.cwgc.org/x", "SMITH, JOHN");
        assert!(record.assign("service_no", Some("9389".to_string())));
        assert!(record.assign("grave_reference", None));
        assert!(!record.assign("cemetery", Some("nope".to_string())));

        assert_eq!(record.service_no.as_deref(), Some("9389"));
        assert_eq!(record.grave_reference, None);
    }

    #[test]
    fn test_typed_accessors() {
        let mut record = Record::new("u", "n");
        record.date_of_death = Some("23/04/1917".to_string());
        record.age = Some("24".to_string());
        assert_eq!(record.death_date(), NaiveDate::from_ymd_opt(1917, 4, 23));
        assert_eq!(record.age_years(), Some(24));

        record.date_of_death = Some("Between 01/07/1916 and 03/07/1916".to_string());
        record.age = Some("about 19".to_string());
        assert_eq!(record.death_date(), None);
        assert_eq!(record.age_years(), None);
    }

    #[test]
    fn test_serializes_missing_fields_as_null() {
        let record = Record::new("http://www.cwgc.org/x", "SMITH, JOHN");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "SMITH, JOHN");
        assert!(json["rank"].is_null());
        assert!(json["unit"].is_null());
        assert!(json["cemetery"]["country"].is_null());
    }
}
