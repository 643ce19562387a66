//! Field extractors for CWGC casualty pages.
//!
//! Each extractor is a pure read of a [`RecordPage`]. Apart from [`name`],
//! which the client treats as mandatory, absence always degrades to `None`.

use crate::core::document::{attr, clean, element_string, first_descendant, next_sibling, RecordPage};
use crate::domain::model::{Cemetery, ServiceDetails};

/// Labelled fields copied onto the record under their normalized key.
pub const RECORD_FIELDS: [&str; 5] = [
    "Rank:",
    "Service No:",
    "Date of Death:",
    "Age:",
    // no trailing colon in the page markup
    "Grave Reference",
];

pub const SERVICE_LABEL: &str = "Regiment/Service:";
/// The unit row is labelled with a lone non-breaking space.
pub const UNIT_LABEL: &str = "\u{a0}";
pub const COUNTRY_LABEL: &str = "Country:";
pub const LOCALITY_LABEL: &str = "Locality:";
pub const ADDITIONAL_INFO_HEADING: &str = "Additional Information:";

const LABEL_TAG: &str = "dt";
const VALUE_TAG: &str = "dd";
const CEMETERY_BOX_CLASS: &str = "greyBox";
const READ_MORE_CLASS: &str = "readMore";

/// Value of the `dd` that follows the `dt` labelled exactly `label`.
pub fn field_value(page: &RecordPage, label: &str) -> Option<String> {
    let label_node = page.find_by_text(LABEL_TAG, label)?;
    let value_node = next_sibling(label_node, VALUE_TAG)?;
    element_string(value_node).and_then(clean)
}

/// The casualty's name from the first second-level heading.
pub fn name(page: &RecordPage) -> Option<String> {
    page.first("h2").and_then(element_string).and_then(clean)
}

pub fn additional_information(page: &RecordPage) -> Option<String> {
    let heading = page.find_by_text("h3", ADDITIONAL_INFO_HEADING)?;
    let paragraph = next_sibling(heading, "p")?;
    element_string(paragraph).and_then(clean)
}

pub fn service_details(page: &RecordPage) -> ServiceDetails {
    ServiceDetails {
        service: field_value(page, SERVICE_LABEL),
        unit: field_value(page, UNIT_LABEL),
    }
}

/// Cemetery name and link are read as a pair: if either part is missing both
/// are `None`. Country and locality are looked up on their own.
pub fn cemetery(page: &RecordPage, base_url: &str) -> Cemetery {
    let (name, url) = match cemetery_name_and_link(page) {
        Some((name, href)) => (Some(name), Some(format!("{}{}", base_url, href))),
        None => (None, None),
    };

    Cemetery {
        name,
        url,
        country: field_value(page, COUNTRY_LABEL),
        locality: field_value(page, LOCALITY_LABEL),
    }
}

fn cemetery_name_and_link(page: &RecordPage) -> Option<(String, String)> {
    let grey_box = page.find_by_class("div", CEMETERY_BOX_CLASS)?;
    let heading = first_descendant(grey_box, "h2")?;
    let name = element_string(heading).and_then(clean)?;

    let read_more = page.find_by_class("p", READ_MORE_CLASS)?;
    let link = first_descendant(read_more, "a")?;
    let href = attr(link, "href")?;

    Some((name, href.to_string()))
}

/// Turn a page label into a record key: `"Service No:"` -> `"service_no"`.
pub fn field_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_").replace(':', "")
}
