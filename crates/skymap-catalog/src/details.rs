//! Display-ready text for a constellation's detail panel.

use serde::Serialize;

use crate::schema::InfoFeature;

const UNKNOWN_NAME: &str = "Unknown Constellation";
const NOT_AVAILABLE: &str = "N/A";
const NO_DESCRIPTION: &str = "No description available.";

/// Text fields shown when a constellation is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstellationDetails {
    /// Name, with the designation in parentheses when present.
    pub title: String,
    /// English name, if any.
    pub english_name: Option<String>,
    pub rank: String,
    /// `info` text, falling back to the Latin name.
    pub description: String,
    /// Center right ascension with two decimals, in degrees.
    pub center_ra: String,
    /// Center declination with two decimals, in degrees.
    pub center_dec: String,
}

impl ConstellationDetails {
    /// Fill every field from `info`, substituting placeholders for missing
    /// or empty values.
    #[must_use]
    pub fn from_info(info: &InfoFeature) -> Self {
        let props = &info.properties;
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);

        let name = present(&props.name).unwrap_or_else(|| UNKNOWN_NAME.to_owned());
        let title = match present(&props.desig) {
            Some(desig) => format!("{name} ({desig})"),
            None => name,
        };

        let (center_ra, center_dec) = match info.center {
            Some(c) => (format!("{:.2}", c.ra_deg), format!("{:.2}", c.dec_deg)),
            None => (NOT_AVAILABLE.to_owned(), NOT_AVAILABLE.to_owned()),
        };

        Self {
            title,
            english_name: present(&props.en),
            rank: present(&props.rank).unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            description: present(&props.info)
                .or_else(|| present(&props.la))
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
            center_ra,
            center_dec,
        }
    }

    /// Single-line coordinate summary, e.g. `RA: 83.82° / Dec: -5.39°`.
    #[must_use]
    pub fn coordinates_line(&self) -> String {
        format!("RA: {}° / Dec: {}°", self.center_ra, self.center_dec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConstellationId, InfoProperties};
    use skymap_coords::SkyCoord;

    fn feature(properties: InfoProperties, center: Option<SkyCoord>) -> InfoFeature {
        InfoFeature {
            id: ConstellationId::new("Ori"),
            properties,
            center,
        }
    }

    #[test]
    fn test_full_details() {
        let details = ConstellationDetails::from_info(&feature(
            InfoProperties {
                name: Some("Orion".into()),
                desig: Some("Ori".into()),
                en: Some("Hunter".into()),
                rank: Some("26".into()),
                info: Some("A prominent winter constellation.".into()),
                la: Some("Orion".into()),
                ..InfoProperties::default()
            },
            SkyCoord::new(83.8219, -5.3912),
        ));
        assert_eq!(details.title, "Orion (Ori)");
        assert_eq!(details.english_name.as_deref(), Some("Hunter"));
        assert_eq!(details.rank, "26");
        assert_eq!(details.description, "A prominent winter constellation.");
        assert_eq!(details.coordinates_line(), "RA: 83.82° / Dec: -5.39°");
    }

    #[test]
    fn test_placeholders_for_missing_fields() {
        let details = ConstellationDetails::from_info(&feature(InfoProperties::default(), None));
        assert_eq!(details.title, "Unknown Constellation");
        assert_eq!(details.english_name, None);
        assert_eq!(details.rank, "N/A");
        assert_eq!(details.description, "No description available.");
        assert_eq!(details.center_ra, "N/A");
        assert_eq!(details.center_dec, "N/A");
    }

    #[test]
    fn test_description_falls_back_to_latin_name() {
        let details = ConstellationDetails::from_info(&feature(
            InfoProperties {
                name: Some("Lyra".into()),
                desig: Some(String::new()),
                info: Some(String::new()),
                la: Some("Lyra".into()),
                ..InfoProperties::default()
            },
            None,
        ));
        assert_eq!(details.title, "Lyra");
        assert_eq!(details.description, "Lyra");
    }
}
