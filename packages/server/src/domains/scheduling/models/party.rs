use serde::{Deserialize, Serialize};

/// A person affected by a visit - either the client receiving care or the
/// caregiver delivering it. Both collections share this shape.
///
/// Contact fields are optional: a missing phone or email means that channel
/// cannot reach this person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl Party {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Single-line mailing address, or None when no street address is on file
    pub fn full_address(&self) -> Option<String> {
        let street = self.address.as_deref()?;

        let mut parts = vec![street.to_string()];
        if let Some(city) = self.city.as_deref() {
            parts.push(city.to_string());
        }
        match (self.state.as_deref(), self.zip.as_deref()) {
            (Some(state), Some(zip)) => parts.push(format!("{} {}", state, zip)),
            (Some(state), None) => parts.push(state.to_string()),
            (None, Some(zip)) => parts.push(zip.to_string()),
            (None, None) => {}
        }

        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(address: Option<&str>, city: Option<&str>, state: Option<&str>, zip: Option<&str>) -> Party {
        Party {
            id: "p-1".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Alvarez".to_string(),
            phone: None,
            email: None,
            address: address.map(String::from),
            city: city.map(String::from),
            state: state.map(String::from),
            zip: zip.map(String::from),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let p = party(None, None, None, None);
        assert_eq!(p.full_name(), "Maria Alvarez");
    }

    #[test]
    fn full_address_requires_a_street() {
        let p = party(None, Some("Saint Paul"), Some("MN"), Some("55104"));
        assert_eq!(p.full_address(), None);
    }

    #[test]
    fn full_address_joins_available_parts() {
        let p = party(Some("425 Lakewood Ave"), Some("Saint Paul"), Some("MN"), Some("55104"));
        assert_eq!(
            p.full_address().as_deref(),
            Some("425 Lakewood Ave, Saint Paul, MN 55104")
        );

        let no_zip = party(Some("425 Lakewood Ave"), Some("Saint Paul"), Some("MN"), None);
        assert_eq!(
            no_zip.full_address().as_deref(),
            Some("425 Lakewood Ave, Saint Paul, MN")
        );
    }
}
