use thiserror::Error;

/// Emergency categories with their national helpline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyCategory {
    Fire,
    Accident,
    Flood,
    Crime,
}

impl EmergencyCategory {
    pub const ALL: [Self; 4] = [Self::Fire, Self::Accident, Self::Flood, Self::Crime];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Accident => "accident",
            Self::Flood => "flood",
            Self::Crime => "crime",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fire => "Fire Emergency",
            Self::Accident => "Traffic Accident",
            Self::Flood => "Flood/Water Emergency",
            Self::Crime => "Crime/Safety Issue",
        }
    }

    #[must_use]
    pub const fn helpline(self) -> &'static str {
        match self {
            Self::Fire => "101",
            Self::Accident => "102",
            Self::Flood => "103",
            Self::Crime => "100",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Fire => "🔥",
            Self::Accident => "🚗",
            Self::Flood => "🌊",
            Self::Crime => "🛡️",
        }
    }
}

/// One-tap dial entry shown next to the alert button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickContact {
    pub name: &'static str,
    pub number: &'static str,
}

pub const QUICK_CONTACTS: [QuickContact; 4] = [
    QuickContact {
        name: "Police",
        number: "100",
    },
    QuickContact {
        name: "Fire Brigade",
        number: "101",
    },
    QuickContact {
        name: "Ambulance",
        number: "102",
    },
    QuickContact {
        name: "Disaster Management",
        number: "103",
    },
];

/// The instant alert only needs a category; location is attached
/// automatically once the simulated fetch resolves.
#[must_use]
pub const fn instant_alert_ready(category: Option<EmergencyCategory>) -> bool {
    category.is_some()
}

/// Manual emergency report form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertDraft {
    pub category: Option<EmergencyCategory>,
    pub location: String,
    pub description: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("Please select an emergency category")]
    MissingCategory,
    #[error("Please provide the emergency location")]
    MissingLocation,
    #[error("Please describe the emergency")]
    MissingDescription,
}

impl AlertDraft {
    /// Validate the manual report, returning the first missing field.
    ///
    /// # Errors
    /// Returns an [`AlertError`] for the field the user still has to fill.
    pub fn validate(&self) -> Result<EmergencyCategory, AlertError> {
        let category = self.category.ok_or(AlertError::MissingCategory)?;
        if self.location.trim().is_empty() {
            return Err(AlertError::MissingLocation);
        }
        if self.description.trim().is_empty() {
            return Err(AlertError::MissingDescription);
        }
        Ok(category)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helplines_match_national_numbers() {
        assert_eq!(EmergencyCategory::Fire.helpline(), "101");
        assert_eq!(EmergencyCategory::Accident.helpline(), "102");
        assert_eq!(EmergencyCategory::Flood.helpline(), "103");
        assert_eq!(EmergencyCategory::Crime.helpline(), "100");
    }

    #[test]
    fn instant_alert_requires_a_category() {
        assert!(!instant_alert_ready(None));
        assert!(instant_alert_ready(Some(EmergencyCategory::Fire)));
    }

    #[test]
    fn manual_report_validation_orders_fields() {
        let mut draft = AlertDraft::default();
        assert_eq!(draft.validate(), Err(AlertError::MissingCategory));

        draft.category = Some(EmergencyCategory::Flood);
        assert_eq!(draft.validate(), Err(AlertError::MissingLocation));

        draft.location = String::from("MG Road, Bangalore");
        assert_eq!(draft.validate(), Err(AlertError::MissingDescription));

        draft.description = String::from("Street flooded knee-deep");
        assert_eq!(draft.validate(), Ok(EmergencyCategory::Flood));
    }

    #[test]
    fn quick_contacts_cover_all_helplines() {
        for category in EmergencyCategory::ALL {
            assert!(
                QUICK_CONTACTS
                    .iter()
                    .any(|contact| contact.number == category.helpline())
            );
        }
    }
}
