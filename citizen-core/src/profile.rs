use serde::{Deserialize, Serialize};

/// The signed-in citizen shown in the header and sidebar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub points: u32,
    pub rank: u32,
    pub reports_this_month: u32,
    #[serde(default)]
    pub streak: u32,
}

impl UserProfile {
    /// Avatar initials: first letter of up to two name parts.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Success,
    Info,
    Achievement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub kind: NotificationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_name_parts() {
        let profile = UserProfile {
            name: String::from("Priya Sharma"),
            ..UserProfile::default()
        };
        assert_eq!(profile.initials(), "PS");

        let triple = UserProfile {
            name: String::from("Anita Devi Sharma"),
            ..UserProfile::default()
        };
        assert_eq!(triple.initials(), "AD");
    }

    #[test]
    fn initials_handle_single_and_empty_names() {
        let single = UserProfile {
            name: String::from("priya"),
            ..UserProfile::default()
        };
        assert_eq!(single.initials(), "P");

        assert_eq!(UserProfile::default().initials(), "");
    }
}
