use std::{fmt, str::FromStr};

/// Role picked on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Merchant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Merchant => "merchant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    // Radio values are matched exactly, the way the browser submits them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "merchant" => Ok(Role::Merchant),
            other => Err(format!("{other} is not a known role.")),
        }
    }
}

/// What the `role` radio group held at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleSelection {
    #[default]
    NoneSelected,
    Known(Role),
    Unrecognized(String),
}

impl RoleSelection {
    /// Builds a selection from the raw `role` field, if the form carried one.
    ///
    /// An empty value counts as nothing selected.
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Self::NoneSelected,
            Some(raw) => match raw.parse::<Role>() {
                Ok(role) => Self::Known(role),
                Err(_) => Self::Unrecognized(raw.to_string()),
            },
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::NoneSelected)
    }
}

impl From<Option<String>> for RoleSelection {
    fn from(value: Option<String>) -> Self {
        Self::from_field(value.as_deref())
    }
}

impl<'de> serde::Deserialize<'de> for RoleSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value =
            <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(value.into())
    }
}
