use crate::domain::role::Role;

pub const CUSTOMER_PAGE: &str = "menu_customer.html";
pub const MERCHANT_PAGE: &str = "merchant_dashboard.html";

/// Relative page the browser is sent to after a role is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget(String);

impl TryFrom<String> for NavigationTarget {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let is_empty = value.trim().is_empty();
        // Browsers read `\` as `/`, so `/\host` is protocol-relative too.
        let is_off_site = value.trim_start().starts_with("//")
            || value.contains('\\')
            || has_url_scheme(&value);
        let has_control_characters = value.chars().any(char::is_control);

        if is_empty || is_off_site || has_control_characters {
            return Err(format!("{value:?} is not a valid navigation target."));
        }

        Ok(Self(value))
    }
}

// `scheme ":"` where scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ),
// checked up to the first path, query or fragment delimiter.
fn has_url_scheme(value: &str) -> bool {
    let value = value.trim_start();
    let head = value.split(['/', '?', '#']).next().unwrap_or_default();

    match head.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| {
                    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
                })
        }
        None => false,
    }
}

impl NavigationTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NavigationTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NavigationTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.try_into().map_err(serde::de::Error::custom)
    }
}

/// Fixed role to page lookup.
#[derive(Debug, Clone)]
pub struct RoleTargets {
    pub customer_page: NavigationTarget,
    pub merchant_page: NavigationTarget,
}

impl RoleTargets {
    pub fn for_role(&self, role: Role) -> &NavigationTarget {
        match role {
            Role::Customer => &self.customer_page,
            Role::Merchant => &self.merchant_page,
        }
    }
}

impl Default for RoleTargets {
    fn default() -> Self {
        Self {
            customer_page: NavigationTarget(CUSTOMER_PAGE.to_string()),
            merchant_page: NavigationTarget(MERCHANT_PAGE.to_string()),
        }
    }
}
