use thirtyfour::By;

/// Represents ways to locate one element on the page.
///
/// Each UI target carries exactly one strategy, decided at definition time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Select by stable element id
    Id(String),
    /// Select by absolute or relative XPath
    XPath(String),
    /// Select by form-field name attribute
    Name(String),
}

impl Selector {
    /// Concrete WebDriver locator for this selector.
    pub fn by(&self) -> By {
        match self {
            Selector::Id(id) => By::Id(id.as_str()),
            Selector::XPath(path) => By::XPath(path.as_str()),
            Selector::Name(name) => By::Name(name.as_str()),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "id:{id}"),
            Selector::XPath(path) => write!(f, "xpath:{path}"),
            Selector::Name(name) => write!(f, "name:{name}"),
        }
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        match s {
            _ if s.starts_with("id:") => Selector::Id(s[3..].to_string()),
            _ if s.starts_with("name:") => Selector::Name(s[5..].to_string()),
            _ if s.starts_with('#') => Selector::Id(s[1..].to_string()),
            // XPath expressions start with '/' (absolute) or "//" (anywhere)
            _ => Selector::XPath(s.to_string()),
        }
    }
}
