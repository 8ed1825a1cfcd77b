use std::fmt;

/// Path-component delimiter of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    #[default]
    Slash,
    Backslash,
}

impl Separator {
    /// Picks `\` only when it appears strictly before the first `/`.
    ///
    /// ```
    /// use pathrex_match::Separator;
    ///
    /// assert_eq!(Separator::detect("/users/:id"), Separator::Slash);
    /// assert_eq!(Separator::detect(r"C:\users\:id"), Separator::Backslash);
    /// assert_eq!(Separator::detect(""), Separator::Slash);
    /// ```
    pub fn detect(template: &str) -> Self {
        match (template.find('/'), template.find('\\')) {
            (Some(slash), Some(backslash)) if backslash < slash => Separator::Backslash,
            (None, Some(_)) => Separator::Backslash,
            _ => Separator::Slash,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Backslash => '\\',
        }
    }

    /// The separator as it must appear in regex source.
    pub fn escaped(self) -> &'static str {
        match self {
            Separator::Slash => "/",
            Separator::Backslash => r"\\",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
