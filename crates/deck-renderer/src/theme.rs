//! Built-in deck themes.
//!
//! A theme is a name plus an embedded stylesheet applied to the rendered
//! deck. Theme selection happens twice: at construction time from
//! [`RendererOptions::theme`](crate::RendererOptions), where an unknown
//! name is an error, and per document from front matter, where an unknown
//! name is ignored with a warning.

const CSS_DEFAULT: &str = r".deck section.slide {
  width: 1280px;
  height: 720px;
  padding: 70px;
  box-sizing: border-box;
  overflow: hidden;
  background: #fff;
  color: #202228;
  font-size: 28px;
  font-family: ui-sans-serif, system-ui, sans-serif;
}
.deck section.slide code {
  font-family: ui-monospace, monospace;
  background: #f3f4f6;
}
.deck section.slide[data-page]::after {
  content: attr(data-page);
  position: absolute;
  bottom: 21px;
  right: 30px;
  font-size: 24px;
}
";

const CSS_GAIA: &str = r".deck section.slide {
  width: 1280px;
  height: 720px;
  padding: 70px;
  box-sizing: border-box;
  overflow: hidden;
  background: #fff8e1;
  color: #455a64;
  font-size: 28px;
  font-family: ui-sans-serif, system-ui, sans-serif;
}
.deck section.slide h1,
.deck section.slide h2 {
  color: #0288d1;
}
.deck section.slide code {
  font-family: ui-monospace, monospace;
  background: rgb(69 90 100 / 10%);
}
.deck section.slide[data-page]::after {
  content: attr(data-page);
  position: absolute;
  bottom: 21px;
  right: 30px;
  font-size: 24px;
}
";

const CSS_UNCOVER: &str = r".deck section.slide {
  width: 1280px;
  height: 720px;
  padding: 70px;
  box-sizing: border-box;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  justify-content: center;
  background: #fdfcff;
  color: #202228;
  font-size: 30px;
  font-family: ui-sans-serif, system-ui, sans-serif;
  text-align: center;
}
.deck section.slide code {
  font-family: ui-monospace, monospace;
  background: #eceff4;
}
.deck section.slide[data-page]::after {
  content: attr(data-page);
  position: absolute;
  bottom: 21px;
  right: 30px;
  font-size: 24px;
}
";

/// Built-in deck theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Plain light theme.
    #[default]
    Default,
    /// Warm high-contrast theme.
    Gaia,
    /// Centered minimal theme.
    Uncover,
}

impl Theme {
    /// Look up a theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "gaia" => Some(Self::Gaia),
            "uncover" => Some(Self::Uncover),
            _ => None,
        }
    }

    /// Canonical theme name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Gaia => "gaia",
            Self::Uncover => "uncover",
        }
    }

    /// Stylesheet for this theme.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => CSS_DEFAULT,
            Self::Gaia => CSS_GAIA,
            Self::Uncover => CSS_UNCOVER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        assert_eq!(Theme::from_name("default"), Some(Theme::Default));
        assert_eq!(Theme::from_name("gaia"), Some(Theme::Gaia));
        assert_eq!(Theme::from_name("uncover"), Some(Theme::Uncover));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Theme::from_name("solarized"), None);
        assert_eq!(Theme::from_name(""), None);
        assert_eq!(Theme::from_name("Default"), None);
    }

    #[test]
    fn test_name_round_trip() {
        for theme in [Theme::Default, Theme::Gaia, Theme::Uncover] {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
    }

    #[test]
    fn test_css_nonempty() {
        for theme in [Theme::Default, Theme::Gaia, Theme::Uncover] {
            assert!(theme.css().contains("section.slide"));
        }
    }
}
