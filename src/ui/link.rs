use std::fmt;

/// A labelled link, shown as `label <href>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label == self.href {
            return write!(f, "<{}>", self.href);
        }
        write!(f, "{} <{}>", self.label, self.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let link = Link::new("Sign In", "/login");
        assert_eq!(link.to_string(), "Sign In </login>");

        let bare = Link::new("https://ajimemo.com", "https://ajimemo.com");
        assert_eq!(bare.to_string(), "<https://ajimemo.com>");
    }
}
