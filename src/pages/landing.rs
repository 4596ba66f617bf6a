use std::fmt;

use crate::ui::{AddressFooter, Link, LogoSize, LogoText};

/// A product feature shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Save memories",
        description: "Save memories of your conversations with Ai",
    },
    Feature {
        title: "Smart Search",
        description: "Find memories instantly with our advanced search and filtering capabilities.",
    },
    Feature {
        title: "Share memories",
        description: "Share memories with your friends and family or team",
    },
];

pub const BENEFITS: [&str; 2] = [
    "Universal access by GET request",
    "REST API with comprehensive documentation",
];

/// Marketing overview of the product.
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingPage;

impl LandingPage {
    pub fn features(&self) -> &'static [Feature] {
        &FEATURES
    }

    pub fn benefits(&self) -> &'static [&'static str] {
        &BENEFITS
    }

    pub fn calls_to_action(&self) -> [Link; 2] {
        [
            Link::new("Start Free Trial", "/register"),
            Link::new("Sign In", "/login"),
        ]
    }
}

impl fmt::Display for LandingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", LogoText::new(LogoSize::Lg))?;
        writeln!(f, "Long-term memory for your AI assistants.")?;
        writeln!(f)?;

        writeln!(f, "Features")?;
        for feature in self.features() {
            writeln!(f, "  * {}", feature.title)?;
            writeln!(f, "    {}", feature.description)?;
        }
        writeln!(f)?;

        for benefit in self.benefits() {
            writeln!(f, "  [x] {}", benefit)?;
        }
        writeln!(f)?;

        writeln!(f, "Ready to get started?")?;
        for link in self.calls_to_action() {
            writeln!(f, "  {}", link)?;
        }
        writeln!(f)?;

        write!(f, "{}", AddressFooter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_all_sections() {
        let out = LandingPage.to_string();

        assert!(out.starts_with("AJIMEMO\n"));
        for feature in FEATURES {
            assert!(out.contains(feature.title));
            assert!(out.contains(feature.description));
        }
        assert!(out.contains("[x] Universal access by GET request"));
        assert!(out.contains("Start Free Trial </register>"));
        assert!(out.contains("Sign In </login>"));
        assert!(out.contains("contact@ajimemo.com"));
    }
}
