use std::fmt;

use super::{Link, LogoSize, LogoText};

pub const ADDRESS: &str = "Warszawa, Poland";
pub const ADDRESS_MAP_URL: &str = "https://maps.app.goo.gl/1234567890";
pub const CONTACT_EMAIL: &str = "contact@ajimemo.com";

/// Company address block shown at the bottom of the landing page.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressFooter;

impl AddressFooter {
    pub fn links(&self) -> [Link; 2] {
        [
            Link::new(ADDRESS, ADDRESS_MAP_URL),
            Link::new(CONTACT_EMAIL, format!("mailto:{}", CONTACT_EMAIL)),
        ]
    }
}

impl fmt::Display for AddressFooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", LogoText::new(LogoSize::Xl))?;
        writeln!(f)?;
        let [address, email] = self.links();
        writeln!(f, "  Address:  {}", address)?;
        write!(f, "  Contact:  {}", email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_contents() {
        let out = AddressFooter.to_string();
        assert!(out.starts_with("A j i M e m o"));
        assert!(out.contains("Warszawa, Poland <https://maps.app.goo.gl/1234567890>"));
        assert!(out.contains("contact@ajimemo.com <mailto:contact@ajimemo.com>"));
    }
}
