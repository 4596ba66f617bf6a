use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// The "AjiMemo" wordmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoText {
    pub size: LogoSize,
}

impl LogoText {
    pub const FIRST: &'static str = "Aji";
    pub const SECOND: &'static str = "Memo";

    pub fn new(size: LogoSize) -> Self {
        Self { size }
    }
}

impl fmt::Display for LogoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            LogoSize::Sm | LogoSize::Md => write!(f, "{}{}", Self::FIRST, Self::SECOND),
            LogoSize::Lg => write!(
                f,
                "{}{}",
                Self::FIRST.to_uppercase(),
                Self::SECOND.to_uppercase()
            ),
            LogoSize::Xl => {
                let spaced: Vec<String> = Self::FIRST
                    .chars()
                    .chain(Self::SECOND.chars())
                    .map(|c| c.to_string())
                    .collect();
                f.write_str(&spaced.join(" "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(LogoText::default().to_string(), "AjiMemo");
        assert_eq!(LogoText::new(LogoSize::Sm).to_string(), "AjiMemo");
        assert_eq!(LogoText::new(LogoSize::Lg).to_string(), "AJIMEMO");
        assert_eq!(LogoText::new(LogoSize::Xl).to_string(), "A j i M e m o");
    }
}
