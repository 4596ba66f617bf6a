use std::fmt;

/// Direction of a stat's month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Positive,
    Warning,
}

impl ChangeKind {
    pub fn marker(&self) -> char {
        match self {
            ChangeKind::Positive => '+',
            ChangeKind::Warning => '!',
        }
    }
}

/// A boxed statistic: name, headline value, and change since last month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub name: String,
    pub value: String,
    pub change: String,
    pub kind: ChangeKind,
}

impl StatCard {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        kind: ChangeKind,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            change: change.into(),
            kind,
        }
    }

    fn lines(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.value.clone(),
            format!("[{}] {} from last month", self.kind.marker(), self.change),
        ]
    }
}

impl fmt::Display for StatCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let border = format!("+{}+", "-".repeat(width + 2));

        writeln!(f, "{}", border)?;
        for line in &lines {
            writeln!(f, "| {:<width$} |", line, width = width)?;
        }
        write!(f, "{}", border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_box() {
        let card = StatCard::new("Plan Usage", "89/100", "89%", ChangeKind::Warning);
        let out = card.to_string();
        let rows: Vec<&str> = out.lines().collect();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], "| Plan Usage              |");
        assert_eq!(rows[3], "| [!] 89% from last month |");
        assert!(rows.iter().all(|r| r.len() == rows[0].len()));
    }
}
