use std::fmt;

use crate::types::{SubscriptionTier, User};
use crate::ui::{ChangeKind, LogoSize, LogoText, StatCard};

/// Shortcut card linking to another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

/// An entry in the recent activity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub when: &'static str,
}

const QUICK_ACTIONS: [QuickAction; 1] = [QuickAction {
    title: "Upgrade Plan",
    description: "Get more API calls and features",
    href: "/dashboard/subscription",
}];

const RECENT_ACTIVITY: [ActivityItem; 3] = [
    ActivityItem {
        title: "Memory: Pizza with cheese and ham",
        detail: "User likes pizza with cheese and ham on thin crust",
        when: "2 hours ago",
    },
    ActivityItem {
        title: "Memory: Typescript is a programming language",
        detail: "User likes typescript and uses it for web development",
        when: "1 day ago",
    },
    ActivityItem {
        title: "API Call: Get available memory for Ai",
        detail: "Called by GET request from ChatGPT",
        when: "2 days ago",
    },
];

/// Account overview for a signed-in user.
///
/// Usage figures are placeholders until the API exposes aggregated usage.
#[derive(Debug, Clone, Copy)]
pub struct DashboardPage<'a> {
    user: Option<&'a User>,
}

impl<'a> DashboardPage<'a> {
    pub fn new(user: Option<&'a User>) -> Self {
        Self { user }
    }

    pub fn greeting(&self) -> String {
        match self.user {
            Some(user) => format!("Welcome back, {}.", user.display_name()),
            None => "Welcome back.".to_string(),
        }
    }

    pub fn stats(&self) -> [StatCard; 3] {
        let on_free = self
            .user
            .is_some_and(|u| u.subscription_tier == SubscriptionTier::Free);

        let plan_usage = if on_free {
            StatCard::new("Plan Usage", "89/100", "89%", ChangeKind::Warning)
        } else {
            StatCard::new("Plan Usage", "89/1000", "8.9%", ChangeKind::Positive)
        };

        [
            StatCard::new("Memories Stored", "127", "+12%", ChangeKind::Positive),
            StatCard::new("API Calls This Month", "89", "+8%", ChangeKind::Positive),
            plan_usage,
        ]
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QUICK_ACTIONS
    }

    pub fn recent_activity(&self) -> &'static [ActivityItem] {
        &RECENT_ACTIVITY
    }
}

impl fmt::Display for DashboardPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Dashboard", LogoText::new(LogoSize::Md))?;
        writeln!(
            f,
            "{} Here's what's happening with your account.",
            self.greeting()
        )?;
        writeln!(f)?;

        for card in self.stats() {
            writeln!(f, "{}", card)?;
        }
        writeln!(f)?;

        writeln!(f, "Quick Actions")?;
        for action in self.quick_actions() {
            writeln!(f, "  {} - {}", action.title, action.description)?;
            writeln!(f, "    Get Started <{}>", action.href)?;
        }
        writeln!(f)?;

        writeln!(f, "Recent Activity")?;
        write!(f, "Your latest memories and API calls")?;
        for item in self.recent_activity() {
            writeln!(f)?;
            writeln!(f, "  {:<48} {}", item.title, item.when)?;
            write!(f, "    {}", item.detail)?;
        }
        Ok(())
    }
}
