//! Page compositions: data in, rendered text out.

mod dashboard;
mod landing;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
