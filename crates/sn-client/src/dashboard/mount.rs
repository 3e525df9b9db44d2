use crate::{DashboardController, Route};

/// Result of opening the dashboard.
pub enum Mount {
    Ready(Box<DashboardController>),
    /// Nobody is logged in
    Redirect(Route),
}

impl Mount {
    pub fn ready(self) -> Option<DashboardController> {
        match self {
            Self::Ready(dashboard) => Some(*dashboard),
            Self::Redirect(_) => None,
        }
    }
}
