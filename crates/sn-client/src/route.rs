/// The three views. Registration is the entry view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Register,
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Register => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}
