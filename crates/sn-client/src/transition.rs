use crate::Route;

/// What a view does after handling a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Navigate(Route),
}

impl Transition {
    pub fn destination(&self) -> Option<Route> {
        match self {
            Self::Stay => None,
            Self::Navigate(route) => Some(*route),
        }
    }
}
