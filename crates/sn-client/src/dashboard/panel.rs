/// Side panels the dashboard can show, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Profile,
    Chat,
    Groups,
    Notifications,
    Friends,
}
