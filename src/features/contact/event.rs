/// Events emitted by the contact form.
#[derive(Debug, Clone)]
pub(crate) enum ContactEvent {
    MessageChanged(String),
    Submit,
    Tick,
}
