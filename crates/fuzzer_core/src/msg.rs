#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A probe request is about to be handed to the transport.
    RequestDispatched,
    /// The transport finished a request.
    ResponseReceived(crate::ResponseOutcome),
}
