/// A trait representing an aggregate that is created from a request.
///
/// Aggregates enforce their own invariants: a request is first checked with
/// [`validate`](Aggregate::validate), and only a valid request is turned into
/// the event describing the creation.
///
/// # Example
///
/// ```rust
/// use prospect_events::{Aggregate, CreateProspectRequest, Prospect};
///
/// let request = CreateProspectRequest::new("Ada", "Lovelace", None);
/// let prospect = Prospect::default();
///
/// assert!(prospect.validate(&request));
/// let event = prospect.generate_created_event(request);
/// assert_eq!(event.version, 1);
/// ```
pub trait Aggregate {
    /// The request this aggregate is created from.
    type Request;

    /// The event emitted when the aggregate is created.
    type CreatedEvent;

    /// Returns `true` if the request satisfies the aggregate's invariants.
    fn validate(&self, request: &Self::Request) -> bool;

    /// Builds the creation event.
    ///
    /// This does not validate the request; callers must call
    /// [`validate`](Aggregate::validate) first.
    fn generate_created_event(&self, request: Self::Request) -> Self::CreatedEvent;
}
