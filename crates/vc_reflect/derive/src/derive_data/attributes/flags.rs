use proc_macro2::Span;

/// A struct used to record whether the specified standard trait is available.
///
/// When a flag is set, the generated `Reflect` impl forwards to that trait
/// instead of the field-wise helper.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub partial_eq: Option<Span>,
    pub hash: Option<Span>,
    pub debug: Option<Span>,
}
