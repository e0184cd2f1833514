use std::borrow::Cow;
use std::marker::PhantomData;

/// Immutable descriptor binding a Replicate model identifier to the input
/// payload shape `T` it accepts.
///
/// Descriptors carry no resources and are meant to live as process-wide
/// `const` items in the registry (`models` module). The type parameter is the
/// compile-time link between a descriptor and the payload a
/// [`crate::core::client::Client`] built from it will serialize.
#[derive(Debug, Clone)]
pub struct ReplicateModel<T> {
    id: Cow<'static, str>,
    cost: f64,
    input: PhantomData<fn() -> T>,
}

impl<T> ReplicateModel<T> {
    /// Descriptor with a zero informational cost.
    pub const fn new(id: &'static str) -> Self {
        Self::with_cost(id, 0.0)
    }

    /// Descriptor with an informational unit cost in USD: per image for image
    /// models, per million tokens for text models. Never used for billing or
    /// validation by this library.
    pub const fn with_cost(id: &'static str, cost: f64) -> Self {
        Self {
            id: Cow::Borrowed(id),
            cost,
            input: PhantomData,
        }
    }

    /// Runtime constructor for models not present in the registry.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            cost: 0.0,
            input: PhantomData,
        }
    }

    /// The remote model identifier, e.g. `"black-forest-labs/flux-schnell"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::ReplicateModel;

    struct DummyInput;

    const DUMMY: ReplicateModel<DummyInput> = ReplicateModel::with_cost("acme/dummy", 0.5);

    #[test]
    fn const_descriptor_exposes_id_and_cost() {
        assert_eq!(DUMMY.id(), "acme/dummy");
        assert_eq!(DUMMY.cost(), 0.5);
    }

    #[test]
    fn new_defaults_cost_to_zero() {
        const M: ReplicateModel<DummyInput> = ReplicateModel::new("acme/other");
        assert_eq!(M.cost(), 0.0);
    }

    #[test]
    fn from_id_accepts_runtime_strings() {
        let id = format!("{}/{}", "owner", "name");
        let model: ReplicateModel<DummyInput> = ReplicateModel::from_id(id);
        assert_eq!(model.id(), "owner/name");
    }
}
