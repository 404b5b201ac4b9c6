use crate::core::codec::ObjectDecoder;
use crate::core::error::ModelError;
use crate::util::aliases::ModelResult;
use crate::util::traits::ResultExtensions;
use serde_json::Value;

/// Decodes the remaining properties of a json object into one concrete variant of a
/// polymorphic family, after the discriminator has selected it.
pub type VariantDecoder<T> = fn(&ObjectDecoder) -> ModelResult<T>;

/// An immutable mapping from discriminator strings to variant decoders for one
/// polymorphic schema family.  Each family builds exactly one of these (behind a
/// `once_cell::sync::Lazy`) in a single expression; there is no way to mutate the table
/// after construction, so lookups are plain reads with no locking.
///
/// Every variant is registered under each of its accepted discriminator values: the wire
/// format documents both a short form and a fully qualified form (e.g. `AllOf` and
/// `AllOfAccessRuleNode`) for backward compatibility, and both must decode identically.
pub struct DiscriminatorRegistry<T: 'static> {
    base_name: &'static str,
    tag_field: &'static str,
    entries: Vec<(&'static str, VariantDecoder<T>)>,
}
impl<T> DiscriminatorRegistry<T> {
    pub fn new(base_name: &'static str, tag_field: &'static str) -> Self {
        DiscriminatorRegistry {
            base_name,
            tag_field,
            entries: Vec::new(),
        }
    }

    /// Registers a variant decoder under each of the provided discriminator values.
    pub fn variant(mut self, tags: &[&'static str], decoder: VariantDecoder<T>) -> Self {
        for tag in tags {
            self.entries.push((tag, decoder));
        }
        self
    }

    pub fn base_name(&self) -> &'static str {
        self.base_name
    }

    pub fn tag_field(&self) -> &'static str {
        self.tag_field
    }

    /// All discriminator values the registry accepts, in registration order.
    pub fn known_tags(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(tag, _)| *tag).collect()
    }

    /// Reads the discriminator property from the document and dispatches to the matching
    /// variant decoder, failing with an error that lists every accepted value when the
    /// tag is not registered.
    pub fn decode(&self, value: &Value) -> ModelResult<T> {
        let decoder = ObjectDecoder::new(self.base_name, value)?;
        let tag = decoder.require_string(self.tag_field)?;
        match self
            .entries
            .iter()
            .find(|(registered, _)| *registered == tag)
        {
            Some((_, variant_decoder)) => variant_decoder(&decoder),
            None => ModelError::UnknownDiscriminator {
                base_name: self.base_name.to_string(),
                discriminator: tag,
                expected: self.known_tags().join(", "),
            }
            .to_err(),
        }
    }
}
