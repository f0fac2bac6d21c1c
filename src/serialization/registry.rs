use crate::serialization::{DecodeError, ODATA_TYPE_KEY, ParseNode};
use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

pub type Constructor<T> = fn() -> Box<T>;

/// Maps `@odata.type` discriminators to constructors for one polymorphic family.
///
/// Lookups read an immutable snapshot without locking. Registration happens at process start and swaps in a new
/// snapshot.
pub struct DiscriminatorRegistry<T: ?Sized + 'static> {
    family: &'static str,
    fallback: Constructor<T>,
    constructors: ArcSwap<HashMap<String, Constructor<T>>>,
    write_lock: Mutex<()>,
}

impl<T: ?Sized + 'static> DiscriminatorRegistry<T> {
    pub fn new(family: &'static str, fallback: Constructor<T>) -> Self {
        DiscriminatorRegistry {
            family,
            fallback,
            constructors: ArcSwap::from_pointee(HashMap::new()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn register(&self, discriminator: &str, constructor: Constructor<T>) {
        let _guard = self.write_lock.lock().unwrap();

        let mut constructors = HashMap::clone(&self.constructors.load());
        if constructors.insert(discriminator.to_owned(), constructor).is_some() {
            warn!(family = self.family, discriminator, "Replaced an existing registration");
        }
        self.constructors.store(Arc::new(constructors));

        debug!(family = self.family, discriminator, "Registered model");
    }

    pub fn resolve(&self, discriminator: &str) -> Option<Constructor<T>> {
        self.constructors.load().get(discriminator).copied()
    }

    /// Resolves the constructor for `discriminator`, using the family's base type when it is missing or unknown.
    pub fn resolve_or_fallback(&self, discriminator: Option<&str>) -> Constructor<T> {
        let Some(discriminator) = discriminator else {
            return self.fallback;
        };

        self.resolve(discriminator).unwrap_or_else(|| {
            warn!(family = self.family, discriminator, "⚠️ Unknown discriminator, decoding as the base type");
            self.fallback
        })
    }

    /// Creates an empty record of the type named by the node's `@odata.type`.
    pub fn create(&self, node: &dyn ParseNode) -> Result<Box<T>, DecodeError> {
        let discriminator = match node.get_child_node(ODATA_TYPE_KEY) {
            Some(child) => child.get_string_value().map_err(|e| e.at(ODATA_TYPE_KEY))?,
            None => None,
        };

        Ok(self.resolve_or_fallback(discriminator.as_deref())())
    }

    pub fn known_discriminators(&self) -> Vec<String> {
        let mut discriminators: Vec<String> = self.constructors.load().keys().cloned().collect();
        discriminators.sort();
        discriminators
    }
}
