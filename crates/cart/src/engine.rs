//! Cart engine: persistence + notification glue around the pure cart ops.

use litoral_core::ProductId;
use litoral_events::{CartChanged, ChangeKind, EventBus, InMemoryEventBus, Subscription};
use litoral_store::StoreAdapter;

use crate::cart::{Cart, CartLineInput, CustomerInfo};

/// Default storage key for the cart sequence.
pub const DEFAULT_CART_KEY: &str = "litoral-fishing-cart";
/// Default storage key for the customer record.
pub const DEFAULT_CUSTOMER_KEY: &str = "litoral-fishing-customer";

/// The cart engine.
///
/// Composes a [`StoreAdapter`] (persistence) with an in-memory notification
/// bus. Every operation is synchronous and runs to completion; every
/// mutation persists the full cart before returning it, so a `load()`
/// immediately after any mutation yields the same cart the mutation
/// returned.
///
/// ## No-throw contract
///
/// Operations return plain values, never `Result`. Storage unavailability
/// and malformed persisted data are absorbed at this boundary and replaced
/// by the empty/default value (logged at `warn`). This trades strict error
/// surfacing for an always-renderable shopping flow.
///
/// ## Concurrency
///
/// The engine is `Send + Sync` when its store is, and can be shared behind
/// `Arc`. There is no writer coordination: concurrent mutators race on the
/// persisted value and the last write wins.
pub struct CartEngine<S> {
    store: S,
    bus: InMemoryEventBus<CartChanged>,
    cart_key: String,
    customer_key: String,
}

impl<S: StoreAdapter> CartEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, DEFAULT_CART_KEY, DEFAULT_CUSTOMER_KEY)
    }

    pub fn with_keys(
        store: S,
        cart_key: impl Into<String>,
        customer_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            bus: InMemoryEventBus::new(),
            cart_key: cart_key.into(),
            customer_key: customer_key.into(),
        }
    }

    /// Whether the underlying store can persist at all.
    ///
    /// When `false`, mutations still return the correct result for the
    /// current call; it just will not survive a reload.
    pub fn store_available(&self) -> bool {
        self.store.is_available()
    }

    /// Register for change notifications.
    ///
    /// Fire-and-forget, at-most-once per mutation, no payload contract
    /// beyond "something changed": re-read state with [`CartEngine::load`].
    pub fn subscribe(&self) -> Subscription<CartChanged> {
        self.bus.subscribe()
    }

    /// Fetch the persisted cart.
    ///
    /// Missing or malformed storage yields an empty cart, never an error.
    pub fn load(&self) -> Cart {
        self.read_json(&self.cart_key)
    }

    /// Merge-add a line; see [`Cart::add_line`] for the merge semantics.
    ///
    /// `quantity` is an increment the engine does not clamp; callers pass
    /// a value >= 1.
    pub fn add(&self, input: CartLineInput, quantity: u32) -> Cart {
        let mut cart = self.load();
        cart.add_line(input, quantity);
        self.persist_cart(&cart);
        self.notify(ChangeKind::LineAdded);
        cart
    }

    /// Set a line's quantity, floored at 1; absent id is a no-op.
    pub fn update(&self, product_id: &ProductId, quantity: i64) -> Cart {
        let mut cart = self.load();
        cart.set_quantity(product_id, quantity);
        self.persist_cart(&cart);
        self.notify(ChangeKind::QuantityUpdated);
        cart
    }

    /// Remove a line; absent id is a no-op.
    pub fn remove(&self, product_id: &ProductId) -> Cart {
        let mut cart = self.load();
        cart.remove_line(product_id);
        self.persist_cart(&cart);
        self.notify(ChangeKind::LineRemoved);
        cart
    }

    /// Empty the cart. The customer record is untouched.
    pub fn clear(&self) -> Cart {
        let cart = Cart::new();
        self.persist_cart(&cart);
        self.notify(ChangeKind::Cleared);
        cart
    }

    /// Fetch the persisted customer record (default when absent/malformed).
    pub fn customer(&self) -> CustomerInfo {
        self.read_json(&self.customer_key)
    }

    /// Persist the customer record, independently of the cart.
    pub fn set_customer(&self, info: CustomerInfo) {
        self.persist_json(&self.customer_key, &info);
        self.notify(ChangeKind::CustomerSaved);
    }

    fn read_json<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key, %err, "malformed persisted record, substituting default");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(err) => {
                tracing::warn!(key, %err, "store read failed, substituting default");
                T::default()
            }
        }
    }

    fn persist_cart(&self, cart: &Cart) {
        self.persist_json(&self.cart_key, cart);
    }

    fn persist_json<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(err) = self.store.set(key, &raw) {
                    tracing::warn!(key, %err, "store write failed, state not persisted");
                }
            }
            Err(err) => {
                tracing::warn!(key, %err, "serialize failed, state not persisted");
            }
        }
    }

    fn notify(&self, kind: ChangeKind) {
        if let Err(err) = self.bus.publish(CartChanged::now(kind)) {
            tracing::debug!(?kind, ?err, "change notification dropped");
        }
    }
}
