//! The collection store.
//!
//! Every operation follows the same template: mark the store busy and clear
//! the error slot, perform the client call, re-fetch the full collection
//! after a successful mutation, and on any failure along the way collapse
//! the error into the operation's fixed message. The busy flag is dropped
//! on every exit path.
//!
//! Operations are serialized per store: an internal mutex gate admits one
//! operation at a time, so overlapping callers queue and observe strictly
//! sequential state transitions. The two stores of the application are
//! independent instances and never contend.

use tokio::sync::{watch, Mutex};

use replica_core::{Product, Resource, ResourceId, User};
use replica_http::{Error, ResourceApi, ResourceClient};

use crate::confirm::ConfirmAction;
use crate::messages;
use crate::snapshot::Snapshot;

/// Client-side mirror of one remote resource collection.
pub struct CollectionStore<R: Resource, A: ResourceApi<R>> {
    api: A,
    state: watch::Sender<Snapshot<R>>,
    gate: Mutex<()>,
}

/// Store over the HTTP client, for the products collection.
pub type ProductStore = CollectionStore<Product, ResourceClient<Product>>;

/// Store over the HTTP client, for the users collection.
pub type UserStore = CollectionStore<User, ResourceClient<User>>;

impl<R: Resource, A: ResourceApi<R>> CollectionStore<R, A> {
    /// Create a store over `api` and perform the initial load.
    ///
    /// A failed initial load leaves the store usable with the load message
    /// in the error slot, exactly like a failed explicit [`load`](Self::load).
    pub async fn attach(api: A) -> Self {
        let (state, _) = watch::channel(Snapshot::default());
        let store = Self {
            api,
            state,
            gate: Mutex::new(()),
        };
        store.load().await;
        store
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> Snapshot<R> {
        self.state.borrow().clone()
    }

    /// Observe every state transition.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<R>> {
        self.state.subscribe()
    }

    /// Fetch the collection and replace `items`.
    pub async fn load(&self) -> bool {
        let _op = self.gate.lock().await;
        self.begin();
        let result = self.refresh().await;
        self.complete("load", messages::load_failed::<R>(), result)
    }

    /// Create a resource, then re-fetch the collection.
    pub async fn create(&self, form: R::Form) -> bool {
        let _op = self.gate.lock().await;
        self.begin();
        let result = async {
            self.api.create(&form).await?;
            self.refresh().await
        }
        .await;
        self.complete("create", messages::create_failed::<R>(), result)
    }

    /// Update a resource by id, then re-fetch the collection.
    pub async fn update(&self, id: ResourceId, form: R::Form) -> bool {
        let _op = self.gate.lock().await;
        self.begin();
        let result = async {
            self.api.update(id, &form).await?;
            self.refresh().await
        }
        .await;
        self.complete("update", messages::update_failed::<R>(), result)
    }

    /// Delete a resource by id, then re-fetch the collection.
    ///
    /// Confirmation is obtained before anything else; a declined prompt is a
    /// no-op failure that neither sets the busy flag nor touches the error
    /// slot.
    pub async fn delete(&self, id: ResourceId, confirm: &dyn ConfirmAction) -> bool {
        if !confirm.confirm(&messages::confirm_delete::<R>()) {
            return false;
        }

        let _op = self.gate.lock().await;
        self.begin();
        let result = async {
            self.api.delete(id).await?;
            self.refresh().await
        }
        .await;
        self.complete("delete", messages::delete_failed::<R>(), result)
    }

    /// The full list fetch shared by `load` and the post-mutation reloads.
    async fn refresh(&self) -> Result<(), Error> {
        let items = self.api.list_all().await?;
        self.state.send_modify(|s| s.items = items);
        Ok(())
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.busy = true;
            s.last_error = None;
        });
    }

    /// Resolve an operation: log and record the failure message, then drop
    /// the busy flag regardless of outcome.
    fn complete(&self, operation: &str, message: String, result: Result<(), Error>) -> bool {
        let ok = match result {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(
                    collection = R::COLLECTION,
                    operation,
                    error = %error,
                    "store operation failed"
                );
                self.state.send_modify(|s| s.last_error = Some(message));
                false
            }
        };
        self.state.send_modify(|s| s.busy = false);
        ok
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use replica_core::ProductForm;

    use super::*;
    use crate::confirm::AlwaysConfirm;

    /// In-memory stand-in for the products backend.
    struct StubApi {
        products: std::sync::Mutex<Vec<Product>>,
        next_id: AtomicI64,
        fail_list: AtomicBool,
        fail_create: AtomicBool,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
        barrier: tokio::sync::Mutex<()>,
    }

    impl StubApi {
        fn new(products: Vec<Product>) -> Arc<Self> {
            let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            Arc::new(Self {
                products: std::sync::Mutex::new(products),
                next_id: AtomicI64::new(next_id),
                fail_list: AtomicBool::new(false),
                fail_create: AtomicBool::new(false),
                in_flight: AtomicUsize::new(0),
                peak_in_flight: AtomicUsize::new(0),
                barrier: tokio::sync::Mutex::new(()),
            })
        }

        fn server_error(&self) -> Error {
            Error::Status {
                status: http::StatusCode::INTERNAL_SERVER_ERROR,
                url: url::Url::parse("http://stub.local/productos").unwrap(),
                body: "boom".to_string(),
            }
        }

        fn not_found(&self, id: ResourceId) -> Error {
            Error::Status {
                status: http::StatusCode::NOT_FOUND,
                url: url::Url::parse(&format!("http://stub.local/productos/{id}")).unwrap(),
                body: String::new(),
            }
        }

        async fn enter(&self) {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
            // Give an overlapping caller the chance to show up.
            tokio::task::yield_now().await;
            let _ = self.barrier.lock().await;
        }

        fn exit(&self) {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ResourceApi<Product> for StubApi {
        async fn list_all(&self) -> Result<Vec<Product>, Error> {
            self.enter().await;
            let result = if self.fail_list.load(Ordering::SeqCst) {
                Err(self.server_error())
            } else {
                Ok(self.products.lock().unwrap().clone())
            };
            self.exit();
            result
        }

        async fn get_by_id(&self, id: ResourceId) -> Result<Product, Error> {
            let found = self.products.lock().unwrap().iter().find(|p| p.id == id).cloned();
            found.ok_or_else(|| self.not_found(id))
        }

        async fn create(&self, form: &ProductForm) -> Result<Product, Error> {
            self.enter().await;
            let result = if self.fail_create.load(Ordering::SeqCst) {
                Err(self.server_error())
            } else {
                let product = Product {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    name: form.name.clone(),
                    price: form.price.unwrap_or(0.0),
                    quantity: form.quantity.unwrap_or(0.0) as i64,
                };
                self.products.lock().unwrap().push(product.clone());
                Ok(product)
            };
            self.exit();
            result
        }

        async fn update(&self, id: ResourceId, form: &ProductForm) -> Result<(), Error> {
            let mut products = self.products.lock().unwrap();
            match products.iter_mut().find(|p| p.id == id) {
                Some(product) => {
                    product.name = form.name.clone();
                    product.price = form.price.unwrap_or(0.0);
                    product.quantity = form.quantity.unwrap_or(0.0) as i64;
                    Ok(())
                }
                None => Err(self.not_found(id)),
            }
        }

        async fn delete(&self, id: ResourceId) -> Result<(), Error> {
            let mut products = self.products.lock().unwrap();
            let before = products.len();
            products.retain(|p| p.id != id);
            if products.len() == before {
                return Err(self.not_found(id));
            }
            Ok(())
        }
    }

    fn mesa() -> Product {
        Product {
            id: 1,
            name: "Mesa".to_string(),
            price: 100.0,
            quantity: 2,
        }
    }

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            price: Some(10.0),
            quantity: Some(1.0),
        }
    }

    struct Decline {
        prompt: std::sync::Mutex<Option<String>>,
    }

    impl Decline {
        fn new() -> Self {
            Self {
                prompt: std::sync::Mutex::new(None),
            }
        }
    }

    impl ConfirmAction for Decline {
        fn confirm(&self, prompt: &str) -> bool {
            *self.prompt.lock().unwrap() = Some(prompt.to_string());
            false
        }
    }

    #[tokio::test]
    async fn attach_performs_initial_load() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(api).await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items, vec![mesa()]);
        assert!(!snapshot.busy);
        assert!(snapshot.last_error.is_none());
    }

    #[tokio::test]
    async fn failed_initial_load_leaves_store_usable() {
        let api = StubApi::new(vec![mesa()]);
        api.fail_list.store(true, Ordering::SeqCst);
        let store = CollectionStore::attach(Arc::clone(&api)).await;

        let snapshot = store.snapshot();
        assert!(snapshot.items.is_empty());
        assert!(!snapshot.busy);
        assert_eq!(
            snapshot.last_error.as_deref(),
            Some("Error al cargar productos")
        );

        // Retry succeeds and clears the error slot.
        api.fail_list.store(false, Ordering::SeqCst);
        assert!(store.load().await);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.items, vec![mesa()]);
        assert!(snapshot.last_error.is_none());
    }

    #[tokio::test]
    async fn create_refetches_instead_of_appending() {
        let api = StubApi::new(vec![]);
        let store = CollectionStore::attach(Arc::clone(&api)).await;

        // Another client adds a product behind this store's back.
        api.products.lock().unwrap().push(mesa());

        assert!(store.create(form("Silla")).await);

        // The refetch picked up both the foreign product and ours.
        let items = store.snapshot().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Mesa");
        assert_eq!(items[1].name, "Silla");
    }

    #[tokio::test]
    async fn failed_create_sets_message_and_keeps_items() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(Arc::clone(&api)).await;

        api.fail_create.store(true, Ordering::SeqCst);
        assert!(!store.create(form("Silla")).await);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items, vec![mesa()]);
        assert!(!snapshot.busy);
        assert_eq!(
            snapshot.last_error.as_deref(),
            Some("Error al crear producto")
        );
    }

    #[tokio::test]
    async fn reload_failure_is_the_operations_failure() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(Arc::clone(&api)).await;

        // The create itself succeeds; the trailing reload fails. The
        // operation reports the create message and items stay at the last
        // successful fetch.
        api.fail_list.store(true, Ordering::SeqCst);
        assert!(!store.create(form("Silla")).await);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.items, vec![mesa()]);
        assert_eq!(
            snapshot.last_error.as_deref(),
            Some("Error al crear producto")
        );
    }

    #[tokio::test]
    async fn update_refetches_the_collection() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(Arc::clone(&api)).await;

        let mut updated = form("Mesa grande");
        updated.price = Some(150.0);
        assert!(store.update(1, updated).await);

        let items = store.snapshot().items;
        assert_eq!(items[0].name, "Mesa grande");
        assert_eq!(items[0].price, 150.0);
    }

    #[tokio::test]
    async fn update_of_missing_id_sets_update_message() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(api).await;

        assert!(!store.update(99, form("Nada")).await);
        assert_eq!(
            store.snapshot().last_error.as_deref(),
            Some("Error al actualizar producto")
        );
    }

    #[tokio::test]
    async fn confirmed_delete_removes_via_refetch() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(api).await;

        assert!(store.delete(1, &AlwaysConfirm).await);
        assert!(store.snapshot().items.is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_id_sets_delete_message() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(api).await;

        assert!(!store.delete(99, &AlwaysConfirm).await);
        assert_eq!(
            store.snapshot().last_error.as_deref(),
            Some("Error al eliminar producto")
        );
    }

    #[tokio::test]
    async fn declined_delete_is_a_noop() {
        let api = StubApi::new(vec![mesa()]);
        let store = CollectionStore::attach(Arc::clone(&api)).await;

        // Seed the error slot so we can tell it was not cleared.
        api.fail_list.store(true, Ordering::SeqCst);
        store.load().await;
        api.fail_list.store(false, Ordering::SeqCst);

        let decline = Decline::new();
        assert!(!store.delete(1, &decline).await);

        let snapshot = store.snapshot();
        assert!(!snapshot.busy);
        assert_eq!(
            snapshot.last_error.as_deref(),
            Some("Error al cargar productos")
        );
        assert_eq!(
            decline.prompt.lock().unwrap().as_deref(),
            Some("¿Está seguro de eliminar este producto?")
        );
        // The backend was never asked to delete anything.
        assert_eq!(api.products.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn busy_is_visible_while_an_operation_is_in_flight() {
        let api = StubApi::new(vec![mesa()]);
        let store = Arc::new(CollectionStore::attach(Arc::clone(&api)).await);
        let mut rx = store.subscribe();

        // Hold the stub's barrier so the load blocks mid-operation.
        let guard = api.barrier.lock().await;

        let task = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.load().await }
        });

        rx.wait_for(|s| s.busy).await.unwrap();
        drop(guard);

        assert!(task.await.unwrap());
        assert!(!store.snapshot().busy);
    }

    #[tokio::test]
    async fn overlapping_operations_serialize() {
        let api = StubApi::new(vec![]);
        let store = CollectionStore::attach(Arc::clone(&api)).await;

        let (a, b) = tokio::join!(store.create(form("Mesa")), store.create(form("Silla")));
        assert!(a && b);

        // The gate admits one operation at a time, so the stub never saw
        // concurrent calls.
        assert_eq!(api.peak_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(store.snapshot().items.len(), 2);
    }
}
