use actor_framework::{ActorEntity, FrameworkError, ResourceActor, WeakResourceClient};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// --- Test Entity: a kettle that switches itself off after a delay ---

#[derive(Clone, Debug, PartialEq)]
struct Kettle {
    id: u32,
    on: bool,
}

#[derive(Debug)]
struct KettleCreate;

#[derive(Debug)]
struct KettleUpdate;

#[derive(Debug)]
enum KettleAction {
    SwitchOff,
}

#[derive(Debug, thiserror::Error)]
#[error("kettle error")]
struct KettleError;

/// Context handed to the actor after the client exists.
struct KettleContext {
    store: WeakResourceClient<Kettle>,
    switched_off: Arc<Mutex<Vec<u32>>>,
}

#[async_trait]
impl ActorEntity for Kettle {
    type Id = u32;
    type Create = KettleCreate;
    type Update = KettleUpdate;
    type Action = KettleAction;
    type ActionResult = ();
    type Context = KettleContext;
    type Error = KettleError;

    fn from_create_params(id: u32, _: KettleCreate) -> Result<Self, Self::Error> {
        Ok(Self { id, on: true })
    }

    async fn on_create(&mut self, ctx: &KettleContext) -> Result<(), Self::Error> {
        let store = ctx.store.clone();
        let log = ctx.switched_off.clone();
        let id = self.id;
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            let Some(client) = store.upgrade() else {
                return;
            };
            if client.perform_action(id, KettleAction::SwitchOff).await.is_ok() {
                log.lock().unwrap().push(id);
            }
        });
        Ok(())
    }

    async fn on_update(&mut self, _: KettleUpdate, _: &KettleContext) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: KettleAction,
        _: &KettleContext,
    ) -> Result<(), Self::Error> {
        match action {
            KettleAction::SwitchOff => self.on = false,
        }
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn deferred_action_reaches_the_store_through_a_weak_client() {
    let (actor, client) = ResourceActor::<Kettle>::new(10);
    let switched_off = Arc::new(Mutex::new(Vec::new()));
    let ctx = KettleContext {
        store: client.downgrade(),
        switched_off: switched_off.clone(),
    };
    let handle = tokio::spawn(actor.run(ctx));

    let kettle = client.create(KettleCreate).await.unwrap();
    assert!(kettle.on);

    tokio::time::sleep(Duration::from_secs(6)).await;
    let kettle = client.get(kettle.id).await.unwrap().unwrap();
    assert!(!kettle.on);
    assert_eq!(*switched_off.lock().unwrap(), vec![1]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn weak_clients_do_not_keep_the_actor_alive() {
    let (actor, client) = ResourceActor::<Kettle>::new(10);
    let switched_off = Arc::new(Mutex::new(Vec::new()));
    let ctx = KettleContext {
        store: client.downgrade(),
        switched_off: switched_off.clone(),
    };
    let handle = tokio::spawn(actor.run(ctx));

    client.create(KettleCreate).await.unwrap();
    let weak = client.downgrade();
    drop(client);

    // The actor exits while the deferred task is still sleeping.
    handle.await.unwrap();
    assert!(weak.upgrade().is_none());

    tokio::time::sleep(Duration::from_secs(6)).await;
    assert!(switched_off.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn deferred_action_after_delete_is_a_no_op() {
    let (actor, client) = ResourceActor::<Kettle>::new(10);
    let switched_off = Arc::new(Mutex::new(Vec::new()));
    let ctx = KettleContext {
        store: client.downgrade(),
        switched_off: switched_off.clone(),
    };
    tokio::spawn(actor.run(ctx));

    let kettle = client.create(KettleCreate).await.unwrap();
    client.delete(kettle.id).await.unwrap();

    tokio::time::sleep(Duration::from_secs(6)).await;
    assert!(switched_off.lock().unwrap().is_empty());
    assert!(client.get(kettle.id).await.unwrap().is_none());
    let stats = client.stats().await.unwrap();
    assert_eq!((stats.live, stats.retired), (0, 0));

    let err = client
        .perform_action(kettle.id, KettleAction::SwitchOff)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));
}
