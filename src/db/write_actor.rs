use super::DbPool;
use crate::errors::{Error, Result};
use diesel::SqliteConnection;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A job executed on the writer's dedicated connection. The boxed Any return
// erases the concrete result type so one channel serves every caller.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// Each job runs inside its own immediate transaction; jobs are applied
    /// strictly in submission order.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the
/// database. The actor owns one connection from the pool and processes
/// write jobs serially, each inside an immediate transaction.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool.get().expect(
            "Failed to get a connection from the DB pool for the writer actor. The pool might be exhausted or misconfigured.",
        );

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> =
                conn.immediate_transaction::<_, Error, _>(|c| job(c));

            // Receiver may have given up (timeout/cancel); nothing to do then.
            let _ = reply_tx.send(result);
        }
        // Sender side dropped; the actor terminates with it.
    });

    WriteHandle { tx }
}
