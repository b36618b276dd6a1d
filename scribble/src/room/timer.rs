use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use super::request::Request as RoomReq;

/// Periodic tick source feeding the room loop. Stopping or dropping it
/// ends the task; ticks already queued keep their epoch and are filtered
/// by the room.
pub struct Ticker {
    epoch: u64,
    stopper: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn start(epoch: u64, period: Duration, loopback: Sender<RoomReq>) -> Self {
        let (stopper, mut rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            loop {
                sleep(period).await;
                match rx.try_recv() {
                    Err(TryRecvError::Empty) => {}
                    _ => return,
                }
                if loopback.send(RoomReq::Tick(epoch)).await.is_err() {
                    return;
                }
            }
        });
        Self {
            epoch,
            stopper: Some(stopper),
            handle,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn stop(mut self) {
        if let Some(stopper) = self.stopper.take() {
            let _ = stopper.send(());
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
