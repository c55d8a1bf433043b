//! Cancellation signal for auto-run, built on a `tokio::sync::watch` channel.

use tokio::sync::watch;

/// Control side: cancels every token created from it.
#[derive(Debug)]
pub struct CancelHandle {
  tx: watch::Sender<bool>,
}

/// Observer side handed to an auto-run loop. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CancelToken {
  rx: watch::Receiver<bool>,
}

impl CancelHandle {
  pub fn new() -> Self {
    let (tx, _rx) = watch::channel(false);
    Self { tx }
  }

  pub fn token(&self) -> CancelToken {
    CancelToken {
      rx: self.tx.subscribe(),
    }
  }

  pub fn cancel(&self) {
    self.tx.send_replace(true);
  }

  pub fn is_cancelled(&self) -> bool {
    *self.tx.borrow()
  }
}

impl Default for CancelHandle {
  fn default() -> Self {
    Self::new()
  }
}

impl CancelToken {
  /// A token that never fires.
  pub fn never() -> Self {
    CancelHandle::new().token()
  }

  pub fn is_cancelled(&self) -> bool {
    *self.rx.borrow()
  }

  /// Resolves once cancelled. Pends forever if the handle is dropped uncancelled.
  pub async fn cancelled(&self) {
    let mut rx = self.rx.clone();
    if rx.wait_for(|cancelled| *cancelled).await.is_err() {
      std::future::pending::<()>().await;
    }
  }
}
