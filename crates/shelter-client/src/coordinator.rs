use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::error::{ExpiredReason, RefreshError};
use crate::session::{RefreshedSession, Refresher};

type Waiter = oneshot::Sender<Result<(), RefreshError>>;

#[derive(Default)]
struct RefreshState {
    in_progress: bool,
    /// Bumped after every successful refresh.
    epoch: u64,
    waiters: Vec<Waiter>,
}

/// How a caller got past an authorization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Settled {
    /// This caller ran the refresh.
    Led,
    /// This caller waited on a refresh another caller was running.
    Joined,
    /// Credentials were rotated after this caller's request went out.
    AlreadyRotated,
}

#[derive(Debug)]
pub(crate) struct Rejected {
    pub(crate) reason: ExpiredReason,
    /// Set only for the caller that ran the failed refresh.
    pub(crate) led: bool,
}

enum Position {
    Leader,
    Queued(oneshot::Receiver<Result<(), RefreshError>>),
    Rotated,
}

/// Single-flight guard around session refresh. At most one refresh runs at
/// a time; callers arriving while it runs are parked on one-shot channels
/// and released together when it settles.
#[derive(Default)]
pub(crate) struct RefreshCoordinator {
    state: Mutex<RefreshState>,
}

impl RefreshCoordinator {
    fn lock(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.lock().epoch
    }

    #[cfg(test)]
    pub(crate) fn queued(&self) -> usize {
        self.lock().waiters.len()
    }

    #[cfg(test)]
    pub(crate) fn in_progress(&self) -> bool {
        self.lock().in_progress
    }

    /// Waits until credentials newer than `seen_epoch` are available,
    /// running the refresh if nobody else is. `on_success` stores the new
    /// credentials before any queued caller is released.
    pub(crate) async fn refresh<R, F>(
        &self,
        seen_epoch: u64,
        refresher: &R,
        on_success: F,
    ) -> Result<Settled, Rejected>
    where
        R: Refresher + ?Sized,
        F: FnOnce(&RefreshedSession),
    {
        let position = {
            let mut state = self.lock();
            if state.epoch > seen_epoch {
                Position::Rotated
            } else if state.in_progress {
                let (tx, rx) = oneshot::channel();
                state.waiters.push(tx);
                Position::Queued(rx)
            } else {
                state.in_progress = true;
                Position::Leader
            }
        };

        match position {
            Position::Rotated => Ok(Settled::AlreadyRotated),
            Position::Queued(rx) => match rx.await {
                Ok(Ok(())) => Ok(Settled::Joined),
                Ok(Err(error)) => Err(Rejected {
                    reason: ExpiredReason::RefreshFailed(error),
                    led: false,
                }),
                Err(_) => Err(Rejected {
                    reason: ExpiredReason::RefreshAbandoned,
                    led: false,
                }),
            },
            Position::Leader => self.lead(refresher, on_success).await,
        }
    }

    async fn lead<R, F>(&self, refresher: &R, on_success: F) -> Result<Settled, Rejected>
    where
        R: Refresher + ?Sized,
        F: FnOnce(&RefreshedSession),
    {
        let mut guard = LeaderGuard {
            coordinator: self,
            armed: true,
        };
        info!("session refresh started");
        let result = refresher.refresh().await;
        guard.armed = false;

        match result {
            Ok(session) => {
                on_success(&session);
                let waiters = self.settle(true);
                info!(released = waiters.len(), "session refreshed");
                for waiter in waiters {
                    let _ = waiter.send(Ok(()));
                }
                Ok(Settled::Led)
            }
            Err(error) => {
                let waiters = self.settle(false);
                warn!(rejected = waiters.len(), error = %error, "session refresh failed");
                for waiter in waiters {
                    let _ = waiter.send(Err(error.clone()));
                }
                Err(Rejected {
                    reason: ExpiredReason::RefreshFailed(error),
                    led: true,
                })
            }
        }
    }

    fn settle(&self, rotated: bool) -> Vec<Waiter> {
        let mut state = self.lock();
        state.in_progress = false;
        if rotated {
            state.epoch += 1;
        }
        std::mem::take(&mut state.waiters)
    }
}

/// Releases the in-progress flag if the leading future is dropped before
/// its refresh settles. Dropping the queued senders wakes every waiter with
/// [`ExpiredReason::RefreshAbandoned`].
struct LeaderGuard<'a> {
    coordinator: &'a RefreshCoordinator,
    armed: bool,
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let waiters = self.coordinator.settle(false);
            warn!(abandoned = waiters.len(), "session refresh abandoned");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Refresher that blocks until released, so tests decide when a
    /// refresh settles.
    struct GatedRefresher {
        calls: AtomicUsize,
        gate: Notify,
        outcome: Result<(), RefreshError>,
    }

    impl GatedRefresher {
        fn new(outcome: Result<(), RefreshError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                gate: Notify::new(),
                outcome,
            })
        }
    }

    #[async_trait]
    impl Refresher for GatedRefresher {
        async fn refresh(&self) -> Result<RefreshedSession, RefreshError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            self.outcome.clone().map(|()| RefreshedSession {
                access_token: "fresh".to_string(),
                expires_in: 900,
            })
        }
    }

    async fn wait_for_queue(coordinator: &RefreshCoordinator, expected: usize) {
        for _ in 0..500 {
            if coordinator.queued() == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("expected {expected} queued callers");
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_refresh() {
        let coordinator = Arc::new(RefreshCoordinator::default());
        let refresher = GatedRefresher::new(Ok(()));
        let stored = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..3 {
            let coordinator = coordinator.clone();
            let refresher = refresher.clone();
            let stored = stored.clone();
            handles.push(tokio::spawn(async move {
                coordinator
                    .refresh(0, refresher.as_ref(), |_| {
                        stored.fetch_add(1, Ordering::SeqCst);
                    })
                    .await
            }));
        }

        wait_for_queue(&coordinator, 2).await;
        assert!(coordinator.in_progress());
        refresher.gate.notify_one();

        let mut outcomes = Vec::new();
        for handle in handles {
            outcomes.push(handle.await.expect("join").expect("settled"));
        }
        outcomes.sort_by_key(|settled| *settled != Settled::Led);
        assert_eq!(outcomes, vec![Settled::Led, Settled::Joined, Settled::Joined]);
        assert_eq!(refresher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(stored.load(Ordering::SeqCst), 1);
        assert_eq!(coordinator.epoch(), 1);
        assert!(!coordinator.in_progress());
    }

    #[tokio::test]
    async fn failure_is_broadcast_and_only_leader_is_marked() {
        let coordinator = Arc::new(RefreshCoordinator::default());
        let error = RefreshError {
            status: None,
            message: "refresh cookie expired".to_string(),
        };
        let refresher = GatedRefresher::new(Err(error.clone()));

        let mut handles = Vec::new();
        for _ in 0..3 {
            let coordinator = coordinator.clone();
            let refresher = refresher.clone();
            handles.push(tokio::spawn(async move {
                coordinator.refresh(0, refresher.as_ref(), |_| {}).await
            }));
        }

        wait_for_queue(&coordinator, 2).await;
        refresher.gate.notify_one();

        let mut leaders = 0;
        for handle in handles {
            let rejected = handle.await.expect("join").expect_err("refresh fails");
            assert_eq!(rejected.reason, ExpiredReason::RefreshFailed(error.clone()));
            if rejected.led {
                leaders += 1;
            }
        }
        assert_eq!(leaders, 1);
        assert_eq!(refresher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(coordinator.epoch(), 0);
        assert!(!coordinator.in_progress());
    }

    #[tokio::test]
    async fn stale_epoch_skips_refresh() {
        let coordinator = RefreshCoordinator::default();
        let refresher = GatedRefresher::new(Ok(()));
        refresher.gate.notify_one();
        let settled = coordinator
            .refresh(0, refresher.as_ref(), |_| {})
            .await
            .expect("first refresh");
        assert_eq!(settled, Settled::Led);

        let settled = coordinator
            .refresh(0, refresher.as_ref(), |_| {})
            .await
            .expect("stale caller");
        assert_eq!(settled, Settled::AlreadyRotated);
        assert_eq!(refresher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dropped_leader_releases_waiters() {
        let coordinator = Arc::new(RefreshCoordinator::default());
        let refresher = GatedRefresher::new(Ok(()));

        let leader = {
            let coordinator = coordinator.clone();
            let refresher = refresher.clone();
            tokio::spawn(async move { coordinator.refresh(0, refresher.as_ref(), |_| {}).await })
        };
        while refresher.calls.load(Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        let waiter = {
            let coordinator = coordinator.clone();
            let refresher = refresher.clone();
            tokio::spawn(async move { coordinator.refresh(0, refresher.as_ref(), |_| {}).await })
        };
        wait_for_queue(&coordinator, 1).await;

        leader.abort();
        let _ = leader.await;

        let rejected = waiter.await.expect("join").expect_err("abandoned");
        assert_eq!(rejected.reason, ExpiredReason::RefreshAbandoned);
        assert!(!rejected.led);
        assert!(!coordinator.in_progress());
    }
}
