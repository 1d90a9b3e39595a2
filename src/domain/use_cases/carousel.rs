use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{task::JoinHandle, time::{interval_at, Instant}};

use crate::entities::view::{BackgroundImage, BACKGROUND_IMAGES};

/// Rotates the hero background on a fixed interval.
///
/// The rotation task belongs to the carousel and is aborted when it drops.
pub struct BackgroundCarousel {
    index: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl BackgroundCarousel {
    pub fn start(every: Duration) -> Self {
        let index = Arc::new(AtomicUsize::new(0));
        let ticker_index = index.clone();

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + every, every);
            loop {
                ticker.tick().await;
                let next = (ticker_index.load(Ordering::Relaxed) + 1) % BACKGROUND_IMAGES.len();
                ticker_index.store(next, Ordering::Relaxed);
            }
        });

        BackgroundCarousel { index, task }
    }

    pub fn current_index(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }

    pub fn current(&self) -> BackgroundImage {
        BACKGROUND_IMAGES[self.current_index()]
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for BackgroundCarousel {
    fn drop(&mut self) {
        self.task.abort();
    }
}
