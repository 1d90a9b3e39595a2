use std::{sync::Arc, time::Duration};

use tokio::time::interval;

use crate::{repositories::provider::ProviderRepository, use_cases::sessions::SessionStore};

pub async fn start_purge_task<R>(sessions: Arc<SessionStore<R>>, idle: Duration)
where
    R: ProviderRepository + 'static,
{
    let mut interval = interval(Duration::from_secs(60));

    loop {
        interval.tick().await;

        let purged = sessions.purge_idle(idle);
        if purged > 0 {
            tracing::info!("Purged {} idle landing sessions", purged);
        }
    }
}
