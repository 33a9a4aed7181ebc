use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::ui_loop;

type Channel = (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>);

/// Both directions between the terminal and the event loop
pub struct ChannelSet {
    pub app_to_ui: Channel,
    pub ui_to_app: Channel,
}

impl ChannelSet {
    /// Both directions share one capacity; 0 is bumped to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Owns the session's tasks and the token that stops them
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, channel_capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(channel_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Start the event loop and the terminal; either finishing ends the session
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        let (to_ui, from_app) = self.channels.app_to_ui.clone();
        let (to_app, from_ui) = self.channels.ui_to_app.clone();

        tasks.spawn(event_loop(
            Arc::clone(&self.state),
            from_ui,
            to_ui,
            self.cancel_token.child_token(),
        ));
        tasks.spawn(ui_loop(
            from_app,
            to_app,
            Arc::clone(&self.state.config),
            self.cancel_token.child_token(),
        ));

        tracing::debug!("Spawned {} tasks", tasks.len());
        tasks
    }

    pub fn shutdown(&self) {
        tracing::info!("Stopping session tasks");
        self.cancel_token.cancel();
    }
}
