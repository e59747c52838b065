use crate::domain::ids::RunnerId;
use crate::domain::ports::{Notification, NotificationService, RunnerRepository};
use crate::domain::runner::Runner;
use crate::utils::error::Result;

pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the race tracker service!";

/// Runner use cases: registration and renaming.
pub struct RunnerService<R: RunnerRepository, N: NotificationService> {
    repo: R,
    notifier: N,
    welcome_message: String,
}

impl<R: RunnerRepository, N: NotificationService> RunnerService<R, N> {
    pub fn new(repo: R, notifier: N) -> Self {
        Self {
            repo,
            notifier,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }

    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    /// Registers a runner and sends a welcome notification.
    ///
    /// The notification is best-effort: a failure is logged and never changes
    /// the returned id.
    pub async fn create_runner(&self, name: &str, email: &str) -> Result<RunnerId> {
        let runner = Runner::new(name, email)?;

        self.repo.add(&runner).await?;
        tracing::info!(runner_id = %runner.id(), "Runner registered");

        let notification = Notification {
            email_address: runner.email_address().to_string(),
            subject: format!("Welcome {}", runner.name()),
            message: self.welcome_message.clone(),
        };
        if let Err(e) = self.notifier.notify(&notification).await {
            tracing::warn!(runner_id = %runner.id(), "Welcome notification failed: {}", e);
        }

        Ok(runner.id())
    }

    pub async fn rename_runner(&self, id: RunnerId, new_name: &str) -> Result<()> {
        let mut runner = self.repo.get_by_id(id).await?;
        runner.rename(new_name)?;
        self.repo.update(&runner).await?;

        tracing::debug!(runner_id = %id, "Runner renamed");
        Ok(())
    }

    pub async fn list_runners(&self) -> Result<Vec<Runner>> {
        self.repo.get_all().await
    }
}
