use crate::clients::RestaurantClient;
use crate::framework::SyncActor;
use crate::lifecycle::config::MapConfig;
use crate::map::{IconResolver, MapRenderer, MapSurface};
use crate::repository::RestaurantRepository;
use crate::shell::{PresentationShell, ShellView};
use tracing::{error, info};

/// Session-scoped owner of the restaurant controller.
///
/// `MapSession` is responsible for:
/// - **Lifecycle Management**: starting the controller actor and stopping it at the end
/// - **Dependency Wiring**: injecting the repository into the actor's run loop
/// - **Shell Construction**: building shells that share the one controller
///
/// The session outlives every shell it builds. Tearing a shell down and building a new
/// one (a rotation, say) leaves the filter state and the last result in place.
///
/// # Example
///
/// ```ignore
/// let session = MapSession::new(SeedRepository::bundled()?, MapConfig::default());
///
/// let mut shell = session.shell(surface, CuisineIcons, view);
/// shell.on_surface_ready().await?;
/// shell.select_filter(1).await?;
///
/// shell.detach().await?;
/// session.shutdown().await?;
/// ```
pub struct MapSession {
    /// Client for the restaurant controller
    pub client: RestaurantClient,

    config: MapConfig,

    /// Task handle of the controller actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl MapSession {
    /// Creates the controller and spawns it with `repository` injected.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<R: RestaurantRepository>(repository: R, config: MapConfig) -> Self {
        let (actor, inner) = SyncActor::<R>::new(config.mailbox_capacity);
        let handle = tokio::spawn(actor.run(repository));
        info!(
            mailbox = config.mailbox_capacity,
            default_filter = %config.default_filter,
            "Session started"
        );

        Self {
            client: RestaurantClient::new(inner),
            config,
            handle,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Builds a presentation shell attached to this session's controller.
    ///
    /// The shell is inert until its surface reports readiness.
    pub fn shell<S, I, V>(&self, surface: S, icons: I, view: V) -> PresentationShell<S, I, V>
    where
        S: MapSurface + 'static,
        I: IconResolver + 'static,
        V: ShellView + 'static,
    {
        let renderer = MapRenderer::new(icons).with_padding(self.config.camera_padding);
        PresentationShell::new(self.client.clone(), surface, renderer, view)
            .with_default_filter(self.config.default_filter)
    }

    /// Gracefully shuts down the controller.
    ///
    /// Dropping the session's client closes the mailbox once every shell built from it
    /// has been detached or dropped; the actor then leaves its loop. Fetches still in
    /// flight are abandoned.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down session...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Controller task failed: {:?}", e);
            return Err(e);
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
