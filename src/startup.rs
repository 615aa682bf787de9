use axum::Router;
use axum::routing::IntoMakeService;
use axum::serve::Serve;

use crate::configuration::Settings;
use crate::routers;

type Server = Serve<tokio::net::TcpListener, IntoMakeService<Router>, Router>;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let addr = std::net::SocketAddr::from((
            settings.application.host,
            settings.application.port,
        ));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        if !settings.application.static_dir.is_dir() {
            tracing::warn!(
                "Static directory {} does not exist, destination pages will 404",
                settings.application.static_dir.display()
            );
        }
        tracing::info!("Login routing: {}", settings.routing);

        let app = routers::get_router(
            settings.routing.role_router(),
            &settings.application.static_dir,
        );
        let server = axum::serve(listener, app.into_make_service());

        Ok(Self {
            port: server.local_addr()?.port(),
            server,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), anyhow::Error> {
        tracing::info!("Listening on {}", self.server.local_addr()?);
        self.server.await?;
        Ok(())
    }
}
