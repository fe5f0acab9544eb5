#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use deleon::{config::Config, error::AppError, server};
    use leptos::prelude::get_configuration;
    use opentelemetry_configuration::OtelSdkBuilder;

    let config = Config::load().context("failed to load configuration")?;

    let _guard = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("vcs.repository.name", env!("CARGO_PKG_NAME"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .resource_attribute(
            "deployment.environment.name",
            config.otel.environment.clone(),
        )
        .endpoint(config.otel.endpoint())
        .with_standard_env()
        .build()
        .map_err(|e| AppError::Telemetry(e.to_string()))
        .context("failed to initialise OpenTelemetry")?;

    let conf = get_configuration(None)
        .map_err(|e| AppError::Leptos(e.to_string()))
        .context("failed to read leptos options")?;

    server::serve(&config, conf.leptos_options)
        .await
        .context("server exited with an error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
