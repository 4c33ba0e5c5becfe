use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn, Instrument};
use user_directory::app_system::{setup_tracing, AppConfig, DirectorySystem};
use user_directory::clients::FormClient;
use user_directory::domain::UserId;
use user_directory::fetch::HttpUserSource;
use user_directory::form::{FormField, SubmitOutcome};
use user_directory::view::{render_app, render_directory, render_form};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = AppConfig::from_env()?;
    let source = HttpUserSource::new(config.endpoint.clone(), config.request_timeout)?;
    let system = DirectorySystem::start(&config, Arc::new(source));

    println!("{}", render_directory(&system.directory_client.view().await?));
    system.directory_client.wait_until_settled().await?;
    println!("{}", render_directory(&system.directory_client.view().await?));

    let form = &system.form_client;

    let span = tracing::info_span!("invalid_submission");
    async {
        info!("Submitting an underage user");
        fill(form, ["Ada Lovelace", "Analyst", "United Kingdom", "17", "First programmer"]).await?;
        if let SubmitOutcome::Rejected(errors) = form.submit().await? {
            info!(fields = errors.len(), "Submission rejected");
        }
        println!("{}", render_form(&form.snapshot().await?));
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("valid_submission");
    let added = async {
        form.set_field(FormField::Age, "36".to_string()).await?;
        let outcome = form.submit().await?;
        println!("{}", render_form(&form.snapshot().await?));
        Ok::<_, Box<dyn Error>>(outcome)
    }
    .instrument(span)
    .await?;

    let directory = &system.directory_client;
    directory.set_search("ada".to_string()).await?;
    println!("{}", render_directory(&directory.view().await?));

    if let SubmitOutcome::Accepted(id) = added {
        directory.delete(id).await?;
    }
    directory.delete(UserId::Remote(1)).await?;
    directory.set_search(String::new()).await?;
    let view = directory.view().await?;
    if view.error.is_some() {
        warn!("Remote listing unavailable");
    }
    println!("{}", render_app(&form.snapshot().await?, &view));

    system.shutdown().await?;
    info!("Done");
    Ok(())
}

async fn fill(form: &FormClient, values: [&str; 5]) -> Result<(), Box<dyn Error>> {
    for (field, value) in FormField::ALL.into_iter().zip(values) {
        form.set_field(field, value.to_string()).await?;
    }
    Ok(())
}
