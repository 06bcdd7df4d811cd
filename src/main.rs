use anyhow::Result;
use clap::{Parser, Subcommand};
use dvsa_mot_history::{Credentials, MotHistoryClient};

#[derive(Parser, Debug)]
#[command(name = "mot-history", about = "DVSA MOT History API lookup")]
struct Cli {
    /// Azure AD application (client) ID.
    #[arg(long, env = "DVSA_CLIENT_ID")]
    client_id: String,
    /// Azure AD client secret.
    #[arg(long, env = "DVSA_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,
    /// Azure AD tenant ID.
    #[arg(long, env = "DVSA_TENANT_ID")]
    tenant_id: String,
    /// API key issued with the trade API registration.
    #[arg(long, env = "DVSA_API_KEY", hide_env_values = true)]
    api_key: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up MOT history by registration number.
    Registration { registration: String },
    /// Look up MOT history by VIN.
    Vin { vin: String },
    /// List the bulk and delta history files currently available.
    BulkDownload,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = MotHistoryClient::new(&Credentials {
        client_id: cli.client_id,
        client_secret: cli.client_secret,
        tenant_id: cli.tenant_id,
        api_key: cli.api_key,
    });

    match cli.command {
        Commands::Registration { registration } => {
            print_json(&client.vehicle_history_by_registration(&registration).await?)
        }
        Commands::Vin { vin } => print_json(&client.vehicle_history_by_vin(&vin).await?),
        Commands::BulkDownload => print_json(&client.bulk_download().await?),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
