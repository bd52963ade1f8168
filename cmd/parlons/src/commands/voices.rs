//! Voice catalogue command.

use clap::Args;

use parlons_edgetts::Client;

use super::{output_result, print_success, print_verbose};
use crate::Cli;

/// List voices from the catalogue.
#[derive(Args)]
pub struct VoicesCommand {
    /// Locale prefix filter (e.g., fr or fr-FR)
    #[arg(short = 'l', long)]
    locale: Option<String>,
}

impl VoicesCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let client = Client::builder().build()?;
        let service = client.voices();

        let voices = match self.locale.as_deref() {
            Some(locale) => {
                print_verbose(cli, &format!("Filtering locale: {}", locale));
                service.find(locale).await?
            }
            None => service.list().await?,
        };

        if cli.json {
            return output_result(&voices, true);
        }

        for voice in &voices {
            println!(
                "{:<32} {:<8} {:<8} {}",
                voice.short_name, voice.gender, voice.locale, voice.friendly_name
            );
        }
        print_success(&format!("{} voices", voices.len()));

        Ok(())
    }
}
