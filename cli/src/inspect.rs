use clap::Args;
use serde_json::json;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the PEM data. If not specified, reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let certs = certs::parse_certificates(&input)?;

    match config.output {
        OutputFormat::Text => {
            for (i, cert) in certs.iter().enumerate() {
                println!("Certificate {}:", i);
                println!("  Subject: {}", cert.subject());
                println!("  Issuer: {}", cert.issuer());
                println!("  Serial Number: {:x}", cert.serial());
                println!("  Not Before: {}", cert.not_before());
                println!("  Not After:  {}", cert.not_after());
            }
        }
        OutputFormat::Json => {
            let entries = certs
                .iter()
                .map(|cert| {
                    json!({
                        "subject": cert.subject(),
                        "issuer": cert.issuer(),
                        "serial": format!("{:x}", cert.serial()),
                        "not_before": cert.not_before().to_string(),
                        "not_after": cert.not_after().to_string(),
                    })
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
