use std::fs;
use std::io::{self, Write};

use certs::ParsedCertificate;
use clap::Args;

use crate::error::Result;

#[derive(Args)]
pub(crate) struct Config {
    /// PEM files to merge
    #[arg(required = true)]
    files: Vec<String>,

    /// Write the bundle to this file instead of stdout
    #[arg(short, long)]
    out: Option<String>,
}

/// Collects every certificate from the inputs, drops structural duplicates
/// (byte-identical DER payloads), and re-emits one concatenated bundle.
pub(crate) fn execute(config: Config) -> Result<()> {
    let mut seen: Vec<ParsedCertificate> = vec![];
    for file in &config.files {
        let input = fs::read(file)?;
        for cert in certs::parse_certificates(&input)? {
            if !seen.contains(&cert) {
                seen.push(cert);
            }
        }
    }

    let bundle = certs::encode_certificates(seen.iter().map(|cert| cert.der()));
    match config.out {
        Some(path) => fs::write(path, bundle)?,
        None => io::stdout().write_all(&bundle)?,
    }

    Ok(())
}
