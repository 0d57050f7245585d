use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgGroup, Parser};
use dhcid_domain::{DomainError, IdentifierType};

use crate::invocation::Invocation;

#[derive(Parser, Debug)]
#[command(name = "dhcid")]
#[command(version)]
#[command(about = "Compute DHCID (RFC 4701) identifiers for DHCP clients")]
#[command(after_help = "Modes:\n  dhcid <MAC>                 legacy upper-case hex digest\n  dhcid --mac <MAC> <FQDN>    DHCID record for a MAC-based client\n  dhcid --duid <DUID> <FQDN>  DHCID record for a DUID-based client")]
#[command(group(ArgGroup::new("mode").args(["mac", "duid"])))]
pub struct Cli {
    /// Client MAC address (aa:bb:cc:dd:ee:ff)
    #[arg(long, value_name = "MAC")]
    pub mac: Option<String>,

    /// Client DUID in hex, optionally separated by ':' or '-'
    #[arg(long, value_name = "DUID")]
    pub duid: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// MAC address in legacy mode, FQDN with --mac or --duid
    #[arg(value_name = "ARG")]
    pub args: Vec<String>,
}

impl Cli {
    /// Resolves the mode flags and positionals into a single invocation.
    pub fn invocation(&self) -> Result<Invocation, DomainError> {
        let mode = match (&self.mac, &self.duid) {
            (Some(mac), None) => Some((IdentifierType::MacBased, mac)),
            (None, Some(duid)) => Some((IdentifierType::DuidBased, duid)),
            (None, None) => None,
            (Some(_), Some(_)) => {
                return Err(DomainError::UnknownMode(
                    "--mac and --duid cannot be combined".to_string(),
                ))
            }
        };

        match (mode, self.args.as_slice()) {
            (Some((identifier_type, identifier)), [fqdn]) => Ok(Invocation::Record {
                identifier_type,
                identifier: identifier.clone(),
                fqdn: fqdn.clone(),
            }),
            (Some((identifier_type, _)), args) => Err(DomainError::InvalidArgumentCount(
                format!(
                    "--{} expects exactly one FQDN, got {} arguments",
                    identifier_type,
                    args.len()
                ),
            )),
            (None, [mac]) => Ok(Invocation::Legacy { mac: mac.clone() }),
            (None, args) => Err(DomainError::InvalidArgumentCount(format!(
                "expected exactly one MAC address, got {} arguments",
                args.len()
            ))),
        }
    }
}

/// Maps a clap parse failure onto the usage-error kinds of the domain.
pub fn classify_parse_error(err: &clap::Error) -> DomainError {
    match err.kind() {
        ErrorKind::UnknownArgument => {
            let arg = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => "unrecognized flag".to_string(),
            };
            DomainError::UnknownMode(arg)
        }
        ErrorKind::ArgumentConflict => {
            DomainError::UnknownMode("--mac and --duid cannot be combined".to_string())
        }
        _ => {
            let rendered = err.to_string();
            let first_line = rendered.lines().next().unwrap_or("invalid arguments");
            DomainError::InvalidArgumentCount(
                first_line.trim_start_matches("error: ").to_string(),
            )
        }
    }
}
