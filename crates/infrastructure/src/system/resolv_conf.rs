use caa_guard_domain::DomainError;
use std::path::PathBuf;

const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";
const DEFAULT_DNS_PORT: u16 = 53;

/// Resolver address source backed by the system resolver configuration.
pub struct SystemResolvConf {
    path: PathBuf,
}

impl SystemResolvConf {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(RESOLV_CONF_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pick one configured nameserver at random, as `host:port`.
    pub fn upstream_address(&self) -> Result<String, DomainError> {
        let servers = self.nameservers()?;
        if servers.is_empty() {
            return Err(DomainError::NoNameservers);
        }

        let pick = &servers[fastrand::usize(..servers.len())];
        Ok(format_address(pick))
    }

    pub fn nameservers(&self) -> Result<Vec<String>, DomainError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::ConfigError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        Ok(parse_nameservers(&contents))
    }
}

impl Default for SystemResolvConf {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_nameservers(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("nameserver") => fields.next().map(str::to_string),
                _ => None,
            }
        })
        .collect()
}

fn format_address(server: &str) -> String {
    // Bare IPv6 addresses need brackets to carry a port.
    if server.contains(':') && !server.starts_with('[') {
        format!("[{}]:{}", server, DEFAULT_DNS_PORT)
    } else {
        format!("{}:{}", server, DEFAULT_DNS_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_nameservers_skips_comments_and_options() {
        let contents = "\
# Generated by NetworkManager
; another comment style
search example.internal
options edns0 trust-ad
nameserver 192.0.2.53
nameserver 198.51.100.53
";

        let servers = parse_nameservers(contents);
        assert_eq!(servers, vec!["192.0.2.53", "198.51.100.53"]);
    }

    #[test]
    fn test_parse_nameservers_handles_leading_whitespace() {
        let servers = parse_nameservers("   nameserver 192.0.2.1\n");
        assert_eq!(servers, vec!["192.0.2.1"]);
    }

    #[test]
    fn test_format_address_appends_default_port() {
        assert_eq!(format_address("192.0.2.53"), "192.0.2.53:53");
    }

    #[test]
    fn test_format_address_brackets_ipv6() {
        assert_eq!(format_address("2001:db8::1"), "[2001:db8::1]:53");
    }

    #[test]
    fn test_upstream_address_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nameserver 192.0.2.53").unwrap();

        let source = SystemResolvConf::with_path(file.path());
        assert_eq!(source.upstream_address().unwrap(), "192.0.2.53:53");
    }

    #[test]
    fn test_upstream_address_picks_a_configured_server() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nameserver 192.0.2.53").unwrap();
        writeln!(file, "nameserver 198.51.100.53").unwrap();

        let source = SystemResolvConf::with_path(file.path());
        let address = source.upstream_address().unwrap();
        assert!(address == "192.0.2.53:53" || address == "198.51.100.53:53");
    }

    #[test]
    fn test_no_nameservers_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let source = SystemResolvConf::with_path(file.path());
        assert!(matches!(
            source.upstream_address(),
            Err(DomainError::NoNameservers)
        ));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let source = SystemResolvConf::with_path("/nonexistent/resolv.conf");
        assert!(matches!(
            source.upstream_address(),
            Err(DomainError::ConfigError(_))
        ));
    }
}
