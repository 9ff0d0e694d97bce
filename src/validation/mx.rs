use std::time::Duration;
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::rr::RecordType,
};

/// Resolves the mail hosts responsible for a domain.
///
/// Follows RFC 5321 delivery rules:
/// 1. MX records, ordered by preference (lowest first)
/// 2. If the domain has no MX records, the domain itself is the implicit
///    mail host, provided it has A or AAAA records
///
/// # Returns
/// - `Ok(hosts)` with at least one entry when the domain can receive mail
/// - `Ok(vec![])` when the domain definitively has no mail hosts
///   (NXDOMAIN or no usable records)
/// - `Err` when resolution itself failed (timeout, no resolver, network
///   trouble) and nothing can be concluded about the domain
///
/// # Examples
/// ```no_run
/// use email_validator::validation::mx::mail_hosts;
///
/// let hosts = mail_hosts("gmail.com").unwrap();
/// assert!(!hosts.is_empty());
/// ```
pub fn mail_hosts(domain: &str) -> Result<Vec<String>, ResolveError> {
    let resolver = create_resolver()?;

    match resolver.mx_lookup(domain) {
        Ok(mx) => {
            let mut records: Vec<(u16, String)> = mx
                .iter()
                .map(|record| (record.preference(), record.exchange().to_utf8()))
                .collect();
            records.sort_by_key(|(preference, _)| *preference);

            Ok(records
                .into_iter()
                .map(|(_, exchange)| exchange.trim_end_matches('.').to_string())
                .collect())
        }
        Err(e) if is_no_records(&e) => implicit_mail_host(&resolver, domain),
        Err(e) => Err(e),
    }
}

/// Resolver with a 2 second timeout and 2 attempts per lookup, on the
/// system's default configuration.
fn create_resolver() -> Result<Resolver, ResolveError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(2);
    opts.attempts = 2;

    Ok(Resolver::new(ResolverConfig::default(), opts)?)
}

/// RFC 5321 section 5.1: a domain without MX records but with an address
/// record is treated as its own mail host.
fn implicit_mail_host(resolver: &Resolver, domain: &str) -> Result<Vec<String>, ResolveError> {
    for record_type in [RecordType::A, RecordType::AAAA] {
        match resolver.lookup(domain, record_type) {
            Ok(records) if records.iter().next().is_some() => {
                return Ok(vec![domain.to_string()]);
            }
            Ok(_) => {}
            Err(e) if is_no_records(&e) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(Vec::new())
}

/// Negative answers (NXDOMAIN, NODATA) mean "no such records", as opposed
/// to infrastructure failures where the truth is unknown.
fn is_no_records(error: &ResolveError) -> bool {
    matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. })
}
