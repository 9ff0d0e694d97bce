use crate::validation::smtp::ProbeOutcome;
use crate::validation::{mx, smtp, syntax};
use mockall::automock;
use std::fmt;

/// # Verifier Configuration
///
/// Settings for the email verification pipeline, constructed once at
/// startup and read-only for the process lifetime.
///
/// ## Fields
/// - `verifier_email`: sender address used in `MAIL FROM` when probing
/// - `helo_domain`: domain announced in `EHLO`, derived from the verifier
///   address
/// - `smtp_safe_check`: enables the SMTP probe stage
///
/// Construction fails when the verifier address itself is not a
/// well-formed email address.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    pub verifier_email: String,
    pub helo_domain: String,
    pub smtp_safe_check: bool,
}

/// The verifier address did not parse as an email address.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidVerifierEmail(pub String);

impl fmt::Display for InvalidVerifierEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verifier email {:?} is not a well-formed address", self.0)
    }
}

impl std::error::Error for InvalidVerifierEmail {}

impl VerifierConfig {
    pub fn new(
        verifier_email: &str,
        smtp_safe_check: bool,
    ) -> Result<Self, InvalidVerifierEmail> {
        let mailbox = syntax::parse(verifier_email)
            .ok_or_else(|| InvalidVerifierEmail(verifier_email.to_string()))?;

        Ok(Self {
            helo_domain: mailbox.domain.to_string(),
            verifier_email: verifier_email.to_string(),
            smtp_safe_check,
        })
    }
}

/// Which validation stage rejected an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The address is not well-formed (RFC 5322/6531).
    Syntax,
    /// The domain has no mail hosts.
    Domain,
    /// The domain's exchange permanently refused the mailbox.
    Mailbox,
}

/// Outcome of verifying an address.
///
/// `Indeterminate` is reported when the verification infrastructure
/// failed (for example, DNS resolution timed out) and nothing could be
/// concluded about the address either way. On the HTTP surface it maps
/// to `valid: false`, but callers of the library can tell the cases
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Deliverable,
    Undeliverable(Rejection),
    Indeterminate,
}

impl Verdict {
    pub fn is_deliverable(self) -> bool {
        matches!(self, Verdict::Deliverable)
    }
}

/// The email validation capability the HTTP layer delegates to.
///
/// Implementations may block on network I/O (DNS, SMTP); callers are
/// expected to run `verify` off the async executor.
#[automock]
pub trait VerifyEmail: Send + Sync {
    fn verify(&self, email: &str) -> Verdict;
}

/// # Email Verifier
///
/// Verifies addresses in three stages:
/// 1. RFC 5322/6531 syntax parsing
/// 2. Mail-host resolution (MX with implicit-MX fallback)
/// 3. SMTP mailbox probe, only when `smtp_safe_check` is enabled
///
/// An unreachable exchange in stage 3 does not fail the address: most
/// exchanges refuse probe connections, so the MX evidence from stage 2
/// stands.
pub struct EmailVerifier {
    config: VerifierConfig,
}

impl EmailVerifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// Boolean shorthand over [`VerifyEmail::verify`].
    pub fn is_valid(&self, email: &str) -> bool {
        self.verify(email).is_deliverable()
    }
}

impl VerifyEmail for EmailVerifier {
    fn verify(&self, email: &str) -> Verdict {
        let mailbox = match syntax::parse(email) {
            Some(mailbox) => mailbox,
            None => return Verdict::Undeliverable(Rejection::Syntax),
        };

        let hosts = match mx::mail_hosts(mailbox.domain) {
            Ok(hosts) if hosts.is_empty() => {
                return Verdict::Undeliverable(Rejection::Domain);
            }
            Ok(hosts) => hosts,
            Err(e) => {
                log::warn!("mail host lookup for {} failed: {e}", mailbox.domain);
                return Verdict::Indeterminate;
            }
        };

        if !self.config.smtp_safe_check {
            return Verdict::Deliverable;
        }

        match smtp::probe_mailbox(
            &hosts,
            &self.config.helo_domain,
            &self.config.verifier_email,
            email,
        ) {
            ProbeOutcome::Accepted => Verdict::Deliverable,
            ProbeOutcome::Rejected => Verdict::Undeliverable(Rejection::Mailbox),
            ProbeOutcome::Inconclusive => {
                log::debug!("smtp probe for {email} inconclusive, keeping mx verdict");
                Verdict::Deliverable
            }
        }
    }
}
