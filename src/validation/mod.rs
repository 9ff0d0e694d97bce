/// Syntax checks for email addresses per RFC 5322 and RFC 6531.
///
/// Parses an address into its local part and domain with:
/// - Full quoted-string local-part support
/// - Domain literal (IP address) validation
/// - Internationalized email (UTF-8) support
/// - Length constraint enforcement
///
/// # Examples
/// ```
/// use email_validator::validation::syntax;
///
/// assert!(syntax::is_well_formed("user.name+tag@example.com"));
/// assert!(!syntax::is_well_formed("invalid@ex_mple.com"));
/// ```
pub mod syntax;

/// Mail-host resolution for email domains.
///
/// Looks up the hosts that accept mail for a domain:
/// 1. MX records, in preference order
/// 2. Falling back to the domain itself when it has A/AAAA records but no
///    MX (RFC 5321 implicit MX)
///
/// Distinguishes a domain that definitively has no mail hosts from a
/// lookup that failed outright, so callers can tell "undeliverable" from
/// "unknown".
pub mod mx;

/// SMTP mailbox probing.
///
/// Opens a probe session against a domain's mail hosts and asks whether
/// the mailbox would be accepted (`MAIL FROM`/`RCPT TO`, no message data).
/// Used only in the stricter deliverability mode.
pub mod smtp;
