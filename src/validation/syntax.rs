use std::net::{IpAddr, Ipv6Addr};

/// An email address split into its local part and domain.
///
/// Produced by [`parse`]; the domain is what the DNS and SMTP stages
/// operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mailbox<'a> {
    pub local: &'a str,
    pub domain: &'a str,
}

/// Parses an email address according to RFC 5322 and RFC 6531.
///
/// Checks both the local part and the domain:
/// - quoted-string local parts (`"with space"@example.com`)
/// - domain literals (`user@[192.168.0.1]`, `user@[IPv6:2001:db8::1]`)
/// - internationalized addresses (UTF-8 local parts and domains)
/// - RFC 5321 length limits (64 octets local, 254 overall)
///
/// Returns `None` when the address is not well-formed.
///
/// # Examples
/// ```
/// use email_validator::validation::syntax::parse;
///
/// let mailbox = parse("user.name+tag@example.com").unwrap();
/// assert_eq!(mailbox.domain, "example.com");
///
/// assert!(parse("not-an-email").is_none());
/// ```
pub fn parse(email: &str) -> Option<Mailbox<'_>> {
    // RFC 5321 + 5322 overall length limit
    if email.len() > 254 {
        return None;
    }

    let (local, domain) = split_at_separator(email)?;

    if local.len() > 64 {
        return None;
    }

    if !valid_local_part(local) || !valid_domain_part(domain) {
        return None;
    }

    Some(Mailbox { local, domain })
}

/// Whether the address parses; shorthand for `parse(email).is_some()`.
pub fn is_well_formed(email: &str) -> bool {
    parse(email).is_some()
}

/// Finds the separating `@`, skipping any that appear inside a quoted
/// local part, and returns the (local, domain) split.
fn split_at_separator(email: &str) -> Option<(&str, &str)> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in email.char_indices() {
        match c {
            '"' if !escaped => in_quotes = !in_quotes,
            '\\' if in_quotes => escaped = true,
            '@' if !in_quotes => return Some((&email[..i], &email[i + 1..])),
            _ => escaped = false,
        }
    }

    None
}

/// Local part: either a quoted string or dot-atom (RFC 5322 section 3.4.1).
fn valid_local_part(local: &str) -> bool {
    if local.starts_with('"') && local.ends_with('"') && local.len() >= 2 {
        valid_quoted_string(local)
    } else {
        valid_dot_atom(local, false)
    }
}

/// Domain part: either a bracketed literal or a domain name.
fn valid_domain_part(domain: &str) -> bool {
    if let Some(literal) = domain.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        valid_domain_literal(literal)
    } else {
        valid_domain_name(domain)
    }
}

/// Quoted-string content may contain anything except unescaped `"` and a
/// dangling backslash; an escape may only precede `\` or `"`.
fn valid_quoted_string(quoted: &str) -> bool {
    let content = &quoted[1..quoted.len() - 1];
    let mut escaped = false;

    for c in content.chars() {
        if escaped {
            if !matches!(c, '\\' | '"') {
                return false;
            }
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return false;
        }
    }

    !escaped
}

/// Dot-atom form from RFC 5322 section 3.4.1. Domain labels take the
/// stricter LDH rules; local-part atoms allow the printable specials.
fn valid_dot_atom(s: &str, domain_rules: bool) -> bool {
    let atoms: Vec<&str> = s.split('.').collect();
    if atoms.is_empty() || atoms.iter().any(|atom| atom.is_empty()) {
        return false;
    }

    atoms.iter().all(|atom| {
        atom.chars().all(|c| match c {
            '-' => !domain_rules || (!atom.starts_with('-') && !atom.ends_with('-')),
            c if domain_rules => c.is_alphanumeric() || c == '-',
            _ => c.is_alphanumeric() || "!#$%&'*+/=?^_`{|}~".contains(c),
        })
    })
}

/// Domain literals are IP addresses, optionally with the `IPv6:` tag.
fn valid_domain_literal(literal: &str) -> bool {
    literal.parse::<IpAddr>().is_ok()
        || literal
            .strip_prefix("IPv6:")
            .and_then(|ip| ip.parse::<Ipv6Addr>().ok())
            .is_some()
}

/// Domain names per RFC 1035 with the RFC 5890/6531 internationalized
/// extensions: dot-separated labels, 63 octets each, no edge hyphens.
fn valid_domain_name(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    !labels.is_empty()
        && labels.iter().all(|label| {
            label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && valid_dot_atom(label, true)
        })
}
