use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const SMTP_PORT: u16 = 25;
const DIALOGUE_TIMEOUT: Duration = Duration::from_secs(10);

/// How many exchanges to try before giving up on a domain.
const MAX_HOSTS: usize = 2;

/// Result of probing a mailbox over SMTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The exchange accepted `RCPT TO` for the mailbox.
    Accepted,
    /// The exchange permanently rejected the mailbox (5xx reply).
    Rejected,
    /// No exchange was reachable, or none gave a definitive answer.
    /// Exchanges commonly refuse probe connections outright, so this
    /// carries no signal about the mailbox itself.
    Inconclusive,
}

/// Probes a mailbox against the domain's mail hosts, in preference order.
///
/// Runs the standard verification dialogue against each host until one
/// answers: greeting, `EHLO`/`HELO` with the caller's domain, `MAIL FROM`
/// with the sender address, then `RCPT TO` with the candidate mailbox.
/// The session is always closed with `QUIT`; no message data is sent.
pub fn probe_mailbox(hosts: &[String], helo: &str, sender: &str, recipient: &str) -> ProbeOutcome {
    for host in hosts.iter().take(MAX_HOSTS) {
        match probe_host(host, helo, sender, recipient) {
            Ok(outcome) => return outcome,
            Err(e) => {
                log::debug!("smtp probe against {host} failed: {e}");
            }
        }
    }

    ProbeOutcome::Inconclusive
}

fn probe_host(host: &str, helo: &str, sender: &str, recipient: &str) -> io::Result<ProbeOutcome> {
    let mut session = Session::connect(host)?;

    // 220 greeting, then identify ourselves
    let greeting = session.read_reply()?;
    if greeting.code / 100 != 2 {
        session.quit();
        return Ok(ProbeOutcome::Inconclusive);
    }

    let ehlo = session.exchange(&format!("EHLO {helo}"))?;
    if ehlo.code / 100 != 2 {
        // Older exchanges only speak HELO
        let helo_reply = session.exchange(&format!("HELO {helo}"))?;
        if helo_reply.code / 100 != 2 {
            session.quit();
            return Ok(ProbeOutcome::Inconclusive);
        }
    }

    let mail = session.exchange(&format!("MAIL FROM:<{sender}>"))?;
    if mail.code / 100 != 2 {
        session.quit();
        return Ok(ProbeOutcome::Inconclusive);
    }

    let rcpt = session.exchange(&format!("RCPT TO:<{recipient}>"))?;
    session.quit();

    Ok(match rcpt.code / 100 {
        2 => ProbeOutcome::Accepted,
        5 => {
            log::debug!("mailbox rejected by {host}: {}", rcpt.text);
            ProbeOutcome::Rejected
        }
        _ => ProbeOutcome::Inconclusive,
    })
}

/// A reply from the server: the three-digit code of the final line plus
/// the collected text.
#[derive(Debug)]
struct Reply {
    code: u16,
    text: String,
}

struct Session {
    stream: BufReader<TcpStream>,
}

impl Session {
    fn connect(host: &str) -> io::Result<Self> {
        let addr = (host, SMTP_PORT)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no address for mail host"))?;

        let stream = TcpStream::connect_timeout(&addr, DIALOGUE_TIMEOUT)?;
        stream.set_read_timeout(Some(DIALOGUE_TIMEOUT))?;
        stream.set_write_timeout(Some(DIALOGUE_TIMEOUT))?;

        Ok(Self {
            stream: BufReader::new(stream),
        })
    }

    /// Sends one command and reads the server's reply.
    fn exchange(&mut self, command: &str) -> io::Result<Reply> {
        self.send(command)?;
        self.read_reply()
    }

    fn send(&mut self, command: &str) -> io::Result<()> {
        let line = format!("{command}\r\n");
        self.stream.get_mut().write_all(line.as_bytes())?;
        self.stream.get_mut().flush()
    }

    /// Reads a reply, collecting continuation lines (`250-...`) until the
    /// final line (`250 ...`).
    fn read_reply(&mut self) -> io::Result<Reply> {
        let mut text = String::new();
        let mut line = String::new();

        loop {
            line.clear();
            let n = self.stream.read_line(&mut line)?;
            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed mid-reply",
                ));
            }

            text.push_str(&line);

            if is_final_line(&line) {
                let code = reply_code(&line).ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidData, "malformed reply line")
                })?;
                return Ok(Reply {
                    code,
                    text: text.trim().to_string(),
                });
            }
        }
    }

    fn quit(&mut self) {
        // Best effort; the verdict is already decided
        let _ = self.send("QUIT");
    }
}

/// A reply line is final when the separator after the code is a space
/// rather than a dash (`250 ok` vs `250-continues`). A bare code line
/// (`250\r\n`) is also final.
fn is_final_line(line: &str) -> bool {
    match line.as_bytes().get(3) {
        Some(b' ') => true,
        Some(b'-') => false,
        _ => true,
    }
}

fn reply_code(line: &str) -> Option<u16> {
    line.get(..3)?.parse::<u16>().ok().filter(|code| *code >= 200)
}
