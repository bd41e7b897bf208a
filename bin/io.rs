use anyhow::{Context, Error as Anyhow};
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Stdin, Stdout, Write};
use std::str::FromStr;
use tracing::instrument;

/// A line oriented io interface.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a line.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    /// Receive a line and parse it.
    pub fn recv_parsed<T>(&mut self) -> Result<T, Anyhow>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let line = self.recv()?;
        line.trim()
            .parse()
            .with_context(|| format!("failed to parse `{}`", line.trim()))
    }

    /// Send a line.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)?;
        self.writer.flush()
    }
}

impl Default for Io<Stdout, Stdin> {
    fn default() -> Self {
        Io::new(io::stdout(), io::stdin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::{Board, Snapshot};
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_waits_for_line_break(#[strategy("[^\r\n]")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "{}", s)?;
        let mut io = Io::new(empty(), &mut buf);
        assert_eq!(io.recv()?, s);
    }

    #[test]
    fn recv_fails_at_end_of_input() {
        let mut io = Io::new(empty(), empty());
        assert_eq!(io.recv().map_err(|e| e.kind()), Err(ErrorKind::UnexpectedEof));
    }

    #[test]
    fn recv_parsed_reads_a_snapshot_per_line() {
        let mut buf = VecDeque::new();
        let snapshot = Board::default().snapshot();
        writeln!(&mut buf, "{snapshot}").unwrap();
        let mut io = Io::new(empty(), &mut buf);
        assert_eq!(io.recv_parsed::<Snapshot>().ok(), Some(snapshot));
    }

    #[test]
    fn recv_parsed_reports_invalid_input() {
        let mut buf = VecDeque::from(b"{not json}\n".to_vec());
        let mut io = Io::new(empty(), &mut buf);
        assert!(io.recv_parsed::<Snapshot>().is_err());
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.send(&s)?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }
}
