//! Console report of benchmark timings

use std::io::Write;

use crate::Result;
use crate::clock::Millis;

/// Writes the banner, case headers and case costs to an output stream.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Announce the loop count once, before any suite runs.
    pub fn banner(&mut self, loop_count: u64) -> Result<()> {
        write!(
            self.out,
            "\n----------------String Comparison with {loop_count} loops ---------------- \n"
        )?;
        Ok(())
    }

    /// Separator line carrying the case label.
    pub fn header(&mut self, label: &str) -> Result<()> {
        write!(
            self.out,
            "\n-------------------------{label}-------------------\n"
        )?;
        Ok(())
    }

    pub fn cost(&mut self, elapsed: Millis) -> Result<()> {
        writeln!(self.out, "{elapsed}ms")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::time::Duration;

    use super::*;

    fn rendered(f: impl FnOnce(&mut Reporter<Vec<u8>>) -> Result<()>) -> String {
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_banner_format() {
        let out = rendered(|r| r.banner(1_000_000));
        assert_eq!(
            out,
            "\n----------------String Comparison with 1000000 loops ---------------- \n"
        );
    }

    #[test]
    fn test_header_keeps_label_verbatim() {
        let label = "string, plain addition \"+\"";
        let out = rendered(|r| r.header(label));
        assert_eq!(
            out,
            "\n-------------------------string, plain addition \"+\"-------------------\n"
        );
        assert!(out.contains(label));
    }

    #[test]
    fn test_cost_format() {
        let out = rendered(|r| r.cost(Millis::from_duration(Duration::from_micros(12_500))));
        assert_eq!(out, "12.5ms\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let mut reporter = Reporter::new(BrokenPipe);
        let err = reporter.header("label").unwrap_err();
        assert!(err.is_output());
    }
}
