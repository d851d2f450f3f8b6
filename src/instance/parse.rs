//! Text loader for weighted-tardiness flow-shop instances.
//!
//! Layout (whitespace separated):
//!
//! ```text
//! N M
//! 1 p11 2 p12 ... M p1M        <- one row per job: machine index, time
//! ...
//! Reldue                        <- section label, content ignored
//! -1 d1 -1 w1                   <- one row per job: due date, priority
//! ...
//! ```

use std::str::FromStr;

use super::types::Instance;
use crate::error::DataError;

impl FromStr for Instance {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(s)
    }
}

/// Parses an instance from its textual representation.
pub fn parse_instance(text: &str) -> Result<Instance, DataError> {
    let mut tokens = Tokens {
        inner: text.split_whitespace(),
    };

    let jobs = tokens.count("job count")?;
    let machines = tokens.count("machine count")?;
    if jobs == 0 {
        return Err(DataError::NoJobs);
    }
    if machines == 0 {
        return Err(DataError::NoMachines);
    }

    // Header counts are untrusted; vectors grow with the tokens actually read.
    let mut processing = Vec::new();
    for _ in 0..jobs {
        let mut row = Vec::new();
        for _ in 0..machines {
            tokens.number("machine index")?;
            row.push(tokens.number("processing time")?);
        }
        processing.push(row);
    }

    tokens.next("section label")?;

    let mut due_dates = Vec::new();
    let mut priorities = Vec::new();
    for _ in 0..jobs {
        tokens.number("due-date marker")?;
        due_dates.push(tokens.number("due date")?);
        tokens.number("priority marker")?;
        priorities.push(tokens.number("priority")?);
    }

    Instance::with_dimensions(jobs, machines, processing, due_dates, priorities)
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, what: &str) -> Result<&'a str, DataError> {
        self.inner.next().ok_or_else(|| DataError::Parse {
            token: String::new(),
            reason: format!("unexpected end of input, expected {what}"),
        })
    }

    fn number(&mut self, what: &str) -> Result<i64, DataError> {
        let token = self.next(what)?;
        token.parse().map_err(|_| DataError::Parse {
            token: token.to_string(),
            reason: format!("expected integer {what}"),
        })
    }

    fn count(&mut self, what: &str) -> Result<usize, DataError> {
        let token = self.next(what)?;
        token.parse().map_err(|_| DataError::Parse {
            token: token.to_string(),
            reason: format!("expected non-negative {what}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3 2
1 3 2 2
1 1 2 4
1 2 2 1
Reldue
-1 6 -1 1
-1 4 -1 2
-1 10 -1 3
";

    #[test]
    fn test_parse_sample() {
        let inst: Instance = SAMPLE.parse().unwrap();
        assert_eq!(inst.job_count(), 3);
        assert_eq!(inst.machine_count(), 2);
        assert_eq!(inst.processing_time(2, 2), Ok(4));
        assert_eq!(inst.due_date(3), Ok(10));
        assert_eq!(inst.priority(1), Ok(1));
    }

    #[test]
    fn test_parse_truncated() {
        let text = "3 2\n1 3 2 2\n";
        let err = parse_instance(text).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn test_parse_bad_number() {
        let text = SAMPLE.replace("-1 4 -1 2", "-1 x -1 2");
        match parse_instance(&text) {
            Err(DataError::Parse { token, .. }) => assert_eq!(token, "x"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_huge_header() {
        for text in ["4611686018427387904 1", "1 4611686018427387904", "18446744073709551615 3\n1 2"] {
            let err = parse_instance(text).unwrap_err();
            assert!(matches!(err, DataError::Parse { .. }), "{text}: {err:?}");
        }
    }

    #[test]
    fn test_parse_zero_jobs() {
        assert_eq!(parse_instance("0 3"), Err(DataError::NoJobs));
    }
}
