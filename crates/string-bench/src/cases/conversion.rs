//! String assembly including one integer-to-text conversion.
//!
//! Every iteration builds `BASE|uid=<UID>|destination=<DESTINATION>|taskid=<TASK_ID>`
//! from scratch. The four cases differ in which fields go through the
//! accumulator and which accumulator is used.

use std::fmt::Write;

use super::{Case, Fixtures, repeat};
use crate::Result;
use crate::buffer::{DuplexBuffer, OutBuffer, TextBuffer};
use crate::constants::{
    BASE, DESTINATION, DESTINATION_PREFIX, TASK_ID, TASK_ID_PREFIX, UID, UID_PREFIX,
};

/// Cases in report order.
pub const CASES: &[Case] = &[
    Case {
        label: "string, incremental by \"+\" with one oss conversion.",
        run: append_with_buffered_number::<OutBuffer>,
    },
    Case {
        label: "string, incremental all by oss.",
        run: append_all_buffered::<OutBuffer>,
    },
    Case {
        label: "string, incremental by \"+\" with one ss conversion.",
        run: append_with_buffered_number::<DuplexBuffer>,
    },
    Case {
        label: "string, incremental all by ss.",
        run: append_all_buffered::<DuplexBuffer>,
    },
];

/// Append every field with `+=`; only the task id goes through an accumulator.
pub fn append_with_buffered_number<B>(scratch: &mut String, fixtures: &Fixtures) -> Result<u64>
where
    B: TextBuffer + Default,
{
    repeat(fixtures.loop_count, || {
        let mut base = String::from(BASE);
        let mut number = B::default();
        write!(number, "{TASK_ID}")?;

        base += UID_PREFIX;
        base += UID;
        base += DESTINATION_PREFIX;
        base += DESTINATION;
        base += TASK_ID_PREFIX;
        base += &number.text();
        *scratch = base;
        Ok(())
    })
}

/// Write every field into an accumulator, then append its text once.
pub fn append_all_buffered<B>(scratch: &mut String, fixtures: &Fixtures) -> Result<u64>
where
    B: TextBuffer + Default,
{
    repeat(fixtures.loop_count, || {
        let mut base = String::from(BASE);
        let mut fields = B::default();

        fields.write_str(UID_PREFIX)?;
        fields.write_str(UID)?;
        fields.write_str(DESTINATION_PREFIX)?;
        fields.write_str(DESTINATION)?;
        fields.write_str(TASK_ID_PREFIX)?;
        write!(fields, "{TASK_ID}")?;

        base += &fields.text();
        *scratch = base;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "|uid=idid|destination=target|taskid=1999";

    #[test]
    fn test_single_loop_builds_full_record() {
        let mut scratch = String::new();
        let done = CASES[0].run(&mut scratch, &Fixtures::new(1)).unwrap();
        assert_eq!(done, 1);
        assert_eq!(scratch, "asdfghjkl|uid=idid|destination=target|taskid=1999");
    }

    #[test]
    fn test_every_strategy_ends_with_same_fields() {
        for case in CASES {
            let mut scratch = String::new();
            case.run(&mut scratch, &Fixtures::new(3)).unwrap();
            assert!(scratch.ends_with(SUFFIX), "case: {} -> {scratch}", case.label);
            assert!(scratch.starts_with(BASE), "case: {}", case.label);
        }
    }

    #[test]
    fn test_every_case_runs_loop_count_iterations() {
        for loops in [1, 3, 17] {
            for case in CASES {
                let mut scratch = String::new();
                let done = case.run(&mut scratch, &Fixtures::new(loops)).unwrap();
                assert_eq!(done, loops, "case: {}", case.label);
            }
        }
    }

    #[test]
    fn test_record_does_not_grow_across_iterations() {
        let mut scratch = String::new();
        append_all_buffered::<DuplexBuffer>(&mut scratch, &Fixtures::new(50)).unwrap();
        assert_eq!(scratch.len(), BASE.len() + SUFFIX.len());
    }

    #[test]
    fn test_case_order_and_count() {
        assert_eq!(CASES.len(), 4);
        assert_eq!(CASES[3].label, "string, incremental all by ss.");
    }
}
