//! Plain string assembly from three literals, no numeric conversion

use std::fmt::Write;

use super::{Case, Fixtures, repeat};
use crate::Result;
use crate::buffer::{DuplexBuffer, OutBuffer, TextBuffer};
use crate::constants::{DATA_1, DATA_2, DATA_3};

/// Cases in report order.
pub const CASES: &[Case] = &[
    Case {
        label: "string, plain addition \"+\"",
        run: plain_addition,
    },
    Case {
        label: "string, incremental \"+=\"",
        run: incremental_add_assign,
    },
    Case {
        label: "string, \"append\"",
        run: incremental_push_str,
    },
    Case {
        label: "oss, creation in each loop, incremental",
        run: fresh_buffer_per_iteration,
    },
    Case {
        label: "oss, 1 creation, plain addition",
        run: reused_buffer_chained::<OutBuffer>,
    },
    Case {
        label: "oss, 1 creation, incremental",
        run: reused_buffer_incremental::<OutBuffer>,
    },
    Case {
        label: "ss, 1 creation, incremental",
        run: reused_buffer_incremental::<DuplexBuffer>,
    },
];

/// `a + b + c`, producing a new `String` every iteration.
pub fn plain_addition(scratch: &mut String, fixtures: &Fixtures) -> Result<u64> {
    let first = String::from(DATA_1);
    repeat(fixtures.loop_count, || {
        *scratch = first.clone() + DATA_2 + DATA_3;
        Ok(())
    })
}

/// Assign the first literal, then `+=` the other two.
pub fn incremental_add_assign(scratch: &mut String, fixtures: &Fixtures) -> Result<u64> {
    repeat(fixtures.loop_count, || {
        scratch.clear();
        scratch.push_str(DATA_1);
        *scratch += DATA_2;
        *scratch += DATA_3;
        Ok(())
    })
}

/// Assign the first literal, then `push_str` the other two.
pub fn incremental_push_str(scratch: &mut String, fixtures: &Fixtures) -> Result<u64> {
    repeat(fixtures.loop_count, || {
        scratch.clear();
        scratch.push_str(DATA_1);
        scratch.push_str(DATA_2);
        scratch.push_str(DATA_3);
        Ok(())
    })
}

/// New accumulator every iteration, text extracted every iteration.
pub fn fresh_buffer_per_iteration(scratch: &mut String, fixtures: &Fixtures) -> Result<u64> {
    repeat(fixtures.loop_count, || {
        let mut out = OutBuffer::new();
        out.write_str(DATA_1)?;
        out.write_str(DATA_2)?;
        out.write_str(DATA_3)?;
        *scratch = out.text();
        Ok(())
    })
}

/// One accumulator reset each iteration, all three literals in a single
/// `write!`. Text is extracted once after the loop.
pub fn reused_buffer_chained<B>(scratch: &mut String, fixtures: &Fixtures) -> Result<u64>
where
    B: TextBuffer + Default,
{
    let mut buf = B::default();
    let completed = repeat(fixtures.loop_count, || {
        buf.reset();
        write!(buf, "{DATA_1}{DATA_2}{DATA_3}")?;
        Ok(())
    })?;
    *scratch = buf.text();
    Ok(completed)
}

/// One accumulator reset each iteration, one statement per literal.
/// Text is extracted once after the loop.
pub fn reused_buffer_incremental<B>(scratch: &mut String, fixtures: &Fixtures) -> Result<u64>
where
    B: TextBuffer + Default,
{
    let mut buf = B::default();
    let completed = repeat(fixtures.loop_count, || {
        buf.reset();
        buf.write_str(DATA_1)?;
        buf.write_str(DATA_2)?;
        buf.write_str(DATA_3)?;
        Ok(())
    })?;
    *scratch = buf.text();
    Ok(completed)
}
