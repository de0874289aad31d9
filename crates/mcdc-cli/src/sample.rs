//! Instrumented `strncmp` sample
//!
//! A bounded string comparison whose loop guard has three conditions. The
//! harness declares the rows that show each condition's independent effect,
//! runs four comparisons, and the resulting report must show both decision
//! tables as PASS.

use mcdc::{mcdc_check, mcdc_register, CoverageContext, McdcResult, TableId};
use std::fmt;

/// Loop guard `i < n && str1[i] != \0 && str1[i] == str2[i]`
pub const LOOP_GUARD_TABLE: TableId = TableId::new(0);

/// Exit decision `i == n`
pub const EXIT_TABLE: TableId = TableId::new(1);

/// Display name of the loop guard table
pub const LOOP_GUARD_NAME: &str = "i < n && str1[i] != \\0 && str1[i] == str2[i]";

/// Display name of the exit table
pub const EXIT_NAME: &str = "i == n";

/// One comparison of the sample suite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCase {
    /// Left operand, NUL bytes included
    pub str1: &'static [u8],
    /// Right operand, NUL bytes included
    pub str2: &'static [u8],
    /// Maximum number of bytes compared
    pub n: u32,
    /// Expected return value
    pub expected: i32,
}

/// The four comparisons that together cover both decision tables
pub const SAMPLE_CASES: [SampleCase; 4] = [
    SampleCase {
        str1: b"apple",
        str2: b"applee",
        n: 5,
        expected: 0,
    },
    SampleCase {
        str1: b"apples",
        str2: b"applee",
        n: 4,
        expected: 0,
    },
    SampleCase {
        str1: b"ap\0les",
        str2: b"ap\0lee",
        n: 5,
        expected: 0,
    },
    SampleCase {
        str1: b"hellos",
        str2: b"hellx",
        n: 5,
        expected: b'o' as i32 - b'x' as i32,
    },
];

/// Outcome of one sample comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseResult {
    /// 1-based case number
    pub number: usize,
    /// The case that ran
    pub case: SampleCase,
    /// Value returned by [`spt_strncmp`]
    pub actual: i32,
}

impl CaseResult {
    /// Whether the comparison returned the expected value
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test {} failed: strncmp(\"{}\", \"{}\", {}) = {}, expected {}",
            self.number,
            self.case.str1.escape_ascii(),
            self.case.str2.escape_ascii(),
            self.case.n,
            self.actual,
            self.case.expected
        )
    }
}

/// Byte at `index`, reading past the end as the C terminator
fn byte_at(s: &[u8], index: usize) -> u8 {
    s.get(index).copied().unwrap_or(0)
}

/// Allocate and fill both decision tables of the sample
///
/// # Errors
///
/// Returns an error if either table cannot be allocated or filled.
pub fn register_sample_tables(ctx: &mut CoverageContext) -> McdcResult<()> {
    ctx.allocate_table(4, 3, LOOP_GUARD_NAME)?;
    mcdc_register!(ctx; false, true, true)?;
    mcdc_register!(ctx; true, false, true)?;
    mcdc_register!(ctx; true, true, false)?;
    mcdc_register!(ctx; true, true, true)?;

    ctx.allocate_table(2, 1, EXIT_NAME)?;
    mcdc_register!(ctx; false)?;
    mcdc_register!(ctx; true)?;
    Ok(())
}

/// Compare at most `n` bytes of two C-style strings, recording the
/// condition vectors of both decisions into `ctx`.
///
/// Returns 0 when the first `n` bytes agree, otherwise the difference of the
/// first differing bytes.
///
/// # Errors
///
/// Returns an error if the sample tables were not registered in `ctx`.
pub fn spt_strncmp(ctx: &mut CoverageContext, str1: &[u8], str2: &[u8], n: u32) -> McdcResult<i32> {
    let limit = n as usize;
    let mut i = 0usize;

    while i < limit && byte_at(str1, i) != 0 && byte_at(str1, i) == byte_at(str2, i) {
        mcdc_check!(ctx, LOOP_GUARD_TABLE;
            i < limit,
            byte_at(str1, i) != 0,
            byte_at(str1, i) == byte_at(str2, i))?;
        i += 1;
    }

    mcdc_check!(ctx, LOOP_GUARD_TABLE;
        i < limit,
        byte_at(str1, i) != 0,
        byte_at(str1, i) == byte_at(str2, i))?;

    let result = if i == limit {
        mcdc_check!(ctx, EXIT_TABLE; i == limit)?;
        0
    } else {
        mcdc_check!(ctx, EXIT_TABLE; i == limit)?;
        i32::from(byte_at(str1, i)) - i32::from(byte_at(str2, i))
    };

    Ok(result)
}

/// Register the sample tables and run every [`SAMPLE_CASES`] entry
///
/// # Errors
///
/// Returns an error if table registration or a coverage check fails.
pub fn run_sample(ctx: &mut CoverageContext) -> McdcResult<Vec<CaseResult>> {
    register_sample_tables(ctx)?;

    SAMPLE_CASES
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let actual = spt_strncmp(ctx, case.str1, case.str2, case.n)?;
            Ok(CaseResult {
                number: index + 1,
                case: *case,
                actual,
            })
        })
        .collect()
}
