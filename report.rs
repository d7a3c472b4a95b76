use std::io::Write;

use crate::ranker::Ranking;

/// Write the ranking as a tab-separated table followed by the totals.
pub fn write_report<W: Write>(out: &mut W, ranking: &Ranking) -> std::io::Result<()> {
    writeln!(out, "Char\tFreq")?;
    for entry in &ranking.entries {
        writeln!(out, "{:?}\t{}", entry.ch, entry.count)?;
    }
    writeln!(out, "Unique chars:\t {}", ranking.unique)?;
    writeln!(out, "Total chars:\t {}", ranking.total)?;
    out.flush()
}
