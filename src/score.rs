//! # Score Evaluator
//! Pure composite ranking score over a `UnifiedRecord`: momentum blended by a
//! risk bias, a sentiment swing, and a holder-breadth term. No I/O, no
//! randomness; identical inputs always produce the identical score.

use crate::model::{ScoredRecord, UnifiedRecord};

/// Composite score for one record.
///
/// - momentum: `(1 - bias) * change_24h + bias * change_7d`; the bias slides
///   emphasis from pure 24h momentum (0.0) to pure 7d momentum (1.0).
/// - sentiment: `(bullish - bearish) / 10`, so a maximal ±100 swing moves the
///   total by ±10, commensurate with typical momentum magnitudes.
/// - breadth: `holders / 10_000`, unbounded above; holder counts stay modest
///   in this domain.
///
/// Missing fields count as 0. A bias outside `[0, 1]` is not rejected; it
/// extrapolates linearly, and constraining the input range is the caller's
/// job (typically a UI slider).
pub fn score(record: &UnifiedRecord, risk_bias: f64) -> f64 {
    let momentum = (1.0 - risk_bias) * record.change_24h.unwrap_or(0.0)
        + risk_bias * record.change_7d.unwrap_or(0.0);
    let sentiment = (record.bullish.unwrap_or(0.0) - record.bearish.unwrap_or(0.0)) / 10.0;
    let breadth = record.holders.unwrap_or(0) as f64 / 10_000.0;
    momentum + sentiment + breadth
}

/// Attach a score to every record, consuming the input batch.
pub fn attach_scores(records: Vec<UnifiedRecord>, risk_bias: f64) -> Vec<ScoredRecord> {
    records
        .into_iter()
        .map(|record| ScoredRecord {
            score: score(&record, risk_bias),
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> UnifiedRecord {
        UnifiedRecord::new("btc", "btc", "Bitcoin", 97_000.0)
    }

    #[test]
    fn all_optionals_absent_scores_zero_for_any_bias() {
        for bias in [0.0, 0.25, 0.5, 1.0, -0.5, 1.5] {
            assert_eq!(score(&bare(), bias), 0.0);
        }
    }

    #[test]
    fn bias_zero_depends_only_on_24h_change() {
        let mut r = bare();
        r.change_24h = Some(7.0);
        r.change_7d = Some(-100.0);
        assert_eq!(score(&r, 0.0), 7.0);
    }

    #[test]
    fn bias_one_depends_only_on_7d_change() {
        let mut r = bare();
        r.change_24h = Some(-100.0);
        r.change_7d = Some(3.0);
        assert_eq!(score(&r, 1.0), 3.0);
    }

    #[test]
    fn worked_example_totals_ten() {
        let mut r = bare();
        r.change_24h = Some(10.0);
        r.change_7d = Some(-2.0);
        r.bullish = Some(60.0);
        r.bearish = Some(20.0);
        r.holders = Some(20_000);
        // momentum 4, sentiment 4, breadth 2
        assert!((score(&r, 0.5) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_bias_extrapolates_instead_of_clamping() {
        let mut r = bare();
        r.change_24h = Some(10.0);
        r.change_7d = Some(0.0);
        // bias 2.0 => momentum = (1 - 2) * 10 + 2 * 0 = -10
        assert!((score(&r, 2.0) + 10.0).abs() < 1e-9);
    }

    #[test]
    fn attach_scores_keeps_records_intact() {
        let mut r = bare();
        r.bullish = Some(50.0);
        let scored = attach_scores(vec![r.clone()], 0.5);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].record, r);
        assert!((scored[0].score - 5.0).abs() < 1e-9);
    }
}
