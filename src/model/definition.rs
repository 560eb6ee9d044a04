use super::span::Span;

/// A single entry in the milestone table: a fixed offset plus the
/// human-readable label rendered for it.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneDefinition {
    pub span: Span,
    pub label: &'static str,
}

const fn def(span: Span, label: &'static str) -> MilestoneDefinition {
    MilestoneDefinition { span, label }
}

/// The canonical milestone table. Order matters: labels that land in the
/// same month keep their relative order from this table.
pub const MILESTONE_TABLE: &[MilestoneDefinition] = &[
    // ── Seconds ─────────────────────────────────────────────────
    def(Span::Seconds(1_000), "1,000 seconds alive"),
    def(Span::Seconds(1_337), "1,337 seconds alive"),
    def(Span::Seconds(10_000), "10,000 seconds alive"),
    def(Span::Seconds(99_999), "99,999 seconds alive"),
    def(Span::Seconds(100_000), "100,000 seconds alive"),
    def(Span::Seconds(314_159), "314,159 seconds alive (~π × 100,000)"),
    def(Span::Seconds(1_000_000), "1,000,000 seconds alive"),
    def(Span::Seconds(1_234_567), "1,234,567 seconds alive"),
    def(Span::Seconds(2_718_281), "2,718,281 seconds alive (~e × 1,000,000)"),
    def(Span::Seconds(3_141_592), "3,141,592 seconds alive (π × 1,000,000)"),
    def(Span::Seconds(10_000_000), "10,000,000 seconds alive"),
    def(Span::Seconds(1_000_000_000), "1,000,000,000 seconds alive"),
    def(Span::Seconds(2_000_000_000), "2,000,000,000 seconds alive (~63.4 years)"),
    def(Span::Seconds(2_147_483_647), "2,147,483,647 seconds alive (2^31, ~68 years)"),
    // ── Minutes ─────────────────────────────────────────────────
    def(Span::Minutes(1_000), "1,000 minutes alive"),
    def(Span::Minutes(10_000), "10,000 minutes alive"),
    def(Span::Minutes(12_345), "12,345 minutes alive"),
    def(Span::Minutes(100_000), "100,000 minutes alive"),
    def(Span::Minutes(123_456), "123,456 minutes alive"),
    def(Span::Minutes(1_000_000), "1,000,000 minutes alive"),
    // ── Hours ───────────────────────────────────────────────────
    def(Span::Hours(1_000), "1,000 hours alive"),
    def(Span::Hours(10_000), "10,000 hours alive"),
    def(Span::Hours(100_000), "100,000 hours alive (~11.4 years)"),
    def(Span::Hours(1_000_000), "1,000,000 hours alive"),
    // ── Days ────────────────────────────────────────────────────
    def(Span::Days(42), "42 days alive (the answer!)"),
    def(Span::Days(365), "1 year alive (365 days)"),
    def(Span::Days(730), "2 years alive (730 days)"),
    def(Span::Days(1_000), "1,000 days alive"),
    def(Span::Days(1_095), "3 years alive (1,095 days)"),
    def(Span::Days(1_111), "1,111 days alive (a unique number!)"),
    def(Span::Days(1_460), "4 years alive (1,460 days)"),
    def(Span::Days(1_461), "4 years alive (including leap year)"),
    def(Span::Days(1_825), "5 years alive (1,825 days)"),
    def(Span::Days(1_826), "5 years alive (1,826 days)"),
    def(Span::Days(2_222), "2,222 days alive"),
    def(Span::Days(3_333), "3,333 days alive"),
    def(Span::Days(4_444), "4,444 days alive"),
    def(Span::Days(5_000), "5,000 days alive"),
    def(Span::Days(3_650), "10 years alive (3,650 days)"),
    def(Span::Days(7_300), "20 years alive (7,300 days)"),
    def(Span::Days(10_000), "10,000 days alive"),
    def(Span::Days(10_950), "30 years alive (10,950 days)"),
    def(Span::Days(12_345), "12,345 days alive"),
    def(Span::Days(20_000), "20,000 days alive"),
    def(Span::Days(30_000), "30,000 days alive (~82.19 years)"),
    def(Span::Days(50_000), "50,000 days alive (~136.98 years)"),
    def(Span::Days(100_000), "100,000 days alive (~273.9 years)"),
    def(Span::Days(123_456), "123,456 days alive (~338.7 years)"),
    // ── Weeks ───────────────────────────────────────────────────
    def(Span::Weeks(100), "100 weeks alive"),
    def(Span::Weeks(500), "500 weeks alive"),
    def(Span::Weeks(1_000), "1,000 weeks alive"),
    // ── Years ───────────────────────────────────────────────────
    def(Span::Years(1), "1 year alive"),
    def(Span::Years(5), "5 years alive"),
    def(Span::Years(10), "10 years alive"),
    def(Span::Years(18), "18 years alive (legal age in many places)"),
    def(Span::Years(21), "21 years alive (US drinking age)"),
    def(Span::Years(30), "30 years alive"),
    def(Span::Years(42), "42 years alive (the answer!)"),
    def(Span::Years(50), "50 years alive (half a century)"),
    def(Span::Years(65), "65 years alive (common retirement age)"),
    def(Span::Years(75), "75 years alive (three-quarters of a century)"),
    def(Span::Years(90), "90 years alive (nonagenarian milestone)"),
    def(Span::Years(100), "100 years alive (centenarian)"),
    def(Span::Years(150), "150 years alive (a century and a half)"),
    def(Span::Years(200), "200 years alive (two centuries)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_span_is_non_negative() {
        for entry in MILESTONE_TABLE {
            assert!(
                entry.span.is_non_negative(),
                "negative span for '{}'",
                entry.label
            );
        }
    }

    #[test]
    fn no_duplicate_span_label_pairs() {
        for (i, a) in MILESTONE_TABLE.iter().enumerate() {
            for b in &MILESTONE_TABLE[i + 1..] {
                assert!(
                    !(a.span == b.span && a.label == b.label),
                    "duplicate entry: {:?} '{}'",
                    a.span,
                    a.label
                );
            }
        }
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in MILESTONE_TABLE.iter().enumerate() {
            for b in &MILESTONE_TABLE[i + 1..] {
                assert_ne!(a.label, b.label, "label reused across entries");
            }
        }
    }
}
