use std::sync::LazyLock;

use regex::Regex;

/// Substitution, e.g. `chr1:g.243777040G>T`
static SUBSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(chr\w+:g\.\d+)([ACGT]+)>([ACGT]+)\n?$").expect("valid substitution pattern")
});

/// Deletion or duplication of one base or a range, e.g. `chr7:g.140453136_140453137del`
static DEL_DUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(chr\w+:g\.\d+(?:_\d+)?)(del|dup)\n?$").expect("valid del/dup pattern")
});

/// Copy-number alteration expressed as a bare range, e.g. `chr9:g.21967751_21995300`
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(chr\w+:g\.\d+_\d+)\n?$").expect("valid range pattern"));

/// Marker written to the reference column for copy-number ranges
pub const CNA_MARKER: &str = "CNA";

/// Structural components of a variant identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVariant {
    /// `<chrom>:g.<pos>[_<pos2>]`, or the untouched identifier when no shape matched
    pub chrom_pos: String,
    pub reference: String,
    pub alternate: String,
}

/// Chromosome and position split out of [`ParsedVariant::chrom_pos`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locus {
    pub chrom: String,
    pub pos: String,
}

impl ParsedVariant {
    fn new(chrom_pos: &str, reference: &str, alternate: &str) -> Self {
        Self {
            chrom_pos: chrom_pos.to_string(),
            reference: reference.to_string(),
            alternate: alternate.to_string(),
        }
    }

    /// Split `chrom_pos` on the first `:` and drop a leading `g.` from the position.
    ///
    /// Both fields are empty when there is no `:`.
    #[must_use]
    pub fn locus(&self) -> Locus {
        match self.chrom_pos.split_once(':') {
            Some((chrom, pos)) => Locus {
                chrom: chrom.to_string(),
                pos: pos.strip_prefix("g.").unwrap_or(pos).to_string(),
            },
            None => Locus::default(),
        }
    }
}

/// Split a variant identifier into position, reference allele and alternate allele.
///
/// Shapes are tried in order and the first match wins:
///
/// | Shape | Example | Result |
/// |-------|---------|--------|
/// | Substitution | `chr1:g.243777040G>T` | (`chr1:g.243777040`, `G`, `T`) |
/// | Deletion / duplication | `chr7:g.140453136_140453136del` | (`chr7:g.140453136_140453136`, `""`, `del`) |
/// | Range (CNA) | `chr9:g.100_200` | (`chr9:g.100_200`, `CNA`, `""`) |
///
/// A single trailing newline is tolerated and left out of the position.
/// Anything else comes back unchanged with empty alleles. Never fails.
///
/// # Examples
///
/// ```
/// use cgi_annotator::parsing::variant::split_variant;
///
/// let parsed = split_variant("chr1:g.243777040G>T");
/// assert_eq!(parsed.chrom_pos, "chr1:g.243777040");
/// assert_eq!(parsed.reference, "G");
/// assert_eq!(parsed.alternate, "T");
/// ```
#[must_use]
pub fn split_variant(variant: &str) -> ParsedVariant {
    if let Some(caps) = SUBSTITUTION.captures(variant) {
        return ParsedVariant::new(&caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = DEL_DUP.captures(variant) {
        return ParsedVariant::new(&caps[1], "", &caps[2]);
    }

    if let Some(caps) = RANGE.captures(variant) {
        return ParsedVariant::new(&caps[1], CNA_MARKER, "");
    }

    ParsedVariant::new(variant, "", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution() {
        let parsed = split_variant("chr1:g.243777040G>T");
        assert_eq!(parsed, ParsedVariant::new("chr1:g.243777040", "G", "T"));

        let locus = parsed.locus();
        assert_eq!(locus.chrom, "chr1");
        assert_eq!(locus.pos, "243777040");
    }

    #[test]
    fn test_multi_base_substitution() {
        let parsed = split_variant("chrX:g.1000ACG>TT");
        assert_eq!(parsed, ParsedVariant::new("chrX:g.1000", "ACG", "TT"));
    }

    #[test]
    fn test_deletion_range() {
        let parsed = split_variant("chr7:g.140453136_140453136del");
        assert_eq!(
            parsed,
            ParsedVariant::new("chr7:g.140453136_140453136", "", "del")
        );
        assert_eq!(parsed.locus().pos, "140453136_140453136");
    }

    #[test]
    fn test_single_base_duplication() {
        let parsed = split_variant("chr17:g.7577121dup");
        assert_eq!(parsed, ParsedVariant::new("chr17:g.7577121", "", "dup"));
    }

    #[test]
    fn test_copy_number_range() {
        let parsed = split_variant("chr9:g.21967751_21995300");
        assert_eq!(
            parsed,
            ParsedVariant::new("chr9:g.21967751_21995300", "CNA", "")
        );
    }

    #[test]
    fn test_trailing_newline_is_tolerated() {
        assert_eq!(
            split_variant("chr1:g.243777040G>T\n"),
            ParsedVariant::new("chr1:g.243777040", "G", "T")
        );
        assert_eq!(
            split_variant("chr17:g.7577121dup\n"),
            ParsedVariant::new("chr17:g.7577121", "", "dup")
        );
        assert_eq!(
            split_variant("chr9:g.21967751_21995300\n"),
            ParsedVariant::new("chr9:g.21967751_21995300", "CNA", "")
        );
        // Only one, and only a newline
        assert!(split_variant("chr1:g.243777040G>T\n\n").reference.is_empty());
        assert!(split_variant("chr1:g.243777040G>T\r\n").reference.is_empty());
    }

    #[test]
    fn test_unrecognized_shapes_fall_back() {
        for variant in [
            "",
            "BRAF V600E",
            "chr1:g.100G>N",
            "1:g.100G>T",
            "chr1:c.100G>T",
            "chr7:g.140453136delinsT",
            "chr1:g.243777040G>T ",
        ] {
            let parsed = split_variant(variant);
            assert_eq!(parsed.chrom_pos, variant);
            assert!(parsed.reference.is_empty(), "{variant}");
            assert!(parsed.alternate.is_empty(), "{variant}");
        }
    }

    #[test]
    fn test_locus_without_colon_is_empty() {
        let parsed = split_variant("BRAF V600E");
        assert_eq!(parsed.locus(), Locus::default());
    }

    #[test]
    fn test_locus_of_fallback_with_colon() {
        // Unparsed identifiers still get a best-effort split
        let locus = split_variant("chr1:c.100G>T").locus();
        assert_eq!(locus.chrom, "chr1");
        assert_eq!(locus.pos, "c.100G>T");
    }
}
