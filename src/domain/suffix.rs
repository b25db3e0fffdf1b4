//! Public suffix rules used to find the registrable part of a host.

use std::collections::HashSet;
use std::sync::OnceLock;

use psl::{List, Psl};

/// Decides how many trailing labels of a host form its public suffix.
pub trait SuffixRules {
    /// Number of trailing labels of `labels` that make up the public suffix.
    ///
    /// `labels` is non-empty and lowercase. The result may exceed the number
    /// of labels; callers clamp it.
    fn suffix_width(&self, labels: &[&str]) -> usize;
}

impl<R: SuffixRules + ?Sized> SuffixRules for &R {
    fn suffix_width(&self, labels: &[&str]) -> usize {
        (**self).suffix_width(labels)
    }
}

/// Compound country-code suffixes the legacy extractor knows about.
///
/// Any other suffix is treated as a single label.
const LEGACY_COMPOUND_SUFFIXES: &[&str] = &[
    // United Kingdom
    "ac.uk", "co.uk", "gov.uk", "ltd.uk", "me.uk", "mod.uk", "net.uk", "nhs.uk", "org.uk",
    "plc.uk", "police.uk", "sch.uk",
    // Australia
    "asn.au", "com.au", "edu.au", "gov.au", "id.au", "net.au", "org.au",
    // New Zealand
    "ac.nz", "co.nz", "geek.nz", "gen.nz", "govt.nz", "net.nz", "org.nz", "school.nz",
    // Japan
    "ac.jp", "ad.jp", "co.jp", "ed.jp", "go.jp", "gr.jp", "lg.jp", "ne.jp", "or.jp",
    // South Korea
    "ac.kr", "co.kr", "go.kr", "ne.kr", "or.kr", "re.kr",
    // China, Hong Kong, Taiwan
    "ac.cn", "com.cn", "edu.cn", "gov.cn", "net.cn", "org.cn", "com.hk", "edu.hk",
    "gov.hk", "net.hk", "org.hk", "com.tw", "edu.tw", "gov.tw", "net.tw", "org.tw",
    // South and South-East Asia
    "ac.in", "co.in", "firm.in", "gen.in", "ind.in", "net.in", "org.in", "com.sg",
    "edu.sg", "gov.sg", "net.sg", "org.sg", "com.my", "net.my", "org.my", "co.th",
    "in.th", "or.th", "co.id", "or.id", "web.id", "com.ph", "net.ph", "org.ph",
    // Middle East and Africa
    "ac.il", "co.il", "gov.il", "net.il", "org.il", "com.tr", "gen.tr", "net.tr",
    "org.tr", "ac.za", "co.za", "gov.za", "net.za", "org.za", "com.eg", "co.ke",
    // Americas
    "com.ar", "com.br", "net.br", "org.br", "gov.br", "com.co", "com.mx", "org.mx",
    "com.pe", "com.ve", "gc.ca", "qc.ca",
    // Europe
    "co.at", "or.at", "com.pl", "net.pl", "org.pl", "com.pt", "com.ru", "com.ua",
];

/// A fixed set of two-label public suffixes such as `co.uk`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSuffixes {
    entries: HashSet<String>,
}

impl CompoundSuffixes {
    /// Build a set from suffix strings. Entries are lowercased and stripped of
    /// surrounding dots.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().trim_matches('.').to_ascii_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }

    /// Parse a newline-separated suffix list. Blank lines and `#` comments are ignored.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(|line| line.split('#').next().unwrap_or(""))
                .filter(|line| !line.trim().is_empty()),
        )
    }

    /// The built-in table, initialized once for the whole process.
    pub fn legacy() -> &'static CompoundSuffixes {
        static LEGACY: OnceLock<CompoundSuffixes> = OnceLock::new();
        LEGACY.get_or_init(|| CompoundSuffixes::new(LEGACY_COMPOUND_SUFFIXES))
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.entries.contains(suffix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SuffixRules for CompoundSuffixes {
    fn suffix_width(&self, labels: &[&str]) -> usize {
        match labels {
            [.., second, last] if self.contains(&format!("{}.{}", second, last)) => 2,
            _ => 1,
        }
    }
}

/// Suffix rules from the full Mozilla Public Suffix List.
///
/// Gives different results from the legacy table for many hosts, so
/// passwords derived with it do not match ones derived with the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublicSuffixList;

impl SuffixRules for PublicSuffixList {
    fn suffix_width(&self, labels: &[&str]) -> usize {
        let host = labels.join(".");
        match List.suffix(host.as_bytes()) {
            Some(suffix) => suffix.as_bytes().split(|&b| b == b'.').count(),
            None => 1,
        }
    }
}
