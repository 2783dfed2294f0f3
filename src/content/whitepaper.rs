//! Whitepaper front matter: document info, table of contents and abstract.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    pub number: &'static str,
    pub title: &'static str,
    pub page: &'static str,
}

pub const TITLE: &str = "OrisysLabs Whitepaper";

pub const SUBTITLE: &str = "Technical specification for privacy-preserving AI interfaces on Solana with ZK proofs and x402 cross-chain protocol.";

/// (value, label) pairs shown above the table of contents.
pub const DOCUMENT_INFO: &[(&str, &str)] = &[("v1.0", "VERSION"), ("70+", "PAGES"), ("ZK", "PROOF_SYSTEM")];

pub const TABLE_OF_CONTENTS: &[TocEntry] = &[
    TocEntry { number: "0", title: "Abstract", page: "1" },
    TocEntry { number: "1", title: "Introduction: The Privacy Problem", page: "3" },
    TocEntry { number: "2", title: "Zero-Knowledge Proof System", page: "8" },
    TocEntry { number: "3", title: "Solana Integration Architecture", page: "16" },
    TocEntry { number: "4", title: "x402 Privacy Bridge Protocol", page: "24" },
    TocEntry { number: "5", title: "Identity System Design", page: "32" },
    TocEntry { number: "6", title: "Terminal Interface Specification", page: "40" },
    TocEntry { number: "7", title: "Security Analysis", page: "48" },
    TocEntry { number: "8", title: "Tokenomics & Governance", page: "56" },
    TocEntry { number: "9", title: "Roadmap & Future Work", page: "64" },
    TocEntry { number: "A", title: "Appendix: Technical Specifications", page: "70" },
];

pub const ABSTRACT: &[&str] = &[
    "This paper introduces OrisysLabs, a research collective focused on experiments around terminals, identity, and how we interact with AI systems through raw interfaces.",
    "We present a privacy-first infrastructure built on Solana, secured by zero-knowledge proofs, and connected through the x402 protocol for cross-chain interoperability. Our approach strips away the abstractions between humans and machines, treating the command line as the truest form of human-machine dialogue.",
    "Through modular architecture including a terminal layer, ZK-based identity system, privacy bridge, and high-speed Solana runtime, we demonstrate how privacy-preserving AI interaction can be achieved without compromising on speed, cost, or user experience.",
    "The future of AI interaction is raw, private, and verifiable. This paper is our specification.",
];

/// Formats one TOC row as `[n] title ..... p.N`, padded to `width` columns.
pub fn format_toc_row(entry: &TocEntry, width: usize) -> String {
    let left = format!("[{}] {}", entry.number, entry.title);
    let right = format!("p.{}", entry.page);
    let used = left.width() + right.width();
    let gap = width.saturating_sub(used).max(2);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

/// Wraps the abstract paragraphs to `width` columns, blank line between them.
pub fn wrapped_abstract(width: usize) -> Vec<String> {
    let width = width.max(20);
    let mut lines = Vec::new();
    for (i, paragraph) in ABSTRACT.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(textwrap::wrap(paragraph, width).into_iter().map(|l| l.into_owned()));
    }
    lines
}
