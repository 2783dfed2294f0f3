//! Banners seeded into the transcript.

use crate::transcript::LineKind;

pub const PROMPT: &str = "orisys@terminal:~$";

pub const TAGLINE: &str = "Raw AI Interfaces";

/// Shown on the contract-address badge until a real address is published.
pub const CONTRACT_ADDRESS_PLACEHOLDER: &str = "Coming Soon";

/// Rows a fresh session starts with.
pub const WELCOME_BANNER: &[(LineKind, &str)] = &[
    (LineKind::Privacy, "═══════════════════════════════════════════════════════════════════"),
    (LineKind::Success, "     ██████╗ ██████╗ ██╗███████╗██╗   ██╗███████╗██╗      █████╗ ██████╗ ███████╗"),
    (LineKind::Success, "    ██╔═══██╗██╔══██╗██║██╔════╝╚██╗ ██╔╝██╔════╝██║     ██╔══██╗██╔══██╗██╔════╝"),
    (LineKind::Success, "    ██║   ██║██████╔╝██║███████╗ ╚████╔╝ ███████╗██║     ███████║██████╔╝███████╗"),
    (LineKind::Success, "    ██║   ██║██╔══██╗██║╚════██║  ╚██╔╝  ╚════██║██║     ██╔══██║██╔══██╗╚════██║"),
    (LineKind::Success, "    ╚██████╔╝██║  ██║██║███████║   ██║   ███████║███████╗██║  ██║██████╔╝███████║"),
    (LineKind::Success, "     ╚═════╝ ╚═╝  ╚═╝╚═╝╚══════╝   ╚═╝   ╚══════╝╚══════╝╚═╝  ╚═╝╚═════╝ ╚══════╝"),
    (LineKind::Privacy, "═══════════════════════════════════════════════════════════════════"),
    (LineKind::Output, "            OrisysLabs Terminal v1.0 | Raw AI Interfaces"),
    (LineKind::Output, "      Experiments around terminals, identity, and AI systems"),
    (LineKind::Privacy, "═══════════════════════════════════════════════════════════════════"),
    (LineKind::Output, "\nType 'help' to see available commands. Type 'shield' to go private.\n"),
];

/// Rows left behind by `clear`.
pub const CLEAR_BANNER: &[(LineKind, &str)] = &[
    (LineKind::Output, "OrisysLabs Privacy Terminal v1.0"),
    (LineKind::Output, "Type 'help' for available commands.\n"),
];
