//! Documentation sections bundled with the binary.

use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSection {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

impl DocSection {
    /// Markdown suitable for the terminal renderer: the title as a heading
    /// followed by the body verbatim.
    pub fn to_markdown(&self) -> String {
        format!("# {}\n\n{}\n", self.title, self.body)
    }
}

/// Looks a section up by id, case-insensitively.
pub fn find_section(id: &str) -> Result<&'static DocSection, ContentError> {
    let wanted = id.trim().to_lowercase();
    SECTIONS
        .iter()
        .find(|section| section.id == wanted)
        .ok_or_else(|| ContentError::UnknownSection {
            id: id.to_string(),
            available: SECTIONS
                .iter()
                .map(|section| section.id)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

pub const SECTIONS: &[DocSection] = &[
    DocSection {
        id: "introduction",
        title: "Introduction",
        body: INTRODUCTION,
    },
    DocSection {
        id: "zk-proofs",
        title: "Zero-Knowledge Proofs",
        body: ZK_PROOFS,
    },
    DocSection {
        id: "solana",
        title: "Solana Integration",
        body: SOLANA,
    },
    DocSection {
        id: "x402-bridge",
        title: "x402 Privacy Bridge",
        body: X402_BRIDGE,
    },
    DocSection {
        id: "architecture",
        title: "System Architecture",
        body: ARCHITECTURE,
    },
    DocSection {
        id: "address-model",
        title: "Address & Key Model",
        body: ADDRESS_MODEL,
    },
    DocSection {
        id: "security",
        title: "Security Philosophy",
        body: SECURITY,
    },
    DocSection {
        id: "developer-sdk",
        title: "Developer SDK",
        body: DEVELOPER_SDK,
    },
    DocSection {
        id: "user-experience",
        title: "User Experience",
        body: USER_EXPERIENCE,
    },
    DocSection {
        id: "community",
        title: "Community",
        body: COMMUNITY,
    },
];

const INTRODUCTION: &str = r#"OrisysLabs is a research collective focused on experiments around terminals, identity, and how we interact with AI systems through raw interfaces.

We build privacy-first infrastructure on Solana, secured by zero-knowledge proofs, and connected through the x402 protocol for cross-chain interoperability.

Our mission is to strip away the abstractions between humans and machines. The command line is the truest form of human-machine dialogue. We believe in transparency through verifiability, not exposure.

Core Technologies:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Zero-Knowledge Proofs - Privacy without compromise
▸ Solana Integration - Speed and scalability
▸ x402 Protocol - Cross-chain privacy bridge
▸ Terminal-First Design - Raw AI interfaces"#;

const ZK_PROOFS: &str = r#"OrisysLabs uses zk-SNARK circuits to enforce transaction correctness while keeping all sensitive details hidden within cryptographic proofs.

WHAT ZK PROOFS HIDE:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Transaction amounts
▸ Sender identity
▸ Receiver identity  
▸ Metadata and behavioral patterns

WHAT ZK PROOFS VERIFY:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Spending key ownership
▸ Non-negative amounts and balance conservation
▸ Merkle tree membership of notes
▸ Creation of new valid commitments

Implementation Example:
```typescript
import { ZKProof } from '@orisys/zk';

const proof = await ZKProof.generate({
  statement: "balance >= amount",
  witness: privateData,
  public: commitment
});

await ZKProof.verify(proof); // ✓ Verified
```"#;

const SOLANA: &str = r#"OrisysLabs is built on Solana for maximum speed and minimal cost. Solana's architecture enables privacy-preserving applications at scale.

WHY SOLANA:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ 400ms finality - Near-instant confirmation
▸ 65,000 TPS - Massive throughput capacity
▸ $0.00025 avg tx cost - Practically free
▸ Proof of History - Trustless time ordering

SEALEVEL RUNTIME:
Solana's parallel execution environment enables multiple ZK proofs to be verified simultaneously, dramatically increasing throughput for privacy operations.

PROGRAM ARCHITECTURE:
```rust
use solana_program::entrypoint;
use orisys_zk::{prove, verify};

entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let proof = prove(data)?;
    verify(&proof, accounts)?;
    Ok(())
}
```"#;

const X402_BRIDGE: &str = r#"The x402 Privacy Bridge is a burn-and-mint mechanism that enables private cross-chain transfers while preserving full unlinkability.

HOW IT WORKS:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Step 1: BURN ON SOURCE CHAIN
Assets are cryptographically burned on the source chain, creating a proof of destruction verified by the bridge protocol.

Step 2: ZK PROOF GENERATION
Zero-knowledge proof is generated to verify the burn event without revealing sender, amount, or destination details.

Step 3: CROSS-CHAIN RELAY
Encrypted proof is relayed to the destination chain through a decentralized network of validators.

Step 4: MINT ON DESTINATION
Assets are minted to a fresh shielded address on the destination chain, preserving complete unlinkability.

SUPPORTED CHAINS:
┌─────────────┬──────────┐
│ Ethereum    │ LIVE     │
│ Solana      │ LIVE     │
│ Cosmos      │ LIVE     │
│ Polygon     │ LIVE     │
│ Arbitrum    │ LIVE     │
│ Base        │ SOON     │
│ Optimism    │ SOON     │
└─────────────┴──────────┘"#;

const ARCHITECTURE: &str = r#"OrisysLabs consists of modular components working together to enable secure, private, and scalable AI interactions.

CORE COMPONENTS:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

TERMINAL LAYER
Raw interface for human-machine dialogue. No abstractions, no middleware. Direct access to AI systems.

IDENTITY SYSTEM
ZK-based identity verification. Prove attributes without revealing data. Anonymous credentials for trustless auth.

PRIVACY BRIDGE (x402)
Burn-and-mint mechanism for cross-chain unlinkability. No custodial risk, just cryptographic proofs.

SOLANA RUNTIME
High-speed execution layer. Parallel proof verification. Sub-second finality.

PROOF SYSTEM (zk-SNARK)
Verifies spending key ownership, non-negative amounts, balance conservation, and Merkle tree membership."#;

const ADDRESS_MODEL: &str = r#"OrisysLabs uses a flexible address model with multiple key roles for maximum privacy and selective transparency.

KEY TYPES:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

SPEND KEY
The master key that authorizes private transfers. Keep this secret. Never share. Controls all funds.

VIEW KEY
Derived from spend key. Allows read-only access to transaction history. Share with auditors or counterparties who need visibility.

AUDIT KEY (Optional)
Special key for regulated entities. Enables compliance without compromising privacy for non-disclosed transactions.

ADDRESS FORMATS:
▸ Shielded Address - Fully private, default mode
▸ Transparent Address - Public, for compatibility
▸ Hybrid Mode - Mix both as needed"#;

const SECURITY: &str = r#"OrisysLabs emphasizes trust minimization, censorship resistance, and cryptographic rigor at every layer.

CORE PRINCIPLES:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Trust Minimization - Every component minimizes trust assumptions
▸ Censorship Resistance - Transactions cannot be blocked or filtered
▸ Cryptographic Rigor - Battle-tested, formally verified primitives
▸ Secure Upgrades - Timelocks allow users to exit before changes
▸ Safe Multi-Chain - Cryptographic proofs, not trusted bridges

THREAT MODEL:
▸ Global passive adversaries
▸ Metadata correlation attacks
▸ Cross-chain linking attempts
▸ Timing analysis
▸ Bridge exploits (no bridges to exploit)"#;

const DEVELOPER_SDK: &str = r#"Build privacy-preserving applications with our comprehensive SDK.

INSTALLATION:
```bash
npm install @orisys/core @orisys/zk @orisys/x402
```

BASIC USAGE:
```typescript
import { OrisysClient, ZKProof } from '@orisys/core';
import { X402Bridge } from '@orisys/x402';

// Initialize client
const client = new OrisysClient({
  network: 'mainnet',
  keypair: wallet.keypair
});

// Create shielded transfer
const transfer = await client.shield({
  amount: encrypted(value),
  recipient: shieldedAddress,
  proof: ZKProof.generate(),
});

// Cross-chain transfer
await X402Bridge.transfer({
  from: 'solana',
  to: 'ethereum',
  ...transfer
});
```

AVAILABLE PACKAGES:
▸ @orisys/core - Core privacy primitives
▸ @orisys/zk - Zero-knowledge proof system
▸ @orisys/x402 - Cross-chain bridge
▸ @orisys/terminal - Terminal interface SDK"#;

const USER_EXPERIENCE: &str = r#"Privacy should be invisible. OrisysLabs is designed for frictionless, intuitive use.

TERMINAL-FIRST DESIGN:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
The command line is our primary interface. Raw, direct, honest. No hidden abstractions or middleware bloat.

SELECTIVE TRANSPARENCY:
Users choose what data to reveal and to whom. Generate view keys for auditors, share transaction proofs with counterparties, or stay completely private.

INSTANT TRANSACTIONS:
Sub-second finality on Solana means you never wait. Private transactions confirm as fast as transparent ones.

CROSS-PLATFORM:
Terminal works everywhere. SSH into the system from any device."#;

const COMMUNITY: &str = r#"OrisysLabs is built in the open, for the community.

OFFICIAL CHANNELS:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ X (Twitter): https://x.com/OrisysLabs
▸ GitHub: https://github.com/OrisysLabs
▸ Discord: Coming soon
▸ Telegram: Coming soon

RESOURCES:
▸ Documentation: /docs
▸ Terminal: /terminal
▸ Whitepaper: /whitepaper

CONTRIBUTE:
All code is open source. Fork, improve, submit PRs. We review everything.

Privacy is infrastructure. Join us in building it."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
        assert_eq!(SECTIONS.len(), 10);
    }

    #[test]
    fn test_find_section_is_case_insensitive() {
        let section = find_section("  ZK-Proofs ").unwrap();
        assert_eq!(section.title, "Zero-Knowledge Proofs");
        assert_eq!(SECTIONS[0].id, "introduction");
    }

    #[test]
    fn test_unknown_section_lists_available_ids() {
        let err = find_section("tokenomics").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("tokenomics"));
        assert!(message.contains("introduction"));
        assert!(message.contains("community"));
    }

    #[test]
    fn test_markdown_keeps_code_fences() {
        let markdown = find_section("developer-sdk").unwrap().to_markdown();
        assert!(markdown.starts_with("# Developer SDK\n"));
        assert!(markdown.contains("```bash"));
        assert!(markdown.contains("npm install @orisys/core"));
    }
}
