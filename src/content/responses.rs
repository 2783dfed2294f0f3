//! Canned response blocks printed by the terminal commands.
//!
//! Every block starts with a newline so it renders one row below the echoed
//! prompt line.

pub const HELP_TEXT: &str = r#"
╔══════════════════════════════════════════════════════════════════╗
║               ORISYSLABS PRIVACY TERMINAL v1.0                   ║
╠══════════════════════════════════════════════════════════════════╣
║  CORE COMMANDS                                                   ║
║  ────────────────────────────────────────────────────────────── ║
║  help          - Display this help                              ║
║  about         - What is OrisysLabs?                            ║
║  manifesto     - Our vision and principles                      ║
║  zk            - Learn about Zero-Knowledge Proofs              ║
║  solana        - Solana integration details                     ║
║  x402          - x402 Privacy Bridge protocol                   ║
║  architecture  - System architecture overview                   ║
║  security      - Security philosophy                            ║
║  roadmap       - Development roadmap                            ║
║  social        - Official channels                              ║
║  ────────────────────────────────────────────────────────────── ║
║  UTILITY COMMANDS                                                ║
║  ────────────────────────────────────────────────────────────── ║
║  clear         - Clear terminal                                 ║
║  version       - Version info                                   ║
║  status        - Network status                                 ║
║  shield        - Enter shielded mode                            ║
╚══════════════════════════════════════════════════════════════════╝"#;

pub const ABOUT_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                      ABOUT ORISYSLABS                           │
└─────────────────────────────────────────────────────────────────┘

OrisysLabs is a research collective focused on experiments around
terminals, identity, and how we interact with AI systems through
raw interfaces.

WHAT WE BUILD:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Terminal-First Interfaces - Raw access to AI systems
▸ ZK Privacy Layer - Zero-knowledge proofs for privacy
▸ Solana Integration - High-speed, low-cost transactions
▸ x402 Protocol - Cross-chain privacy bridge

THE PHILOSOPHY:
We strip away the abstractions. The command line is the truest
form of human-machine dialogue. No middleware, no wrappers,
just raw interaction.

→ Follow us: https://x.com/OrisysLabs
→ GitHub: https://github.com/OrisysLabs"#;

pub const MANIFESTO_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                        MANIFESTO                                │
└─────────────────────────────────────────────────────────────────┘

We believe in:

▸ RAW INTERFACES
  Strip away the abstractions. Direct access to AI systems.
  The terminal is truth.

▸ PRIVACY BY DEFAULT
  Zero-knowledge proofs at the core. Your data stays yours.
  Prove what you need without revealing what you don't.

▸ IDENTITY WITHOUT EXPOSURE
  Authenticate without identification. Verify without revealing.
  Anonymous credentials for the trustless era.

▸ OPEN SOURCE FIRST
  All experiments live in the open. Inspect, fork, contribute.
  Transparency builds trust in trustless systems.

▸ SPEED WITHOUT COMPROMISE
  Built on Solana. 400ms finality. $0.00025 per transaction.
  Privacy shouldn't be slow.

This is OrisysLabs. Welcome to the terminal."#;

pub const ZK_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                  ZERO-KNOWLEDGE PROOFS                          │
└─────────────────────────────────────────────────────────────────┘

OrisysLabs uses zk-SNARKs to enforce correctness while keeping
all sensitive details hidden.

WHAT ZK PROOFS HIDE:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Transaction amounts         [HIDDEN]
▸ Sender identity             [HIDDEN]
▸ Receiver identity           [HIDDEN]
▸ Metadata & patterns         [HIDDEN]

WHAT ZK PROOFS VERIFY:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Spending key ownership      [VERIFIED]
▸ Non-negative amounts        [VERIFIED]
▸ Balance conservation        [VERIFIED]
▸ Merkle tree membership      [VERIFIED]

EXAMPLE:
zkProof.verify({
  statement: "age >= 18",
  witness: hidden,
  public: commitment
}) // ✓ Verified without revealing age"#;

pub const SOLANA_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                   SOLANA INTEGRATION                            │
└─────────────────────────────────────────────────────────────────┘

OrisysLabs is built on Solana for maximum performance.

METRICS:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Finality:      400ms
▸ TPS Capacity:  65,000
▸ Avg TX Cost:   $0.00025
▸ Status:        OPERATIONAL

WHY SOLANA:
▸ Proof of History - Trustless time ordering
▸ Sealevel Runtime - Parallel execution
▸ Global State - No sharding complexity
▸ Low Fees - Privacy for everyone

PROGRAM DEPLOYMENT:
Programs are deployed on Solana mainnet with verified ZK circuits
for private operations."#;

pub const X402_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                   x402 PRIVACY BRIDGE                           │
└─────────────────────────────────────────────────────────────────┘

Burn-and-mint privacy bridge for trustless cross-chain transfers.

PROTOCOL FLOW:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[01] BURN ON SOURCE CHAIN
     Assets cryptographically burned, proof created

[02] ZK PROOF GENERATION
     Proof verifies burn without revealing details

[03] CROSS-CHAIN RELAY
     Encrypted proof relayed via validators

[04] MINT ON DESTINATION
     Assets minted to shielded address

SUPPORTED CHAINS:
┌─────────────────┬────────────────────────────────────────────┐
│ Ethereum        │ ████████████████████ LIVE                  │
│ Solana          │ ████████████████████ LIVE                  │
│ Cosmos          │ ████████████████████ LIVE                  │
│ Polygon         │ ████████████████████ LIVE                  │
│ Arbitrum        │ ████████████████████ LIVE                  │
│ Base            │ ██████████░░░░░░░░░░ SOON                  │
└─────────────────┴────────────────────────────────────────────┘

42+ chains planned for full interoperability."#;

pub const ARCHITECTURE_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                   SYSTEM ARCHITECTURE                           │
└─────────────────────────────────────────────────────────────────┘

OrisysLabs modular component architecture:

TERMINAL LAYER
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
Raw interface for human-machine dialogue. Direct AI access.

IDENTITY SYSTEM
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
ZK-based verification. Anonymous credentials. Selective disclosure.

PROOF SYSTEM (zk-SNARK)
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
Verifies ownership, amounts, balances, Merkle membership.

PRIVACY BRIDGE (x402)
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
Burn-and-mint for cross-chain unlinkability.

SOLANA RUNTIME
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
High-speed execution. Parallel proof verification."#;

pub const SECURITY_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                   SECURITY PHILOSOPHY                           │
└─────────────────────────────────────────────────────────────────┘

CORE PRINCIPLES:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Trust Minimization     - Minimize assumptions everywhere
▸ Censorship Resistance  - Transactions cannot be blocked
▸ Cryptographic Rigor    - Battle-tested primitives only
▸ Secure Upgrades        - Timelocks allow exit
▸ Safe Multi-Chain       - Proofs, not bridges

THREAT MODEL:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Global passive adversaries       [PROTECTED]
▸ Metadata correlation attacks     [PROTECTED]
▸ Cross-chain linking attempts     [PROTECTED]
▸ Timing analysis                  [PROTECTED]
▸ Bridge exploits                  [N/A - no bridges]"#;

pub const ROADMAP_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                    DEVELOPMENT ROADMAP                          │
└─────────────────────────────────────────────────────────────────┘

PHASE 0: FOUNDATION ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ [COMPLETED] ✓
├─ Protocol design and specification
├─ Core cryptographic research
├─ Team formation
└─ Initial development

PHASE 1: CORE DEVELOPMENT ━━━━━━━━━━━━━━━━━━━━━━━━ [IN PROGRESS]
├─ Terminal interface launch
├─ ZK proof system deployment
├─ Solana program development
└─ Identity system prototype

PHASE 2: BRIDGE & SCALING ━━━━━━━━━━━━━━━━━━━━━━━━ [UPCOMING]
├─ x402 Privacy Bridge launch
├─ Multi-chain integration
├─ Developer SDK release
└─ Ecosystem expansion

PHASE 3: ECOSYSTEM ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ [PLANNED]
├─ 42+ chain support
├─ Governance launch
├─ Partner integrations
└─ Global adoption"#;

pub const SOCIAL_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                   OFFICIAL CHANNELS                             │
└─────────────────────────────────────────────────────────────────┘

CONNECT WITH ORISYSLABS:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ X (Twitter):  https://x.com/OrisysLabs
▸ GitHub:       https://github.com/OrisysLabs
▸ Discord:      Coming soon
▸ Telegram:     Coming soon

RESOURCES:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Documentation:  /docs
▸ Terminal:       /terminal (you are here)
▸ Whitepaper:     /whitepaper

Join us. Build with us. The terminal awaits."#;

pub const VERSION_TEXT: &str = r#"
OrisysLabs Privacy Terminal v1.0.0
Protocol Version: Privacy Layer v0.1
Network: Solana Mainnet
Security Level: Maximum
Build: 2024.12.23"#;

pub const STATUS_BODY: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                    NETWORK STATUS                               │
└─────────────────────────────────────────────────────────────────┘

SYSTEM STATUS:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
▸ Terminal Layer     [██████████] OPERATIONAL
▸ ZK Proof System    [██████████] GENERATING
▸ Solana Runtime     [██████████] ACTIVE
▸ x402 Bridge        [████████░░] LAUNCHING
▸ Identity System    [██████░░░░] DEVELOPMENT

METRICS:
┌────────────────────┬────────────────────────────────────────────┐
│ Solana TPS         │ 65,000 (capacity)                          │
│ Proof Gen Time     │ <1 second                                  │
│ Active Chains      │ 5 (ETH, SOL, COSMOS, POLY, ARB)            │
│ Privacy Level      │ Maximum                                    │
│ Network Uptime     │ 99.99%                                     │
└────────────────────┴────────────────────────────────────────────┘"#;

pub const SHIELD_TEXT: &str = r#"
┌─────────────────────────────────────────────────────────────────┐
│                    SHIELDED MODE ACTIVATED                      │
└─────────────────────────────────────────────────────────────────┘

                    ░░░░░░░░░░░░░░░░░░░░
                 ░░                      ░░
               ░░   YOUR CONNECTION IS    ░░
              ░░        S H I E L D E D    ░░
               ░░                         ░░
                 ░░   Zero-knowledge     ░░
                   ░░   protection     ░░
                     ░░░░░░░░░░░░░░░░░

Your interactions are now protected by:

▸ zk-SNARK cryptographic proofs
▸ Encrypted commitments
▸ Nullifier-based double-spend protection
▸ End-to-end unlinkability

No one can see:
▸ Transaction amounts
▸ Sender/receiver identity
▸ Metadata or patterns

You are private. You are protected. You are OrisysLabs.

Type 'help' to see available commands."#;
